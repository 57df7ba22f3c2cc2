//! Extension based file categories.

/// Category used for files that match no other category.
pub const FALLBACK_CATEGORY: &str = "Others";

/// A named group of file extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Category name, also used as the destination directory name.
    pub name: &'static str,
    /// Lowercase extensions including the leading dot.
    pub extensions: &'static [&'static str],
}

/// Known categories in lookup order.
///
/// Lookup returns the first category containing the extension,
/// so the order here decides precedence.
pub const CATEGORIES: [Category; 7] = [
    Category::new("Images", &[".jpg", ".jpeg", ".png", ".gif", ".bmp", ".svg", ".webp"]),
    Category::new("Documents", &[".pdf", ".doc", ".docx", ".txt", ".xlsx", ".pptx", ".odt"]),
    Category::new("Videos", &[".mp4", ".avi", ".mkv", ".mov", ".wmv", ".flv", ".webm"]),
    Category::new("Audio", &[".mp3", ".wav", ".flac", ".aac", ".ogg", ".wma"]),
    Category::new("Archives", &[".zip", ".rar", ".7z", ".tar", ".gz", ".bz2"]),
    Category::new("Code", &[".py", ".js", ".html", ".css", ".java", ".cpp", ".c", ".h"]),
    Category::new("Executables", &[".exe", ".msi", ".apk", ".app", ".deb", ".rpm"]),
];

impl Category {
    const fn new(name: &'static str, extensions: &'static [&'static str]) -> Self {
        Self { name, extensions }
    }

    /// Check if the given lowercase extension belongs to this category.
    #[must_use]
    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.contains(&extension)
    }
}

/// Get the lowercase extension of a file name, starting from the last dot.
///
/// Returns an empty string if the name has no dot.
///
/// ```rust
/// use file_organizer::organizer::extension_of;
///
/// assert_eq!(extension_of("Holiday.Photo.JPG"), ".jpg");
/// assert_eq!(extension_of("Makefile"), "");
/// ```
#[must_use]
pub fn extension_of(file_name: &str) -> String {
    file_name
        .rfind('.')
        .map_or_else(String::new, |index| file_name[index..].to_lowercase())
}

/// Get the category name for a file name.
///
/// Total over all inputs: anything without a known extension is [`FALLBACK_CATEGORY`].
#[must_use]
pub fn classify(file_name: &str) -> &'static str {
    classify_extension(&extension_of(file_name))
}

/// Get the category name for a lowercase extension as returned by [`extension_of`].
#[must_use]
pub fn classify_extension(extension: &str) -> &'static str {
    if extension.is_empty() {
        return FALLBACK_CATEGORY;
    }
    CATEGORIES
        .iter()
        .find(|category| category.contains(extension))
        .map_or(FALLBACK_CATEGORY, |category| category.name)
}
