use std::fs;
use std::path::{Path, PathBuf};

use crate::organizer::OrganizeError;
use crate::organizer::category::extension_of;

/// A regular file found directly under the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEntry {
    /// Absolute path to the file.
    pub path: PathBuf,
    /// File name with invalid Unicode removed, used for classification and display.
    pub name: String,
    /// Lowercase extension including the leading dot, or empty.
    pub extension: String,
}

impl ScanEntry {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let name = crate::path_to_filename_string(&path);
        let extension = extension_of(&name);
        Self { path, name, extension }
    }
}

/// Collect the regular files directly under `root`.
///
/// Subdirectories and symlinks pointing to directories are skipped,
/// as are files whose name equals one of the `exclude` names.
/// Entry order follows the filesystem.
///
/// # Errors
/// Returns `DirectoryNotFound` if `root` is not an existing directory,
/// and `Io` if the directory listing cannot be read.
/// No entries are returned on failure.
pub fn scan_directory(root: &Path, exclude: &[String]) -> Result<Vec<ScanEntry>, OrganizeError> {
    if !root.is_dir() {
        return Err(OrganizeError::DirectoryNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(root).map_err(|e| OrganizeError::io(root, e))? {
        let entry = entry.map_err(|e| OrganizeError::io(root, e))?;
        let path = entry.path();
        // Follows symlinks, so links to files are included and links to directories are not
        if !path.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        if exclude.iter().any(|name| file_name == name.as_str()) {
            continue;
        }
        files.push(ScanEntry::new(path));
    }
    Ok(files)
}
