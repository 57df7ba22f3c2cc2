pub mod config;
pub mod organizer;

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Command;
use clap_complete::Shell;
use colored::Colorize;

/// Resolves the provided source directory to an absolute path.
///
/// If `path` is `None` or empty, the current working directory is used.
/// Unlike a strict input path check, a missing path is not an error here:
/// the organizer reports it as a missing directory when the run starts.
///
/// ```rust
/// use std::path::Path;
/// use file_organizer::resolve_source_dir;
///
/// let path = Path::new("src");
/// let absolute_path = resolve_source_dir(Some(path)).unwrap();
/// assert!(absolute_path.is_absolute());
/// ```
pub fn resolve_source_dir(path: Option<&Path>) -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Failed to get current working directory")?;
    let Some(input_path) = path.filter(|p| !path_to_string(p).trim().is_empty()) else {
        return Ok(current_dir);
    };

    let filepath = current_dir.join(input_path);
    if !filepath.exists() {
        return Ok(filepath);
    }

    let absolute_input_path = dunce::canonicalize(&filepath)?;

    // Canonicalize fails for network drives on Windows :(
    if path_to_string(&absolute_input_path).starts_with(r"\\?") && !path_to_string(&filepath).starts_with(r"\\?") {
        Ok(filepath)
    } else {
        Ok(absolute_input_path)
    }
}

/// Insert a suffix before the file extension of a file name.
///
/// Only the last extension is considered, so `archive.tar.gz` gets the suffix before `.gz`.
/// Names without an extension, including dotfiles like `.bashrc`, get the suffix appended to the end.
///
/// ```rust
/// use std::ffi::OsStr;
/// use file_organizer::insert_suffix_before_extension;
///
/// let name = insert_suffix_before_extension(OsStr::new("report.txt"), "_1");
/// assert_eq!(name, "report_1.txt");
///
/// let name = insert_suffix_before_extension(OsStr::new("archive.tar.gz"), "_2");
/// assert_eq!(name, "archive.tar_2.gz");
///
/// let name = insert_suffix_before_extension(OsStr::new("README"), "_1");
/// assert_eq!(name, "README_1");
/// ```
#[must_use]
pub fn insert_suffix_before_extension(file_name: &OsStr, suffix: &str) -> OsString {
    let path = Path::new(file_name);
    let mut new_name: OsString = path.file_stem().unwrap_or(file_name).to_os_string();
    new_name.push(suffix);
    if let Some(extension) = path.extension() {
        new_name.push(".");
        new_name.push(extension);
    }
    new_name
}

/// Gets the relative path or filename from a full path based on a root directory.
///
/// If the full path is within the root directory, the function returns the relative path.
/// Otherwise, it returns just the filename. If the filename cannot be determined, the
/// full path is returned.
///
/// ```rust
/// use std::path::Path;
/// use file_organizer::get_relative_path_or_filename;
///
/// let root = Path::new("/root/dir");
/// let full_path = root.join("Images/photo.jpg");
/// assert_eq!(get_relative_path_or_filename(&full_path, root), "Images/photo.jpg");
///
/// let outside_path = Path::new("/other/dir/another.txt");
/// assert_eq!(get_relative_path_or_filename(outside_path, root), "another.txt");
/// ```
#[must_use]
pub fn get_relative_path_or_filename(full_path: &Path, root: &Path) -> String {
    if full_path == root {
        return full_path.file_name().unwrap_or_default().to_string_lossy().to_string();
    }
    full_path.strip_prefix(root).map_or_else(
        |_| {
            full_path.file_name().map_or_else(
                || full_path.display().to_string(),
                |name| name.to_string_lossy().to_string(),
            )
        },
        |relative_path| relative_path.display().to_string(),
    )
}

/// Convert `OsStr` to String with invalid Unicode handling.
pub fn os_str_to_string(name: &OsStr) -> String {
    name.to_str().map_or_else(
        || name.to_string_lossy().replace('\u{FFFD}', ""),
        std::string::ToString::to_string,
    )
}

/// Convert given path to string with invalid Unicode handling.
pub fn path_to_string(path: &Path) -> String {
    path.to_str().map_or_else(
        || path.to_string_lossy().to_string().replace('\u{FFFD}', ""),
        std::string::ToString::to_string,
    )
}

/// Convert given path to filename string with invalid Unicode handling.
#[must_use]
pub fn path_to_filename_string(path: &Path) -> String {
    os_str_to_string(path.file_name().unwrap_or_default())
}

#[inline]
pub fn print_bold(message: &str) {
    println!("{}", message.bold());
}

#[macro_export]
macro_rules! print_bold {
    ($($arg:tt)*) => {
        $crate::print_bold(&format!($($arg)*))
    };
}

#[inline]
pub fn print_error(message: &str) {
    eprintln!("{}", format!("Error: {message}").red());
}

#[macro_export]
macro_rules! print_error {
    ($($arg:tt)*) => {
        $crate::print_error(&format!($($arg)*))
    };
}

#[inline]
pub fn print_warning(message: &str) {
    eprintln!("{}", message.yellow());
}

#[macro_export]
macro_rules! print_warning {
    ($($arg:tt)*) => {
        $crate::print_warning(&format!($($arg)*))
    };
}

/// Generate a shell completion script for the given shell
/// and write it to the user's completion directory.
pub fn generate_shell_completion(shell: Shell, mut command: Command, command_name: &str) -> Result<()> {
    let out_dir = get_shell_completion_dir(shell, command_name)?;
    let path = clap_complete::generate_to(shell, &mut command, command_name, out_dir)?;
    println!("Completion file generated to: {}", path.display());
    Ok(())
}

/// Determine the appropriate directory for storing shell completions.
///
/// First checks if the user-specific directory exists,
/// then checks for the global directory.
/// If neither exist, creates and uses the user-specific dir.
fn get_shell_completion_dir(shell: Shell, name: &str) -> Result<PathBuf> {
    let home = dirs::home_dir().context("Failed to get home directory")?;

    // Special handling for oh-my-zsh.
    // Create custom "plugin", which will then have to be loaded in .zshrc
    if shell == Shell::Zsh {
        let omz_plugins = home.join(".oh-my-zsh/custom/plugins");
        if omz_plugins.exists() {
            let plugin_dir = omz_plugins.join(name);
            std::fs::create_dir_all(&plugin_dir)?;
            return Ok(plugin_dir);
        }
    }

    let user_dir = match shell {
        Shell::PowerShell => {
            if cfg!(windows) {
                home.join(r"Documents\PowerShell\completions")
            } else {
                home.join(".config/powershell/completions")
            }
        }
        Shell::Bash => home.join(".bash_completion.d"),
        Shell::Elvish => home.join(".elvish"),
        Shell::Fish => home.join(".config/fish/completions"),
        Shell::Zsh => home.join(".zsh/completions"),
        _ => anyhow::bail!("Unsupported shell"),
    };

    if user_dir.exists() {
        return Ok(user_dir);
    }

    let global_dir = match shell {
        Shell::PowerShell => user_dir.clone(),
        Shell::Bash => PathBuf::from("/etc/bash_completion.d"),
        Shell::Fish => PathBuf::from("/usr/share/fish/completions"),
        Shell::Zsh => PathBuf::from("/usr/share/zsh/site-functions"),
        _ => anyhow::bail!("Unsupported shell"),
    };

    if global_dir.exists() {
        return Ok(global_dir);
    }

    std::fs::create_dir_all(&user_dir)?;
    Ok(user_dir)
}

#[cfg(test)]
mod lib_tests {
    use super::*;

    use std::fs::File;

    use tempfile::tempdir;

    #[test]
    fn test_resolve_source_dir_valid() {
        let dir = tempdir().unwrap();
        let resolved = resolve_source_dir(Some(dir.path())).unwrap();
        assert_eq!(resolved, dunce::canonicalize(dir.path()).unwrap());
    }

    #[test]
    fn test_resolve_source_dir_nonexistent_is_not_an_error() {
        let path = Path::new("nonexistent-organizer-dir");
        let resolved = resolve_source_dir(Some(path)).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("nonexistent-organizer-dir"));
    }

    #[test]
    fn test_resolve_source_dir_empty() {
        let path = Path::new("  \n");
        let resolved = resolve_source_dir(Some(path)).unwrap();
        assert_eq!(resolved, env::current_dir().unwrap());
    }

    #[test]
    fn test_resolve_source_dir_default() {
        let resolved = resolve_source_dir(None).unwrap();
        assert_eq!(resolved, env::current_dir().unwrap());
    }

    #[test]
    fn test_insert_suffix_dotfile() {
        assert_eq!(insert_suffix_before_extension(OsStr::new(".bashrc"), "_1"), ".bashrc_1");
    }

    #[test]
    fn test_insert_suffix_multiple_dots() {
        assert_eq!(
            insert_suffix_before_extension(OsStr::new("Some.Name.2024.mp4"), "_3"),
            "Some.Name.2024_3.mp4"
        );
    }

    #[test]
    fn test_path_to_filename_string() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("photo.JPG");
        File::create(&file_path).unwrap();
        assert_eq!(path_to_filename_string(&file_path), "photo.JPG");
    }

    #[test]
    fn test_relative_path_for_root() {
        let root = Path::new("/data/downloads");
        assert_eq!(get_relative_path_or_filename(root, root), "downloads");
    }
}
