use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Collision-free destination for a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// Category directory the file goes into.
    pub directory: PathBuf,
    /// Full destination path inside the category directory.
    pub path: PathBuf,
    /// True when the original file name was taken and a numbered name is used instead.
    pub renamed: bool,
}

/// Compute a destination path in `root/category` that does not exist yet.
///
/// The original file name is used when free,
/// otherwise `_1`, `_2`, ... is inserted before the extension until a free name is found.
/// Only checks the filesystem, nothing is created,
/// so a name is only taken once an earlier file has actually been moved there.
///
/// # Errors
/// Returns an error if checking for an existing file fails.
pub fn resolve_destination(root: &Path, category: &str, file_name: &OsStr) -> io::Result<Placement> {
    let directory = root.join(category);
    let mut path = directory.join(file_name);
    let mut counter: usize = 0;
    while path.try_exists()? {
        counter += 1;
        path = directory.join(crate::insert_suffix_before_extension(file_name, &format!("_{counter}")));
    }
    Ok(Placement {
        directory,
        path,
        renamed: counter > 0,
    })
}

/// Move a file to its destination.
///
/// Falls back to copy and delete when the destination is on another filesystem.
///
/// # Errors
/// Returns an error if the file could not be moved.
/// The source is only removed after a successful copy.
pub fn move_file(source: &Path, destination: &Path) -> io::Result<()> {
    match fs::rename(source, destination) {
        Err(error) if error.kind() == io::ErrorKind::CrossesDevices => copy_and_remove(source, destination),
        result => result,
    }
}

fn copy_and_remove(source: &Path, destination: &Path) -> io::Result<()> {
    fs::copy(source, destination)?;
    fs::remove_file(source)
}
