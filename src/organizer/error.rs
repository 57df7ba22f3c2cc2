use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an organizer run before any file is processed.
///
/// Failures for individual files are not errors of the run:
/// they are counted in the run statistics and recorded in the file outcome.
#[derive(Debug, Error)]
pub enum OrganizeError {
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Failed to read directory {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl OrganizeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
