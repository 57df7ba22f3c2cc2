//! Organizer engine for sorting files into category directories.
//!
//! Files directly under a source directory are classified by extension,
//! given a collision-free destination inside a category subdirectory,
//! and moved there in commit mode. Preview mode runs the same steps without touching the filesystem.

mod category;
mod config;
mod error;
mod placement;
mod run;
mod scanner;
mod stats;

pub use category::{CATEGORIES, Category, FALLBACK_CATEGORY, classify, classify_extension, extension_of};
pub use config::OrganizeConfig;
pub use error::OrganizeError;
pub use placement::{Placement, move_file, resolve_destination};
pub use run::{FileOutcome, Organizer, RunMode, RunObserver, RunReport, RunState};
pub use scanner::{ScanEntry, scan_directory};
pub use stats::RunStats;
