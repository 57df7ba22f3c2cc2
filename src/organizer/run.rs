//! Two-phase organizer run: preview what would happen, or commit the moves.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::organizer::placement::{Placement, move_file, resolve_destination};
use crate::organizer::scanner::{ScanEntry, scan_directory};
use crate::organizer::{OrganizeError, RunStats, classify_extension};

/// Whether a run touches the filesystem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Compute outcomes without creating directories or moving files.
    #[default]
    Preview,
    /// Create category directories and move files.
    Commit,
}

/// Phases of a run in the order they are entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RunState {
    Idle,
    Scanning,
    PerFileProcessing,
    Summarizing,
    Done,
}

/// Result of processing a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Moved {
        source: PathBuf,
        destination: PathBuf,
        category: &'static str,
        renamed: bool,
    },
    Failed {
        source: PathBuf,
        category: &'static str,
        error: String,
    },
}

/// Everything a finished run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub root: PathBuf,
    pub mode: RunMode,
    pub stats: RunStats,
    pub outcomes: Vec<FileOutcome>,
}

/// Receives progress from a running [`Organizer`].
///
/// Both methods default to doing nothing.
pub trait RunObserver {
    fn state_changed(&mut self, _state: RunState) {}

    fn file_processed(&mut self, _outcome: &FileOutcome) {}
}

impl RunObserver for () {}

/// Organizer for a single run over one source directory.
///
/// Running consumes the organizer, so every run starts from a fresh instance.
#[derive(Debug)]
pub struct Organizer {
    root: PathBuf,
    mode: RunMode,
    exclude: Vec<String>,
    state: RunState,
    stats: RunStats,
}

impl Organizer {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, mode: RunMode) -> Self {
        Self {
            root: root.into(),
            mode,
            exclude: Vec::new(),
            state: RunState::Idle,
            stats: RunStats::default(),
        }
    }

    /// Leave files with any of these exact names in place.
    #[must_use]
    pub fn with_exclude(mut self, names: impl IntoIterator<Item = String>) -> Self {
        self.exclude.extend(names);
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub const fn mode(&self) -> RunMode {
        self.mode
    }

    /// Run without progress reporting.
    ///
    /// # Errors
    /// Returns an error if the source directory can not be scanned.
    pub fn run(self) -> Result<RunReport, OrganizeError> {
        self.run_with_observer(&mut ())
    }

    /// Run and report each state change and processed file to `observer`.
    ///
    /// Failures for single files are counted and the run continues with the next file.
    ///
    /// # Errors
    /// Returns an error if the source directory can not be scanned.
    /// Nothing has been moved in that case.
    pub fn run_with_observer(mut self, observer: &mut impl RunObserver) -> Result<RunReport, OrganizeError> {
        self.enter(RunState::Scanning, observer);
        let entries = match scan_directory(&self.root, &self.exclude) {
            Ok(entries) => entries,
            Err(error) => {
                self.enter(RunState::Done, observer);
                return Err(error);
            }
        };

        self.enter(RunState::PerFileProcessing, observer);
        let mut outcomes = Vec::with_capacity(entries.len());
        for entry in &entries {
            let outcome = self.process_file(entry);
            match outcome {
                FileOutcome::Moved { .. } => self.stats.add_moved(),
                FileOutcome::Failed { .. } => self.stats.add_error(),
            }
            observer.file_processed(&outcome);
            outcomes.push(outcome);
        }

        self.enter(RunState::Summarizing, observer);
        let report = RunReport {
            root: self.root.clone(),
            mode: self.mode,
            stats: self.stats,
            outcomes,
        };

        self.enter(RunState::Done, observer);
        Ok(report)
    }

    fn enter(&mut self, state: RunState, observer: &mut impl RunObserver) {
        debug_assert!(state > self.state, "Invalid transition {:?} -> {state:?}", self.state);
        self.state = state;
        observer.state_changed(state);
    }

    fn process_file(&self, entry: &ScanEntry) -> FileOutcome {
        let category = classify_extension(&entry.extension);
        match self.place_file(entry, category) {
            Ok(placement) => FileOutcome::Moved {
                source: entry.path.clone(),
                destination: placement.path,
                category,
                renamed: placement.renamed,
            },
            Err(error) => FileOutcome::Failed {
                source: entry.path.clone(),
                category,
                error: error.to_string(),
            },
        }
    }

    fn place_file(&self, entry: &ScanEntry, category: &str) -> std::io::Result<Placement> {
        let file_name = entry.path.file_name().unwrap_or_default();
        let placement = resolve_destination(&self.root, category, file_name)?;
        if self.mode == RunMode::Commit {
            fs::create_dir_all(&placement.directory)?;
            move_file(&entry.path, &placement.path)?;
        }
        Ok(placement)
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Preview => "preview",
            Self::Commit => "commit",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Scanning => "scanning",
            Self::PerFileProcessing => "processing files",
            Self::Summarizing => "summarizing",
            Self::Done => "done",
        };
        write!(f, "{name}")
    }
}

impl FileOutcome {
    #[must_use]
    pub fn source(&self) -> &Path {
        match self {
            Self::Moved { source, .. } | Self::Failed { source, .. } => source,
        }
    }

    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Moved { category, .. } | Self::Failed { category, .. } => category,
        }
    }
}
