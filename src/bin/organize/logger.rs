use std::fs;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use file_organizer::organizer::{FileOutcome, RunMode, RunState, RunStats};

use crate::config::Config;

/// Simple file logger for organizer runs with buffered writes
pub struct FileLogger {
    writer: BufWriter<File>,
}

impl FileLogger {
    /// Create a new file logger, writing to ~/logs/file-organizer/organize_<timestamp>.log
    pub(crate) fn new() -> Result<Self> {
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        let log_dir = home_dir.join("logs").join("file-organizer");

        if !log_dir.exists() {
            fs::create_dir_all(&log_dir).context("Failed to create log directory")?;
        }

        let log_path = log_dir.join(format!("organize_{}.log", Local::now().format("%Y-%m-%d_%H-%M-%S")));
        Self::with_path(&log_path)
    }

    /// Create a file logger appending to the given file.
    pub(crate) fn with_path(log_path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .with_context(|| format!("Failed to create log file: {}", log_path.display()))?;

        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    fn timestamp() -> String {
        Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
    }

    /// Log when starting the program
    pub(crate) fn log_init(&mut self, root: &Path, config: &Config) {
        let _ = writeln!(self.writer, "[{}] INIT \"{}\"", Self::timestamp(), root.display());
        let _ = writeln!(self.writer, "  auto: {}", config.auto);
        let _ = writeln!(self.writer, "  dryrun: {}", config.dryrun);
        if !config.exclude.is_empty() {
            let _ = writeln!(self.writer, "  exclude: {:?}", config.exclude);
        }
        let _ = self.writer.flush();
    }

    /// Log a run state change
    pub(crate) fn log_state(&mut self, mode: RunMode, state: RunState) {
        let _ = writeln!(
            self.writer,
            "[{}] STATE   {} {state}",
            Self::timestamp(),
            mode.to_string().to_uppercase()
        );
        let _ = self.writer.flush();
    }

    /// Log the result for one file
    pub(crate) fn log_outcome(&mut self, mode: RunMode, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Moved {
                source, destination, ..
            } => {
                let action = match mode {
                    RunMode::Preview => "PLAN   ",
                    RunMode::Commit => "MOVE   ",
                };
                let _ = writeln!(
                    self.writer,
                    "[{}] {action} \"{}\" -> \"{}\"",
                    Self::timestamp(),
                    source.display(),
                    destination.display()
                );
            }
            FileOutcome::Failed { source, error, .. } => {
                let _ = writeln!(
                    self.writer,
                    "[{}] ERROR   \"{}\" ({}) | {error}",
                    Self::timestamp(),
                    source.display(),
                    outcome.category()
                );
            }
        }
        let _ = self.writer.flush();
    }

    /// Log final statistics
    pub(crate) fn log_stats(&mut self, mode: RunMode, stats: &RunStats) {
        let _ = writeln!(
            self.writer,
            "[{}] STATISTICS {}",
            Self::timestamp(),
            mode.to_string().to_uppercase()
        );
        let _ = writeln!(self.writer, "  Files moved:  {}", stats.moved);
        let _ = writeln!(self.writer, "  Files failed: {}", stats.errors);
        let _ = writeln!(self.writer, "  Files total:  {}", stats.total());
        let _ = writeln!(self.writer, "[{}] END", Self::timestamp());
        let _ = self.writer.flush();
    }
}
