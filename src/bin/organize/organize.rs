use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use file_organizer::organizer::{FileOutcome, Organizer, RunMode, RunObserver, RunReport, RunState};
use file_organizer::{get_relative_path_or_filename, path_to_filename_string, print_bold, print_error, print_warning};

use crate::OrganizeArgs;
use crate::config::Config;
use crate::logger::FileLogger;

#[derive(Debug)]
pub struct FileOrganize {
    root: PathBuf,
    config: Config,
}

/// Prints and logs progress while a run is going on.
struct RunPrinter<'a> {
    root: &'a Path,
    mode: RunMode,
    config: &'a Config,
    logger: Option<&'a mut FileLogger>,
}

impl FileOrganize {
    pub fn new(args: OrganizeArgs) -> Result<Self> {
        let root = file_organizer::resolve_source_dir(args.path.as_deref())?;
        let config = Config::from_args(args);
        if config.debug {
            eprintln!("Config: {config:#?}");
            eprintln!("Root: {}", root.display());
        }
        Ok(Self { root, config })
    }

    /// Preview first, then commit if confirmed.
    pub fn run(&self) -> Result<()> {
        let mut logger = if self.config.log {
            match FileLogger::new() {
                Ok(mut logger) => {
                    logger.log_init(&self.root, &self.config);
                    Some(logger)
                }
                Err(e) => {
                    print_error!("Failed to create log file: {e}");
                    None
                }
            }
        } else {
            None
        };

        if !self.config.json {
            print_bold!("Scanning: {}", self.root.display());
            println!("{}", "DRY RUN: no files will be moved\n".yellow());
        }

        let preview = self.run_mode(RunMode::Preview, logger.as_mut())?;
        let commit = self.commit_if_confirmed(&preview, logger.as_mut())?;

        if self.config.json {
            println!("{}", json_output(&preview, commit.as_ref())?);
        }

        Ok(())
    }

    /// Run the commit pass unless there is nothing to do or the user declines.
    fn commit_if_confirmed(&self, preview: &RunReport, logger: Option<&mut FileLogger>) -> Result<Option<RunReport>> {
        if preview.outcomes.is_empty() {
            if !self.config.json {
                print_warning!("No files found to organize");
            }
            return Ok(None);
        }

        if self.config.dryrun {
            return Ok(None);
        }

        if !self.config.auto && !Self::confirm()? {
            print_warning!("Operation cancelled. No files were moved.");
            return Ok(None);
        }

        if !self.config.json {
            print_bold!("\nOrganizing files in: {}\n", self.root.display());
        }
        let report = self.run_mode(RunMode::Commit, logger)?;
        if !self.config.json && report.stats.errors == 0 {
            println!("{}", "Done!".green());
        }

        Ok(Some(report))
    }

    /// Run the organizer once in the given mode and print the result.
    fn run_mode(&self, mode: RunMode, logger: Option<&mut FileLogger>) -> Result<RunReport> {
        let organizer = Organizer::new(&self.root, mode).with_exclude(self.config.exclude.iter().cloned());
        let mut printer = RunPrinter {
            root: &self.root,
            mode,
            config: &self.config,
            logger,
        };

        let report = organizer.run_with_observer(&mut printer)?;

        if let Some(logger) = printer.logger {
            logger.log_stats(mode, &report.stats);
        }

        if !self.config.json && !report.outcomes.is_empty() {
            report.stats.print_summary(mode);
        }

        Ok(report)
    }

    /// Ask on stderr so that stdout only carries results.
    fn confirm() -> Result<bool> {
        eprint!("{}", "\nProceed with organizing? (y/n): ".magenta());
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        Ok(is_confirmation(&input))
    }
}

/// Both runs as a single JSON document.
/// `commit` is null when the commit run did not happen.
#[derive(Serialize)]
struct JsonOutput<'a> {
    preview: &'a RunReport,
    commit: Option<&'a RunReport>,
}

fn json_output(preview: &RunReport, commit: Option<&RunReport>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonOutput { preview, commit })?)
}

fn is_confirmation(input: &str) -> bool {
    let answer = input.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

impl RunObserver for RunPrinter<'_> {
    fn state_changed(&mut self, state: RunState) {
        if let Some(logger) = self.logger.as_deref_mut() {
            logger.log_state(self.mode, state);
        }
        if self.config.verbose && !self.config.json {
            println!("{}", format!("[{} {state}]", self.mode).dimmed());
        }
    }

    fn file_processed(&mut self, outcome: &FileOutcome) {
        if let Some(logger) = self.logger.as_deref_mut() {
            logger.log_outcome(self.mode, outcome);
        }
        if self.config.json {
            return;
        }

        println!("  {}", path_to_filename_string(outcome.source()).blue());
        match outcome {
            FileOutcome::Moved {
                destination,
                category,
                renamed,
                ..
            } => {
                println!("    {} {}", "→".green(), format!("{category}/").green());
                if *renamed {
                    print_warning!("    Renamed to: {}", get_relative_path_or_filename(destination, self.root));
                }
            }
            FileOutcome::Failed { error, .. } => {
                print_error!("{error}");
            }
        }
    }
}
