use std::fmt;

use colored::Colorize;
use serde::Serialize;

use crate::organizer::RunMode;

/// Outcome counters for one organizer run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Files moved, or that would be moved in preview mode.
    pub moved: usize,
    /// Files that failed.
    pub errors: usize,
}

impl RunStats {
    pub(crate) const fn add_moved(&mut self) {
        self.moved += 1;
    }

    pub(crate) const fn add_error(&mut self) {
        self.errors += 1;
    }

    /// Total number of files processed.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.moved + self.errors
    }

    pub fn print_summary(&self, mode: RunMode) {
        println!("{}", "\n--- Summary ---".bold().magenta());
        match mode {
            RunMode::Preview => println!("{}", format!("{} file(s) would be organized", self.moved).green()),
            RunMode::Commit => println!("{}", format!("{} file(s) organized", self.moved).green()),
        }
        if self.errors > 0 {
            println!("{}", format!("{} error(s) occurred", self.errors).red());
        }
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "moved: {}, errors: {}", self.moved, self.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_only_increase() {
        let mut stats = RunStats::default();
        stats.add_moved();
        stats.add_moved();
        stats.add_error();
        assert_eq!(stats.moved, 2);
        assert_eq!(stats.errors, 1);
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn test_display() {
        let stats = RunStats { moved: 4, errors: 0 };
        assert_eq!(stats.to_string(), "moved: 4, errors: 0");
    }

    #[test]
    fn test_serialize() {
        let stats = RunStats { moved: 3, errors: 1 };
        let json = serde_json::to_string(&stats).expect("Failed to serialize");
        assert_eq!(json, r#"{"moved":3,"errors":1}"#);
    }
}
