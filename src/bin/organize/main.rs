mod config;
mod logger;
mod organize;

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use crate::organize::FileOrganize;

#[derive(Parser)]
#[command(author, version, name = env!("CARGO_BIN_NAME"), about = "Organize files into directories by file type")]
pub(crate) struct OrganizeArgs {
    /// Optional input directory, defaults to current directory
    #[arg(value_hint = clap::ValueHint::DirPath)]
    path: Option<PathBuf>,

    /// Organize without asking for confirmation after the preview
    #[arg(short, long)]
    auto: bool,

    /// Print debug information
    #[arg(short = 'D', long)]
    debug: bool,

    /// Leave files with the given name in place
    #[arg(short = 'e', long, num_args = 1, action = clap::ArgAction::Append, name = "EXCLUDE")]
    exclude: Vec<String>,

    /// Print results as JSON
    #[arg(short, long)]
    json: bool,

    /// Write a log file to ~/logs/file-organizer
    #[arg(short = 'L', long)]
    log: bool,

    /// Only print the preview without moving files
    #[arg(short, long)]
    print: bool,

    /// Generate shell completion
    #[arg(short = 'l', long, name = "SHELL")]
    completion: Option<Shell>,

    /// Print verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = OrganizeArgs::parse();
    if let Some(ref shell) = args.completion {
        file_organizer::generate_shell_completion(*shell, OrganizeArgs::command(), env!("CARGO_BIN_NAME"))
    } else {
        FileOrganize::new(args)?.run()
    }
}

#[cfg(test)]
mod args_tests {
    use super::*;

    #[test]
    fn verify_cli() {
        OrganizeArgs::command().debug_assert();
    }

    #[test]
    fn parses_repeated_exclude() {
        let args = OrganizeArgs::try_parse_from(["organize", "-e", "a.txt", "--exclude", "b.txt", "downloads"])
            .expect("should parse args");
        assert_eq!(args.exclude, vec!["a.txt", "b.txt"]);
        assert_eq!(args.path, Some(PathBuf::from("downloads")));
    }

    #[test]
    fn defaults_to_no_path() {
        let args = OrganizeArgs::try_parse_from(["organize", "-p"]).expect("should parse args");
        assert!(args.path.is_none());
        assert!(args.print);
        assert!(!args.auto);
    }
}
