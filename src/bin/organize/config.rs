use std::env;

use itertools::Itertools;

use file_organizer::organizer::OrganizeConfig;
use file_organizer::{os_str_to_string, print_error};

use crate::OrganizeArgs;

/// Final config combined from CLI arguments and user config file.
#[derive(Debug, Default)]
pub struct Config {
    pub(crate) auto: bool,
    pub(crate) debug: bool,
    pub(crate) dryrun: bool,
    pub(crate) exclude: Vec<String>,
    pub(crate) json: bool,
    pub(crate) log: bool,
    pub(crate) verbose: bool,
}

impl Config {
    /// Create config from given command line args and user config file.
    pub fn from_args(args: OrganizeArgs) -> Self {
        let user_config = OrganizeConfig::get_user_config().unwrap_or_else(|error| {
            print_error!("{error}");
            OrganizeConfig::default()
        });
        Self::from_args_and_user_config(args, user_config, own_file_name())
    }

    fn from_args_and_user_config(args: OrganizeArgs, user_config: OrganizeConfig, own_name: Option<String>) -> Self {
        let exclude: Vec<String> = user_config
            .exclude
            .into_iter()
            .chain(args.exclude)
            .chain(own_name)
            .unique()
            .collect();

        Self {
            auto: args.auto || user_config.auto,
            debug: args.debug || user_config.debug,
            dryrun: args.print || user_config.dryrun,
            exclude,
            json: args.json || user_config.json,
            log: args.log || user_config.log,
            verbose: args.verbose || user_config.verbose,
        }
    }
}

/// File name of the running executable, so it is never moved when run from the directory it organizes.
fn own_file_name() -> Option<String> {
    let path = env::current_exe().ok()?;
    path.file_name().map(os_str_to_string)
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use clap::Parser;

    fn parse_args(args: &[&str]) -> OrganizeArgs {
        OrganizeArgs::try_parse_from(std::iter::once("organize").chain(args.iter().copied()))
            .expect("should parse args")
    }

    #[test]
    fn merges_and_deduplicates_exclude() {
        let user_config = OrganizeConfig {
            exclude: vec!["desktop.ini".to_string(), "notes.txt".to_string()],
            ..Default::default()
        };
        let config = Config::from_args_and_user_config(
            parse_args(&["-e", "notes.txt", "-e", "todo.md"]),
            user_config,
            Some("organize".to_string()),
        );
        assert_eq!(config.exclude, vec!["desktop.ini", "notes.txt", "todo.md", "organize"]);
    }

    #[test]
    fn flags_from_either_source_are_enabled() {
        let user_config = OrganizeConfig {
            auto: true,
            log: true,
            ..Default::default()
        };
        let config = Config::from_args_and_user_config(parse_args(&["-p", "-v"]), user_config, None);
        assert!(config.auto);
        assert!(config.log);
        assert!(config.dryrun);
        assert!(config.verbose);
        assert!(!config.json);
        assert!(!config.debug);
    }

    #[test]
    fn own_name_is_always_excluded() {
        let config = Config::from_args_and_user_config(
            parse_args(&[]),
            OrganizeConfig::default(),
            Some("organize.exe".to_string()),
        );
        assert_eq!(config.exclude, vec!["organize.exe"]);
    }
}
