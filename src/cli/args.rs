use crate::cli::runner::RunConfig;
use crate::constants::verbosity;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for create-vite-island.
#[derive(Parser, Debug, Clone)]
#[command(name = "create-vite-island", author, version, about, long_about = None)]
pub struct Args {
    /// Directory to create the project in.
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Skip all prompts and use defaults.
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Skip package installation.
    #[arg(long = "no-install")]
    pub no_install: bool,

    /// Download the template even if the directory is not empty.
    #[arg(short, long)]
    pub force: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            directory: self.directory.clone(),
            skip_prompts: self.yes,
            skip_install: self.no_install,
            force: self.force,
        }
    }
}

/// Parse command line arguments, exiting with clap's usage error on failure.
pub fn parse_cli() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Warn,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Warn);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_no_arguments() {
        let args = Args::parse_from(["create-vite-island"]);
        assert_eq!(args.directory, None);
        assert!(!args.yes);
        assert!(!args.no_install);
        assert!(!args.force);
        assert_eq!(args.verbose, 0);

        let config = args.run_config();
        assert_eq!(config.directory, None);
        assert!(!config.skip_prompts);
        assert!(!config.skip_install);
    }

    #[test]
    fn parses_full_feature_flags() {
        let args = Args::parse_from([
            "create-vite-island",
            "demo",
            "-y",
            "--no-install",
            "--force",
            "-vv",
        ]);
        assert_eq!(args.directory, Some(PathBuf::from("demo")));
        assert!(args.yes);
        assert!(args.no_install);
        assert!(args.force);
        assert_eq!(args.verbose, 2);

        let config = args.run_config();
        assert_eq!(config.directory, Some(PathBuf::from("demo")));
        assert!(config.skip_prompts);
        assert!(config.skip_install);
        assert!(config.force);
    }

    #[test]
    fn long_yes_flag_is_accepted() {
        let args = Args::parse_from(["create-vite-island", "--yes"]);
        assert!(args.yes);
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Args::try_parse_from(["create-vite-island", "--install-only"]).is_err());
    }
}
