pub mod args;
pub mod report;
pub mod runner;

pub use args::{get_log_level_from_verbose, parse_cli, Args};
pub use report::{InstallOutcome, Report, Reporter};
pub use runner::{run, RunConfig, Runner};
