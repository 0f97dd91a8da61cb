use std::process::ExitStatus;
use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Git error: {0}")]
    Git2Error(#[from] git2::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Prompt failed: {0}")]
    PromptError(#[from] dialoguer::Error),

    #[error("Invalid template source '{input}': {reason}.")]
    InvalidTemplateSource { input: String, reason: String },

    #[error("Could not find ref '{reference}' in the template repository.")]
    TemplateRefNotFound { reference: String },

    #[error("Template subdirectory '{subdir}' does not exist.")]
    TemplateSubdirNotFound { subdir: String },

    #[error("Invalid directive in {file}: {reason}.")]
    DirectiveError { file: String, reason: String },

    #[error("Destination directory '{destination}' is not empty. Use --force to override.")]
    DestinationNotEmpty { destination: String },

    /// The template could not be materialized. Always fatal.
    #[error("Failed to download template '{template}': {reason}")]
    TemplateFetchError { template: String, reason: String },

    /// The package manager ran but exited unsuccessfully.
    #[error("Dependency installation failed with status: {status}")]
    InstallError { status: ExitStatus },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Lines written to stderr for `err`, unstyled.
///
/// The runner has already announced a failed download, so only the reason is
/// left to print; everything else is treated as unexpected.
fn error_lines(err: &Error) -> Vec<String> {
    match err {
        Error::TemplateFetchError { reason, .. } => vec![reason.clone()],
        _ => vec!["An unexpected error occurred:".to_string(), err.to_string()],
    }
}

/// Prints the error to stderr and exits with [`exit_codes::FAILURE`].
pub fn default_error_handler(err: Error) -> ! {
    let mut lines = error_lines(&err).into_iter();
    if let Some(first) = lines.next() {
        eprintln!("{}", console::style(first).red());
    }
    for line in lines {
        eprintln!("{line}");
    }
    std::process::exit(exit_codes::FAILURE);
}
