/// Handles argument parsing and the scaffolding workflow.
pub mod cli;

/// Fixed names, commands and exit codes.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Runs the package manager in a generated project.
pub mod installer;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Template sources and the fetchers that materialize them.
pub mod loader;

/// User input and interaction handling.
pub mod prompt;
