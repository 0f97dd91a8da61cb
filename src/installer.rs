use std::path::Path;
use std::process::{Command, Stdio};

use crate::{
    constants::npm,
    error::{Error, Result},
};

/// Installs a project's dependencies.
pub trait PackageInstaller {
    /// Runs the installation in `working_dir`, blocking until it finishes.
    fn install(&self, working_dir: &Path) -> Result<()>;
}

impl<T: PackageInstaller + ?Sized> PackageInstaller for &T {
    fn install(&self, working_dir: &Path) -> Result<()> {
        (**self).install(working_dir)
    }
}

/// Runs `npm install` as a child process with all output discarded.
#[derive(Debug, Clone)]
pub struct NpmInstaller {
    program: String,
    args: Vec<String>,
}

impl NpmInstaller {
    pub fn new() -> Self {
        Self { program: npm::PROGRAM.to_string(), args: vec![npm::INSTALL.to_string()] }
    }

    /// Uses a different program and arguments, e.g. a stub in tests.
    pub fn with_command<S: Into<String>>(program: S, args: Vec<String>) -> Self {
        Self { program: program.into(), args }
    }
}

impl Default for NpmInstaller {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageInstaller for NpmInstaller {
    fn install(&self, working_dir: &Path) -> Result<()> {
        log::debug!(
            "Running '{} {}' in '{}'",
            self.program,
            self.args.join(" "),
            working_dir.display()
        );

        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;

        if !status.success() {
            return Err(Error::InstallError { status });
        }
        Ok(())
    }
}
