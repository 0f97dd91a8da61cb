use console::{Style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt::Display;
use std::io::{Stderr, Stdout, Write};
use std::path::PathBuf;
use std::time::Duration;

use crate::{constants::npm, error::Result};

/// Result of the dependency installation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed,
    Skipped,
    /// Installation ran and failed; the run still succeeds.
    Failed(String),
}

/// Outcome of a completed scaffolding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub directory: PathBuf,
    pub install: InstallOutcome,
}

impl Report {
    /// Commands the user should run to start working on the project.
    pub fn next_steps(&self) -> Vec<String> {
        let mut steps = vec![format!("cd {}", self.directory.display())];
        if self.install == InstallOutcome::Skipped {
            steps.push(npm::INSTALL_COMMAND.to_string());
        }
        steps.push(npm::DEV_COMMAND.to_string());
        steps
    }
}

/// Writes progress and results for the user.
///
/// Progress goes to `out`, failures to `err`. Each stream is styled only when
/// its own color flag is set. With spinners enabled, a running step animates
/// on the terminal instead of printing a progress line.
pub struct Reporter<O: Write, E: Write> {
    out: O,
    err: E,
    out_colors: bool,
    err_colors: bool,
    spinners: bool,
    spinner: Option<ProgressBar>,
}

impl Reporter<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::with_colors(
            std::io::stdout(),
            std::io::stderr(),
            console::colors_enabled(),
            console::colors_enabled_stderr(),
        )
        .with_spinners(Term::stderr().is_term())
    }
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(out: O, err: E, colors: bool) -> Self {
        Self::with_colors(out, err, colors, colors)
    }

    pub fn with_colors(out: O, err: E, out_colors: bool, err_colors: bool) -> Self {
        Self { out, err, out_colors, err_colors, spinners: false, spinner: None }
    }

    pub fn with_spinners(mut self, spinners: bool) -> Self {
        self.spinners = spinners;
        self
    }

    fn paint<D: Display>(&self, value: D, style: Style) -> String {
        style.force_styling(self.out_colors).apply_to(value).to_string()
    }

    fn paint_err<D: Display>(&self, value: D, style: Style) -> String {
        style.force_styling(self.err_colors).apply_to(value).to_string()
    }

    fn clear_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    pub fn banner(&mut self) -> Result<()> {
        let line = self.paint(
            "🏝️  Creating a new Vite Island Architecture project...",
            Style::new().blue(),
        );
        writeln!(self.out, "\n{line}\n")?;
        Ok(())
    }

    /// A step has started.
    pub fn progress(&mut self, message: &str) -> Result<()> {
        self.clear_spinner();
        if !self.spinners {
            writeln!(self.out, "- {message}")?;
            return Ok(());
        }
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::default_spinner());
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
        Ok(())
    }

    /// A step finished successfully.
    pub fn succeed(&mut self, message: &str) -> Result<()> {
        self.clear_spinner();
        let mark = self.paint("✔", Style::new().green());
        writeln!(self.out, "{mark} {message}")?;
        Ok(())
    }

    /// A step failed.
    pub fn fail(&mut self, message: &str) -> Result<()> {
        self.clear_spinner();
        let mark = self.paint_err("✖", Style::new().red());
        writeln!(self.err, "{mark} {message}")?;
        Ok(())
    }

    pub fn notice(&mut self, message: &str) -> Result<()> {
        let line = self.paint(message, Style::new().yellow());
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    pub fn error(&mut self, message: &str) -> Result<()> {
        let line = self.paint_err(message, Style::new().red());
        writeln!(self.err, "{line}")?;
        Ok(())
    }

    /// Prints the success message and the next-step commands.
    pub fn summary(&mut self, report: &Report) -> Result<()> {
        self.clear_spinner();
        let green = Style::new().green();
        let headline = format!(
            "{}{}{}",
            self.paint("✅ Vite Island project created successfully in ", green.clone()),
            self.paint(report.directory.display(), green.clone().bold()),
            self.paint("!", green.clone()),
        );
        let heading = self.paint("To get started:", green.clone());
        let steps: Vec<String> = report
            .next_steps()
            .into_iter()
            .map(|step| self.paint(step, Style::new().blue()))
            .collect();
        let footer = self.paint(
            "For more information, check out the README.md file in your project.",
            green,
        );

        writeln!(self.out, "\n{headline}\n")?;
        writeln!(self.out, "{heading}")?;
        for step in steps {
            writeln!(self.out, "  {step}")?;
        }
        writeln!(self.out, "\n{footer}")?;
        self.out.flush()?;
        Ok(())
    }
}
