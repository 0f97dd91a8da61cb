use crate::{
    cli::{
        report::{InstallOutcome, Report, Reporter},
        Args,
    },
    constants::{DEFAULT_DIRECTORY, DIRECTORY_PROMPT, TEMPLATE},
    error::{Error, Result},
    installer::{NpmInstaller, PackageInstaller},
    ioutils::create_dir_all,
    loader::{get_template_fetcher, TemplateFetcher, TemplateSource},
    prompt::{get_prompt_provider, TextPromptConfig, TextPrompter},
};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Settings for a single scaffolding run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Explicit target directory; takes precedence over prompting.
    pub directory: Option<PathBuf>,
    /// Never prompt; fall back to [`DEFAULT_DIRECTORY`].
    pub skip_prompts: bool,
    pub skip_install: bool,
    /// Let the fetcher write into a non-empty directory.
    pub force: bool,
}

/// Main CLI runner that sequences the scaffolding workflow:
/// resolve directory, ensure it exists, fetch the template, install
/// dependencies, report.
pub struct Runner<P, F, I> {
    prompter: P,
    fetcher: F,
    installer: I,
    template: String,
}

impl<P: TextPrompter, F: TemplateFetcher, I: PackageInstaller> Runner<P, F, I> {
    pub fn new(prompter: P, fetcher: F, installer: I) -> Self {
        Self { prompter, fetcher, installer, template: TEMPLATE.to_string() }
    }

    /// Fetches `template` instead of the built-in one.
    pub fn with_template<S: Into<String>>(mut self, template: S) -> Self {
        self.template = template.into();
        self
    }

    /// Executes the complete workflow.
    ///
    /// Only a failed template download or an unexpected error returns `Err`.
    /// A failed installation is reported and recorded in the returned
    /// [`Report`].
    pub fn run<O: Write, E: Write>(
        &self,
        config: &RunConfig,
        reporter: &mut Reporter<O, E>,
    ) -> Result<Report> {
        let directory = self.resolve_directory(config)?;

        self.ensure_directory(&directory)?;

        self.fetch_template(&directory, reporter)?;

        let install = self.install_dependencies(&directory, config.skip_install, reporter)?;

        let report = Report { directory, install };
        reporter.summary(&report)?;
        Ok(report)
    }

    /// Picks the target directory from the argument, the prompt, or the default
    fn resolve_directory(&self, config: &RunConfig) -> Result<PathBuf> {
        if let Some(directory) = &config.directory {
            return Ok(directory.clone());
        }
        if config.skip_prompts {
            log::debug!("Prompts skipped, using '{DEFAULT_DIRECTORY}'");
            return Ok(PathBuf::from(DEFAULT_DIRECTORY));
        }

        let answer = self.prompter.prompt_text(
            &TextPromptConfig::new(DIRECTORY_PROMPT).with_default(DEFAULT_DIRECTORY),
        )?;
        let answer = answer.trim();
        if answer.is_empty() {
            Ok(PathBuf::from(DEFAULT_DIRECTORY))
        } else {
            Ok(PathBuf::from(answer))
        }
    }

    fn ensure_directory(&self, directory: &Path) -> Result<()> {
        log::debug!("Ensuring directory '{}' exists", directory.display());
        create_dir_all(directory)
    }

    /// Downloads the template. Any failure here is fatal.
    fn fetch_template<O: Write, E: Write>(
        &self,
        directory: &Path,
        reporter: &mut Reporter<O, E>,
    ) -> Result<()> {
        reporter.banner()?;
        reporter.progress("Downloading template...")?;

        let fetched = TemplateSource::parse(&self.template)
            .and_then(|source| self.fetcher.fetch(&source, directory));

        match fetched {
            Ok(()) => {
                reporter.succeed("Template downloaded successfully!")?;
                Ok(())
            }
            Err(e) => {
                reporter.fail("Failed to download template")?;
                Err(Error::TemplateFetchError {
                    template: self.template.clone(),
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Runs the installer unless skipped. Failures are reported, not returned.
    fn install_dependencies<O: Write, E: Write>(
        &self,
        directory: &Path,
        skip_install: bool,
        reporter: &mut Reporter<O, E>,
    ) -> Result<InstallOutcome> {
        if skip_install {
            reporter.notice("Skipping dependency installation.")?;
            return Ok(InstallOutcome::Skipped);
        }

        reporter.progress("Installing dependencies...")?;
        match self.installer.install(directory) {
            Ok(()) => {
                reporter.succeed("Dependencies installed successfully!")?;
                Ok(InstallOutcome::Installed)
            }
            Err(e) => {
                log::debug!("Dependency installation failed: {e}");
                reporter.fail("Failed to install dependencies")?;
                reporter.error("You can try installing them manually with npm install")?;
                Ok(InstallOutcome::Failed(e.to_string()))
            }
        }
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<Report> {
    let config = args.run_config();
    let runner = Runner::new(
        get_prompt_provider(),
        get_template_fetcher(config.force),
        NpmInstaller::new(),
    );
    runner.run(&config, &mut Reporter::stdio())
}
