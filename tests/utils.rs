#![allow(dead_code)]

use create_vite_island::error::{Error, Result};
use create_vite_island::installer::PackageInstaller;
use create_vite_island::loader::{TemplateFetcher, TemplateSource};
use create_vite_island::prompt::{TextPromptConfig, TextPrompter};
use git2::{IndexAddOption, Oid, Repository, Signature};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes `files` (relative path, content) under `root`, creating parents.
pub fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let path = root.join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

/// Writes `files` into the repository working tree and commits all changes.
pub fn commit_files(repo: &Repository, files: &[(&str, &str)], message: &str) -> Oid {
    write_files(repo.workdir().unwrap(), files);

    let signature = Signature::now("Test", "test@example.com").unwrap();
    let mut index = repo.index().unwrap();
    index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None).unwrap();
    index.write().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();

    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();
    repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents).unwrap()
}

/// Initializes a repository at `path` with a single commit containing `files`.
pub fn create_template_repo(path: &Path, files: &[(&str, &str)]) -> Repository {
    let repo = Repository::init(path).unwrap();
    commit_files(&repo, files, "Initial commit");
    repo
}

/// `file://` URL for a local repository.
pub fn file_url(path: &Path) -> String {
    url::Url::from_file_path(path).unwrap().to_string()
}

/// Files of a minimal Vite Island template.
pub const TEMPLATE_FILES: &[(&str, &str)] = &[
    ("package.json", r#"{"name": "vite-island", "scripts": {"dev": "vite"}}"#),
    ("README.md", "# Vite Island\n"),
    ("src/main.js", "console.log('island');\n"),
    ("src/islands/counter.js", "export default {};\n"),
];

/// Prompter returning a fixed answer and recording every question.
pub struct RecordingPrompter {
    answer: String,
    pub asked: RefCell<Vec<TextPromptConfig>>,
}

impl RecordingPrompter {
    pub fn answering(answer: &str) -> Self {
        Self { answer: answer.to_string(), asked: RefCell::new(Vec::new()) }
    }

    pub fn times_asked(&self) -> usize {
        self.asked.borrow().len()
    }
}

impl TextPrompter for RecordingPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        self.asked.borrow_mut().push(config.clone());
        Ok(self.answer.clone())
    }
}

/// Fetcher writing a marker file, or failing, and recording destinations.
pub struct RecordingFetcher {
    fail: bool,
    pub destinations: RefCell<Vec<PathBuf>>,
}

impl RecordingFetcher {
    pub fn succeeding() -> Self {
        Self { fail: false, destinations: RefCell::new(Vec::new()) }
    }

    pub fn failing() -> Self {
        Self { fail: true, destinations: RefCell::new(Vec::new()) }
    }
}

impl TemplateFetcher for RecordingFetcher {
    fn fetch(&self, _source: &TemplateSource, destination: &Path) -> Result<()> {
        self.destinations.borrow_mut().push(destination.to_path_buf());
        if self.fail {
            return Err(Error::IoError(std::io::Error::other("could not reach host")));
        }
        fs::write(destination.join("package.json"), "{}")?;
        Ok(())
    }
}

/// Installer that succeeds or fails and records working directories.
pub struct RecordingInstaller {
    fail: bool,
    pub directories: RefCell<Vec<PathBuf>>,
}

impl RecordingInstaller {
    pub fn succeeding() -> Self {
        Self { fail: false, directories: RefCell::new(Vec::new()) }
    }

    pub fn failing() -> Self {
        Self { fail: true, directories: RefCell::new(Vec::new()) }
    }

    pub fn times_run(&self) -> usize {
        self.directories.borrow().len()
    }
}

impl PackageInstaller for RecordingInstaller {
    fn install(&self, working_dir: &Path) -> Result<()> {
        self.directories.borrow_mut().push(working_dir.to_path_buf());
        if self.fail {
            return Err(Error::IoError(std::io::Error::other("npm not found")));
        }
        Ok(())
    }
}
