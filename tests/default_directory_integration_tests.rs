//! Runs in its own test binary because it changes the working directory.

use create_vite_island::cli::{Reporter, RunConfig, Runner};
use create_vite_island::constants::DEFAULT_DIRECTORY;
use std::path::PathBuf;
use tempfile::TempDir;
mod utils;
use utils::{RecordingFetcher, RecordingInstaller, RecordingPrompter};

#[test]
fn yes_without_directory_uses_default_and_never_prompts() {
    let tmp = TempDir::new().unwrap();
    std::env::set_current_dir(tmp.path()).unwrap();

    let prompter = RecordingPrompter::answering("unused");
    let fetcher = RecordingFetcher::succeeding();
    let installer = RecordingInstaller::succeeding();
    let runner = Runner::new(&prompter, &fetcher, &installer);
    let config = RunConfig { skip_prompts: true, ..Default::default() };

    let mut out = Vec::new();
    let report = runner
        .run(&config, &mut Reporter::new(&mut out, std::io::sink(), false))
        .unwrap();

    assert_eq!(report.directory, PathBuf::from(DEFAULT_DIRECTORY));
    assert_eq!(prompter.times_asked(), 0);
    assert!(tmp.path().join(DEFAULT_DIRECTORY).is_dir());
    assert!(tmp.path().join(DEFAULT_DIRECTORY).join("package.json").is_file());
    assert!(String::from_utf8(out)
        .unwrap()
        .contains("Vite Island project created successfully in my-vite-island"));
}
