use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn command() -> Command {
    Command::cargo_bin("create-vite-island").unwrap()
}

#[test]
fn help_lists_flags() {
    command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"))
        .stdout(predicate::str::contains("--no-install"))
        .stdout(predicate::str::contains("[DIRECTORY]"));
}

#[test]
fn non_empty_directory_fails_download_with_exit_code_one() {
    let tmp = TempDir::new().unwrap();
    let project = tmp.path().join("demo");
    fs::create_dir(&project).unwrap();
    fs::write(project.join("existing.txt"), "keep").unwrap();

    command()
        .arg(&project)
        .args(["--yes", "--no-install"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to download template"))
        .stderr(predicate::str::contains("--force"))
        .stderr(predicate::function(|err: &str| {
            err.matches("Failed to download template").count() == 1
        }))
        .stdout(predicate::str::contains("created successfully").not());

    assert_eq!(fs::read_to_string(project.join("existing.txt")).unwrap(), "keep");
}

#[test]
fn unexpected_error_exits_with_code_one() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("not-a-directory");
    fs::write(&file, "").unwrap();

    command()
        .arg(&file)
        .arg("-y")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("An unexpected error occurred:"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    command().arg("--bogus").assert().failure();
}
