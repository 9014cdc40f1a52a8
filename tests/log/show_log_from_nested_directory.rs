use crate::common::command::{linear_history, run_plain_command, stdout_lines};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use rstest::rstest;

#[rstest]
fn show_log_from_nested_directory(linear_history: (TempDir, Vec<String>)) {
    let (repository_dir, oids) = linear_history;
    let nested = repository_dir.child("src/deeply/nested");
    nested.create_dir_all().unwrap();

    let lines = stdout_lines(&mut run_plain_command(nested.path(), &["log", "--oneline"]));

    assert_eq!(lines.len(), oids.len());
}

#[rstest]
fn show_log_with_repo_option(linear_history: (TempDir, Vec<String>)) {
    let (repository_dir, oids) = linear_history;
    let elsewhere = TempDir::new().unwrap();
    let repo = repository_dir.path().to_string_lossy().to_string();

    let lines = stdout_lines(&mut run_plain_command(
        elsewhere.path(),
        &["--repo", &repo, "log", "--oneline"],
    ));

    assert_eq!(lines.len(), oids.len());
}

#[rstest]
fn outside_a_repository_is_an_error() {
    let dir = TempDir::new().unwrap();

    run_plain_command(dir.path(), &["log"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("not a git repository"));
}
