use crate::common::command::{linear_history, run_plain_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn show_log_from_nonexistent_branch(linear_history: (TempDir, Vec<String>)) {
    let (repository_dir, _) = linear_history;

    run_plain_command(repository_dir.path(), &["log", "does-not-exist"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("branch does-not-exist not found"));
}

#[rstest]
fn show_log_from_invalid_branch_name(linear_history: (TempDir, Vec<String>)) {
    let (repository_dir, _) = linear_history;

    run_plain_command(repository_dir.path(), &["log", "bad..name"])
        .assert()
        .failure();
}
