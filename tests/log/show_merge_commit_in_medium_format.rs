use crate::common::command::{commit_at, git_dir, repository_dir, run_plain_command};
use crate::common::object::write_branch;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn show_merge_commit_in_medium_format(repository_dir: TempDir) {
    let git_dir = git_dir(repository_dir.path());

    let base = commit_at(&git_dir, &[], 0, "Base");
    let left = commit_at(&git_dir, &[&base], 1, "Left");
    let right = commit_at(&git_dir, &[&base], 2, "Right");
    let merge = commit_at(&git_dir, &[&left, &right], 3, "Merge");
    write_branch(&git_dir, "main", &merge);

    run_plain_command(repository_dir.path(), &["log"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "commit {merge}\nMerge: {} {}\nAuthor: ",
            &left[..7],
            &right[..7]
        )));
}
