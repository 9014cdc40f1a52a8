use crate::common::command::{commit_at, git_dir, repository_dir, run_plain_command};
use crate::common::object::{write_branch, write_object, write_raw_commit};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn show_log_with_malformed_ancestor(repository_dir: TempDir) {
    let git_dir = git_dir(repository_dir.path());

    let tree = write_object(&git_dir, "tree", b"");
    let broken = write_raw_commit(
        &git_dir,
        &format!(
            "tree {tree}\nauthor Nobody nobody@example.com 1700000000 +0000\n\
             committer Nobody <nobody@example.com> 1700000000 +0000\n\nBroken\n"
        ),
    );
    let tip = commit_at(&git_dir, &[&broken], 1, "Tip");
    write_branch(&git_dir, "main", &tip);

    // No partial history is printed
    run_plain_command(repository_dir.path(), &["log", "--oneline"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("malformed signature"));
}

#[rstest]
fn show_log_with_missing_parent(repository_dir: TempDir) {
    let git_dir = git_dir(repository_dir.path());

    let missing = "0123456789abcdef0123456789abcdef01234567";
    let tip = commit_at(&git_dir, &[missing], 0, "Tip");
    write_branch(&git_dir, "main", &tip);

    run_plain_command(repository_dir.path(), &["log"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!("object {missing} not found")));
}

#[rstest]
fn show_log_skips_parent_that_is_not_a_commit(repository_dir: TempDir) {
    let git_dir = git_dir(repository_dir.path());

    let blob = write_object(&git_dir, "blob", b"not a commit");
    let tip = commit_at(&git_dir, &[&blob], 0, "Tip");
    write_branch(&git_dir, "main", &tip);

    run_plain_command(repository_dir.path(), &["log", "--oneline"])
        .env("PLAIN_LOG", "warn")
        .assert()
        .success()
        .stdout(format!("{} Tip\n", &tip[..7]))
        .stderr(predicate::str::contains(blob.as_str()));
}

#[rstest]
fn show_log_with_corrupt_ancestor_names_it(repository_dir: TempDir) {
    let git_dir = git_dir(repository_dir.path());

    let corrupt = "89abcdef0123456789abcdef0123456789abcdef";
    let object_dir = git_dir.join("objects").join(&corrupt[..2]);
    std::fs::create_dir_all(&object_dir).unwrap();
    std::fs::write(object_dir.join(&corrupt[2..]), b"definitely not zlib").unwrap();
    let tip = commit_at(&git_dir, &[corrupt], 0, "Tip");
    write_branch(&git_dir, "main", &tip);

    run_plain_command(repository_dir.path(), &["log"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!("failed to decode object {corrupt}")))
        .stderr(predicate::str::contains("unable to decompress object"));
}
