use crate::common::command::{commit_at, git_dir, repository_dir, run_plain_command, stdout_lines};
use crate::common::object::write_branch;
use assert_fs::TempDir;
use rstest::rstest;
use std::collections::HashSet;

#[rstest]
fn log_merge_traversal_shared_ancestors(repository_dir: TempDir) {
    let git_dir = git_dir(repository_dir.path());

    // Two merges that both reach the same root through every path
    let root = commit_at(&git_dir, &[], 0, "Root");
    let a = commit_at(&git_dir, &[&root], 1, "A");
    let b = commit_at(&git_dir, &[&root], 2, "B");
    let c = commit_at(&git_dir, &[&a, &b], 3, "C");
    let d = commit_at(&git_dir, &[&b, &a], 4, "D");
    let tip = commit_at(&git_dir, &[&c, &d], 5, "Tip");
    write_branch(&git_dir, "main", &tip);

    let lines = stdout_lines(&mut run_plain_command(
        repository_dir.path(),
        &["log", "--oneline"],
    ));

    let unique = lines.iter().collect::<HashSet<_>>();
    assert_eq!(lines.len(), 6);
    assert_eq!(unique.len(), 6);
    assert_eq!(lines[0], format!("{} Tip", &tip[..7]));
    assert_eq!(lines[5], format!("{} Root", &root[..7]));
}
