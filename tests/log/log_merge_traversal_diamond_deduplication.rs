use crate::common::command::{commit_at, git_dir, repository_dir, run_plain_command, stdout_lines};
use crate::common::object::write_branch;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn log_merge_traversal_diamond_deduplication(repository_dir: TempDir) {
    let git_dir = git_dir(repository_dir.path());

    //   base -> left  \
    //        -> right -> merge
    let base = commit_at(&git_dir, &[], 0, "Base");
    let left = commit_at(&git_dir, &[&base], 1, "Left");
    let right = commit_at(&git_dir, &[&base], 2, "Right");
    let merge = commit_at(&git_dir, &[&left, &right], 3, "Merge");
    write_branch(&git_dir, "main", &merge);

    let lines = stdout_lines(&mut run_plain_command(
        repository_dir.path(),
        &["log", "--format", "one-line"],
    ));

    let expected = vec![
        format!("{merge} Merge"),
        format!("{right} Right"),
        format!("{left} Left"),
        format!("{base} Base"),
    ];
    assert_eq!(lines, expected);
}
