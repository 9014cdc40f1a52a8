use crate::common::command::{commit_at, git_dir, repository_dir, run_plain_command, stdout_lines};
use crate::common::object::write_branch;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn log_first_parent_follows_mainline(repository_dir: TempDir) {
    let git_dir = git_dir(repository_dir.path());

    let base = commit_at(&git_dir, &[], 0, "Base");
    let topic = commit_at(&git_dir, &[&base], 1, "Topic work");
    let mainline = commit_at(&git_dir, &[&base], 2, "Mainline work");
    let merge = commit_at(&git_dir, &[&mainline, &topic], 3, "Merge topic");
    write_branch(&git_dir, "main", &merge);

    let lines = stdout_lines(&mut run_plain_command(
        repository_dir.path(),
        &["log", "--oneline", "--first-parent"],
    ));

    let expected = vec![
        format!("{} Merge topic", &merge[..7]),
        format!("{} Mainline work", &mainline[..7]),
        format!("{} Base", &base[..7]),
    ];
    assert_eq!(lines, expected);
}
