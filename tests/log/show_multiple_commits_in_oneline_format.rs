use crate::common::command::{linear_history, run_plain_command, stdout_lines};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_multiple_commits_in_oneline_format(linear_history: (TempDir, Vec<String>)) {
    let (repository_dir, oids) = linear_history;

    let lines = stdout_lines(&mut run_plain_command(
        repository_dir.path(),
        &["log", "--oneline"],
    ));

    // --oneline always abbreviates, newest first
    let expected = vec![
        format!("{} Third commit", &oids[2][..7]),
        format!("{} Second commit", &oids[1][..7]),
        format!("{} First commit", &oids[0][..7]),
    ];
    assert_eq!(lines, expected);
}

#[rstest]
fn show_full_hashes_with_oneline_format_option(linear_history: (TempDir, Vec<String>)) {
    let (repository_dir, oids) = linear_history;

    let lines = stdout_lines(&mut run_plain_command(
        repository_dir.path(),
        &["log", "--format", "one-line"],
    ));

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], format!("{} Third commit", oids[2]));
    assert_eq!(lines[2], format!("{} First commit", oids[0]));
}
