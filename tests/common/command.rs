use crate::common::object::{CommitSpec, random_author, write_branch, write_commit};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::{Path, PathBuf};

/// Commit timestamps start here and grow by one hour per commit
pub const BASE_TIMESTAMP: i64 = 1_700_000_000;

#[fixture]
pub fn repository_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let git_dir = git_dir(dir.path());

    std::fs::create_dir_all(git_dir.join("objects")).expect("Failed to create objects dir");
    std::fs::create_dir_all(git_dir.join("refs").join("heads")).expect("Failed to create refs dir");
    std::fs::write(git_dir.join("HEAD"), "ref: refs/heads/main\n").expect("Failed to write HEAD");

    dir
}

/// Linear history of three commits on `main`, oldest first
#[fixture]
pub fn linear_history(repository_dir: TempDir) -> (TempDir, Vec<String>) {
    let git_dir = git_dir(repository_dir.path());
    let mut oids: Vec<String> = Vec::new();

    for (index, message) in ["First commit", "Second commit", "Third commit"]
        .into_iter()
        .enumerate()
    {
        let spec = CommitSpec::new(
            oids.last().cloned().into_iter().collect(),
            random_author(),
            BASE_TIMESTAMP + 3600 * index as i64,
            message.to_string(),
        );
        oids.push(write_commit(&git_dir, &spec));
    }

    write_branch(&git_dir, "main", oids.last().expect("history is not empty"));
    (repository_dir, oids)
}

pub fn git_dir(dir: &Path) -> PathBuf {
    dir.join(".git")
}

pub fn commit_at(git_dir: &Path, parents: &[&str], hour: i64, message: &str) -> String {
    let spec = CommitSpec::new(
        parents.iter().map(|parent| parent.to_string()).collect(),
        random_author(),
        BASE_TIMESTAMP + 3600 * hour,
        message.to_string(),
    );
    write_commit(git_dir, &spec)
}

pub fn run_plain_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("plain").expect("Failed to find plain binary");
    cmd.envs(vec![("NO_COLOR", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn stdout_lines(cmd: &mut Command) -> Vec<String> {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output)
        .expect("stdout is not utf-8")
        .lines()
        .map(str::to_string)
        .collect()
}
