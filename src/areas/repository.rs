use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::log::history::CommitGraph;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};
use tracing::debug;

const GIT_DIR_NAME: &str = ".git";
const GITDIR_PREFIX: &str = "gitdir: ";

pub struct Repository {
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    refs: Refs,
}

impl Repository {
    /// Open the repository whose git directory is `git_dir`
    pub fn new(git_dir: &Path, writer: Box<dyn std::io::Write>) -> Self {
        let database = Database::new(git_dir.join("objects").into_boxed_path());
        let refs = Refs::new(git_dir.to_path_buf().into_boxed_path());

        Repository {
            writer: RefCell::new(writer),
            database,
            refs,
        }
    }

    /// Find the enclosing repository of `start` and open it
    pub fn discover(start: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let git_dir = find_git_dir(start)?;
        debug!(git_dir = %git_dir.display(), "discovered repository");

        Ok(Self::new(&git_dir, writer))
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    /// Resolve `branch` (or the checked-out branch) to its head commit
    pub fn resolve_head(&self, branch: Option<&str>) -> anyhow::Result<ObjectId> {
        let branch = match branch {
            Some(name) => BranchName::try_parse(name.to_string())?,
            None => self
                .refs
                .current_branch()?
                .context("HEAD is detached, name a branch explicitly")?,
        };

        self.refs.resolve_branch(&branch)
    }

    /// Decode the full history of `branch`
    pub fn history(&self, branch: Option<&str>) -> anyhow::Result<CommitGraph> {
        let head = self.resolve_head(branch)?;

        self.database
            .history(&head)
            .with_context(|| format!("failed to load history from {}", head))
    }
}

/// Walk upwards from `start` looking for a git directory
///
/// A `.git` directory is taken as is; a `.git` file is read as a
/// `gitdir: <path>` pointer (as left by worktrees and submodules), with a
/// relative path resolved against the directory holding the file.
pub fn find_git_dir(start: &Path) -> Result<PathBuf, RepositoryError> {
    let start = std::path::absolute(start)?;
    let mut current = start.as_path();

    loop {
        let candidate = current.join(GIT_DIR_NAME);

        match std::fs::metadata(&candidate) {
            Ok(metadata) if metadata.is_dir() => return Ok(candidate),
            Ok(_) => return read_gitdir_file(current, &candidate),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return Err(RepositoryError::NotARepository(start)),
        }
    }
}

fn read_gitdir_file(base: &Path, file: &Path) -> Result<PathBuf, RepositoryError> {
    let content = std::fs::read_to_string(file)?;
    let target = content.trim();
    let target = target.strip_prefix(GITDIR_PREFIX).unwrap_or(target).trim();

    Ok(std::path::absolute(base.join(target))?)
}
