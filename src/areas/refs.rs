//! Git references (branches, HEAD)
//!
//! Branch names are resolved to the hash of their head commit so the history
//! builder has somewhere to start.
//!
//! ## File Format
//!
//! References are stored as text files containing either:
//! - A 40-character SHA-1 hash (direct reference)
//! - `ref: <path>` for symbolic references
//!
//! Packed refs are not consulted.

use crate::artifacts::branch::branch_name::{BranchName, SymRefName};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::path::Path;

/// Git references reader
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the git directory (typically `.git`)
    path: Box<Path>,
}

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// Symbolic refs deeper than this are treated as a loop
const MAX_SYMREF_DEPTH: usize = 10;

/// Internal representation of a reference value
#[derive(Debug, Clone)]
enum SymRefOrOid {
    /// Symbolic reference pointing to another ref
    SymRef { sym_ref_name: SymRefName },
    /// Direct object ID
    Oid(ObjectId),
}

impl SymRefOrOid {
    fn read_symref_or_oid(path: &Path) -> anyhow::Result<Option<SymRefOrOid>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read ref file at {:?}", path))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        if let Some(symref_match) = symref_match {
            Ok(Some(SymRefOrOid::SymRef {
                sym_ref_name: SymRefName::new(symref_match[1].to_string()),
            }))
        } else {
            let oid = ObjectId::try_parse(content)
                .with_context(|| format!("invalid ref content at {:?}", path))?;
            Ok(Some(SymRefOrOid::Oid(oid)))
        }
    }
}

impl Refs {
    /// Resolve a branch name to the hash of its head commit
    ///
    /// # Errors
    ///
    /// Fails when `refs/heads/<name>` does not exist or holds no hash.
    pub fn resolve_branch(&self, branch_name: &BranchName) -> anyhow::Result<ObjectId> {
        let ref_path = self.heads_path().join(branch_name.as_ref());

        self.read_symref(&ref_path, 0)?
            .ok_or_else(|| anyhow::anyhow!("branch {} not found", branch_name))
    }

    /// Name of the checked-out branch, or `None` for a detached HEAD
    pub fn current_branch(&self) -> anyhow::Result<Option<BranchName>> {
        match SymRefOrOid::read_symref_or_oid(&self.head_path())? {
            Some(SymRefOrOid::SymRef { sym_ref_name }) => {
                Ok(Some(BranchName::try_parse_sym_ref_name(&sym_ref_name)?))
            }
            Some(SymRefOrOid::Oid(_)) | None => Ok(None),
        }
    }

    /// Hash HEAD points at, following symbolic refs
    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        self.read_symref(&self.head_path(), 0)
    }

    /// Read a reference, following indirection until an OID is found
    fn read_symref(&self, path: &Path, depth: usize) -> anyhow::Result<Option<ObjectId>> {
        if depth > MAX_SYMREF_DEPTH {
            anyhow::bail!("symbolic ref loop at {:?}", path);
        }

        match SymRefOrOid::read_symref_or_oid(path)? {
            Some(SymRefOrOid::SymRef { sym_ref_name }) => self.read_symref(
                &self.path.join(sym_ref_name.as_ref_path()),
                depth + 1,
            ),
            Some(SymRefOrOid::Oid(oid)) => Ok(Some(oid)),
            None => Ok(None),
        }
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
