//! Branch history as a commit DAG
//!
//! Starting from a branch head, every commit reachable through parent links
//! is decoded exactly once and collected into a [`CommitGraph`]. A single
//! [`ObjectDecoder`] is reset onto each object in turn.
//!
//! ## Traversal
//!
//! Depth-first, driven by an explicit work stack. A hash is pushed at most
//! once: it is skipped when it is already resolved or already pending, which
//! keeps ancestors shared by several merge paths from being decoded twice.
//!
//! ## Leniency
//!
//! A parent reference that resolves to something other than a commit is
//! logged and skipped. The head itself must be a commit.

use crate::artifacts::database::object_store::ObjectStore;
use crate::artifacts::decoder::object_decoder::ObjectDecoder;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{DecodeError, DecodeResult};
use derive_new::new;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, trace, warn};

/// Every commit reachable from a branch head, keyed by hash
///
/// Built once and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CommitGraph {
    head: Commit,
    commits: HashMap<ObjectId, Commit>,
}

impl CommitGraph {
    /// The commit at the branch tip
    pub fn head(&self) -> &Commit {
        &self.head
    }

    pub fn get(&self, oid: &ObjectId) -> Option<&Commit> {
        self.commits.get(oid)
    }

    pub fn contains(&self, oid: &ObjectId) -> bool {
        self.commits.contains_key(oid)
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Commits without parents
    pub fn roots(&self) -> Vec<&Commit> {
        let mut roots = self
            .commits
            .values()
            .filter(|commit| commit.is_leaf())
            .collect::<Vec<_>>();
        roots.sort_by(|a, b| a.oid().cmp(b.oid()));
        roots
    }

    /// Commits that list `oid` among their parents
    pub fn children(&self, oid: &ObjectId) -> Vec<&Commit> {
        let mut children = self
            .commits
            .values()
            .filter(|commit| commit.parents().contains(oid))
            .collect::<Vec<_>>();
        children.sort_by(|a, b| a.oid().cmp(b.oid()));
        children
    }

    /// First-parent chain from the head down to a root
    pub fn mainline(&self) -> Vec<&Commit> {
        let mut chain = vec![&self.head];
        let mut current = &self.head;

        while let Some(parent) = current.parent().and_then(|oid| self.commits.get(oid)) {
            chain.push(parent);
            current = parent;
        }

        chain
    }

    /// All commits, newest committer timestamp first
    ///
    /// Ties are broken by hash so the order is stable between runs.
    pub fn by_date(&self) -> Vec<&Commit> {
        let mut commits = self.commits.values().collect::<Vec<_>>();
        commits.sort_by(|a, b| {
            b.committer()
                .timestamp()
                .cmp(&a.committer().timestamp())
                .then_with(|| a.oid().cmp(b.oid()))
        });
        commits
    }
}

/// Walks an object store from a head hash and assembles the commit graph
#[derive(new)]
pub struct HistoryBuilder<'s, St> {
    store: &'s St,
}

impl<St: ObjectStore> HistoryBuilder<'_, St> {
    /// Decode every commit reachable from `head`
    ///
    /// # Errors
    ///
    /// - `NotACommit` if `head` is not a commit object
    /// - any lookup, decompression or parse failure on a reachable object;
    ///   no partial graph is returned
    #[tracing::instrument(level = "debug", skip(self, head), fields(head = %head))]
    pub fn build(&self, head: &ObjectId) -> DecodeResult<CommitGraph> {
        let in_head = |err: DecodeError| err.in_object(head);
        let mut decoder = ObjectDecoder::open(self.store.open(head)?).map_err(in_head)?;

        let header = decoder.header().map_err(in_head)?;
        if header.kind != ObjectType::Commit {
            return Err(DecodeError::NotACommit {
                oid: head.clone(),
                kind: header.kind,
            });
        }
        let head_commit = decoder.decode_commit(head.clone()).map_err(in_head)?;
        debug!(oid = %head, size = header.size, "decoded head commit");

        let mut walk = Walk::default();
        walk.schedule(&head_commit);
        walk.resolved.insert(head.clone(), head_commit.clone());

        while let Some(oid) = walk.stack.pop() {
            walk.pending.remove(&oid);
            if walk.is_settled(&oid) {
                trace!(%oid, "already resolved");
                continue;
            }

            let in_parent = |err: DecodeError| err.in_object(&oid);
            decoder.reset(self.store.open(&oid)?).map_err(in_parent)?;
            let header = decoder.header().map_err(in_parent)?;
            if header.kind != ObjectType::Commit {
                warn!(%oid, kind = %header.kind, "parent reference is not a commit, skipping");
                walk.skipped.insert(oid);
                continue;
            }

            let commit = decoder.decode_commit(oid.clone()).map_err(in_parent)?;
            debug!(%oid, size = header.size, parents = commit.parents().len(), "decoded commit");

            walk.schedule(&commit);
            walk.resolved.insert(oid, commit);
        }

        info!(commits = walk.resolved.len(), "history built");

        Ok(CommitGraph {
            head: head_commit,
            commits: walk.resolved,
        })
    }
}

/// Traversal bookkeeping
#[derive(Default)]
struct Walk {
    stack: Vec<ObjectId>,
    pending: HashSet<ObjectId>,
    resolved: HashMap<ObjectId, Commit>,
    skipped: HashSet<ObjectId>,
}

impl Walk {
    fn is_settled(&self, oid: &ObjectId) -> bool {
        self.resolved.contains_key(oid) || self.skipped.contains(oid)
    }

    fn schedule(&mut self, commit: &Commit) {
        for parent in commit.parents() {
            if self.is_settled(parent) {
                trace!(oid = %parent, "parent already resolved");
                continue;
            }
            if self.pending.insert(parent.clone()) {
                self.stack.push(parent.clone());
            }
        }
    }
}

/// Decode the history of `head` from `store`
pub fn build_history<St: ObjectStore>(head: &ObjectId, store: &St) -> DecodeResult<CommitGraph> {
    HistoryBuilder::new(store).build(head)
}
