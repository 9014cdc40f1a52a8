//! Read-only access to the commit history of a Git repository
//!
//! Loose objects are inflated and parsed by [`artifacts::decoder`], commits
//! are assembled into a [`artifacts::log::history::CommitGraph`], and the
//! `log`/`cat-file` commands render them.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

/// Layout used by `log` for each commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CommitDisplayFormat {
    #[default]
    Medium,
    OneLine,
}
