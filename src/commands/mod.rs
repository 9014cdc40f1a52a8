//! Command implementations
//!
//! - `plumbing`: Low-level object inspection (cat-file)
//! - `porcelain`: User-facing history display (log)

pub mod plumbing;
pub mod porcelain;
