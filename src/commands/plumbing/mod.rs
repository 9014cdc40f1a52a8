//! Plumbing commands (low-level Git operations)
//!
//! ## Commands
//!
//! - `cat-file`: Decode and print a single loose object

pub mod cat_file;
