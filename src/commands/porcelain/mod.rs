//! Porcelain commands (user-facing Git operations)
//!
//! ## Commands
//!
//! - `log`: Show the commit history of a branch

pub mod log;
