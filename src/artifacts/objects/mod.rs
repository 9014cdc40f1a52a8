//! Git object types
//!
//! Git stores all content as objects identified by SHA-1 hashes. Every loose
//! object decompresses to `<type> <size>\0<content>`; the kinds are blob,
//! tree, commit and tag. Only commits are parsed beyond their header here.

pub mod commit;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
