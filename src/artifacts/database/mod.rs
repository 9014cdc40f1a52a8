//! Object store abstraction
//!
//! The history builder never touches the filesystem directly: it asks an
//! [`ObjectStore`] for the compressed bytes of a hash and decodes them itself.
//!
//! - `object_store`: the lookup trait plus an in-memory implementation
//!
//! The on-disk loose object store lives in `areas::database`.

pub mod object_store;
