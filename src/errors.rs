//! Error types for the object decoding core
//!
//! Decoding failures are typed so callers can tell a protocol misuse
//! (`NotReset`) apart from a corrupt object or a missing one. Repository
//! glue above the core wraps these into `anyhow::Error` with context.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use thiserror::Error;

/// Result alias used throughout the decoding core
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unknown object kind `{kind}`")]
    UnknownObjectKind { kind: String },

    #[error("decoder must be reset before reading another object header")]
    NotReset,

    #[error("object header ended before its terminator")]
    TruncatedHeader,

    #[error("malformed object size `{raw}`")]
    MalformedSize { raw: String },

    #[error("commit {oid}: malformed timestamp `{value}`")]
    MalformedTimestamp {
        oid: ObjectId,
        value: String,
        #[source]
        source: TimestampError,
    },

    #[error("commit {oid}: malformed signature `{line}`")]
    MalformedSignature { oid: ObjectId, line: String },

    #[error("commit {oid}: header line has no key separator `{line}`")]
    MissingSeparator { oid: ObjectId, line: String },

    #[error("object {oid} is a {kind}, not a commit")]
    NotACommit { oid: ObjectId, kind: ObjectType },

    #[error("unable to decompress object")]
    Decompression(#[source] std::io::Error),

    #[error("object {oid} not found")]
    ObjectNotFound { oid: ObjectId },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to decode object {oid}")]
    InObject {
        oid: ObjectId,
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// Attach the hash of the object being decoded
    ///
    /// Errors that already name their object, and `NotReset`, pass through
    /// unchanged.
    pub fn in_object(self, oid: &ObjectId) -> Self {
        match self {
            DecodeError::UnknownObjectKind { .. }
            | DecodeError::TruncatedHeader
            | DecodeError::MalformedSize { .. }
            | DecodeError::Decompression(_)
            | DecodeError::Io(_) => DecodeError::InObject {
                oid: oid.clone(),
                source: Box::new(self),
            },
            other => other,
        }
    }
}

/// Failures of the `<unix-seconds> <sign><HH><MM>` timestamp grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("expected `<seconds> <offset>`")]
    InvalidFormat,

    #[error("invalid unix timestamp `{0}`")]
    InvalidSeconds(String),

    #[error("invalid offset `{0}`, expected `+HHMM` or `-HHMM`")]
    InvalidOffset(String),
}

/// Failures locating a repository on disk
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("not a git repository (or any of the parent directories): {}", .0.display())]
    NotARepository(std::path::PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
