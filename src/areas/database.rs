use crate::artifacts::database::object_store::ObjectStore;
use crate::artifacts::decoder::header_scanner::ObjectHeader;
use crate::artifacts::decoder::object_decoder::ObjectDecoder;
use crate::artifacts::log::history::{CommitGraph, HistoryBuilder};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{DecodeError, DecodeResult};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

/// Loose object store under `.git/objects`
///
/// Objects live at `<objects>/<first 2 hex chars>/<remaining 38>`, each one
/// an individually zlib-compressed file. Packfiles are not read.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

/// A single decoded object, as shown by `cat-file`
#[derive(Debug)]
pub enum DecodedObject {
    Commit(ObjectHeader, Box<Commit>),
    Other(ObjectHeader, Vec<u8>),
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn object_path(&self, oid: &ObjectId) -> PathBuf {
        self.path.join(oid.to_path())
    }

    pub fn history(&self, head: &ObjectId) -> DecodeResult<CommitGraph> {
        HistoryBuilder::new(self).build(head)
    }

    /// Decode one object; commits are parsed, other kinds keep their raw payload
    pub fn decode_object(&self, oid: &ObjectId) -> DecodeResult<DecodedObject> {
        let source = self.open(oid)?;
        Self::decode_source(oid, source).map_err(|err| err.in_object(oid))
    }

    fn decode_source(oid: &ObjectId, source: File) -> DecodeResult<DecodedObject> {
        let mut decoder = ObjectDecoder::open(source)?;
        let header = decoder.header()?;

        match header.kind {
            ObjectType::Commit => {
                let commit = decoder.decode_commit(oid.clone())?;
                Ok(DecodedObject::Commit(header, Box::new(commit)))
            }
            _ => {
                let mut payload = Vec::new();
                decoder.payload()?.read_to_end(&mut payload)?;
                Ok(DecodedObject::Other(header, payload))
            }
        }
    }
}

impl ObjectStore for Database {
    type Source = File;

    fn open(&self, oid: &ObjectId) -> DecodeResult<Self::Source> {
        // Unvalidated parent hashes must not name paths outside the store
        if !oid.is_well_formed() {
            return Err(DecodeError::ObjectNotFound { oid: oid.clone() });
        }

        File::open(self.object_path(oid)).map_err(|err| match err.kind() {
            ErrorKind::NotFound => DecodeError::ObjectNotFound { oid: oid.clone() },
            _ => DecodeError::Io(err),
        })
    }
}
