use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{DecodeError, DecodeResult};
use bytes::Bytes;
use std::collections::HashMap;
use std::io::{Cursor, Read};

/// Lookup of compressed object bytes by hash
///
/// Implementations return the raw zlib stream exactly as stored; a hash
/// that is not in the store yields [`DecodeError::ObjectNotFound`].
pub trait ObjectStore {
    type Source: Read;

    fn open(&self, oid: &ObjectId) -> DecodeResult<Self::Source>;
}

impl<T: ObjectStore + ?Sized> ObjectStore for &T {
    type Source = T::Source;

    fn open(&self, oid: &ObjectId) -> DecodeResult<Self::Source> {
        (**self).open(oid)
    }
}

/// Object store held entirely in memory
///
/// Useful for embedding and for exercising the decoder without a repository
/// on disk. Values are the compressed object bytes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    objects: HashMap<ObjectId, Bytes>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, oid: ObjectId, compressed: impl Into<Bytes>) {
        self.objects.insert(oid, compressed.into());
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl ObjectStore for MemoryStore {
    type Source = Cursor<Bytes>;

    fn open(&self, oid: &ObjectId) -> DecodeResult<Self::Source> {
        self.objects
            .get(oid)
            .cloned()
            .map(Cursor::new)
            .ok_or_else(|| DecodeError::ObjectNotFound { oid: oid.clone() })
    }
}
