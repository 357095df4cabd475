//! The blob oracle contract: `fetch(digest) -> blob | missing`.
//!
//! Read-only, idempotent, and assumed thread-safe by its callers. The core never
//! writes through this interface and never caches across calls itself.

use std::collections::HashMap;
use std::ops::Deref;
use std::sync::{Arc, Mutex};

use crate::digest::Digest;

/// An immutable byte sequence fetched by digest. The first four bytes are a
/// hash-prefix tag; the rest is type-specific.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob(Arc<Vec<u8>>);

impl Blob {
    pub fn new(bytes: Vec<u8>) -> Self {
        Blob(Arc::new(bytes))
    }
}

impl Deref for Blob {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Blob {
    fn from(bytes: Vec<u8>) -> Self {
        Blob::new(bytes)
    }
}

/// A content-addressed, read-only store of blobs.
pub trait BlobStore {
    fn fetch(&self, digest: &Digest) -> Option<Blob>;
}

impl<T: BlobStore + ?Sized> BlobStore for Arc<T> {
    fn fetch(&self, digest: &Digest) -> Option<Blob> {
        (**self).fetch(digest)
    }
}

/// An in-memory blob store, used by tests and by the demonstration CLI.
///
/// `fetch` is synchronous and blocking from the resolver's perspective, matching
/// the oracle contract; internally it is just a locked map.
#[derive(Debug, Default, Clone)]
pub struct MemoryBlobStore {
    blobs: Arc<Mutex<HashMap<Digest, Blob>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, digest: Digest, blob: impl Into<Blob>) {
        self.blobs.lock().expect("blob store lock poisoned").insert(digest, blob.into());
    }
}

impl BlobStore for MemoryBlobStore {
    fn fetch(&self, digest: &Digest) -> Option<Blob> {
        self.blobs.lock().expect("blob store lock poisoned").get(digest).cloned()
    }
}
