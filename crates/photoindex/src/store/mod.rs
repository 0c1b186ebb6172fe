//! # Storage Layer
//!
//! A catalog lives in two independent stores:
//!
//! 1. **Metadata**: a key-value store holding the whole catalog as one JSON
//!    string under a fixed key. Reads and writes are always whole-list.
//! 2. **Blobs**: one binary object per photo, addressed by its [`StorageKey`].
//!
//! Neither store knows about the other. Keeping them consistent is the job of
//! [`crate::index::PhotoIndex`], which orders its writes so that a failure
//! never leaves a catalog entry pointing at a blob that was never written:
//!
//! - **Add**: blob first, then metadata.
//! - **Delete**: metadata first, then blob. A failed blob delete leaves an
//!   orphan blob, which [`crate::index::PhotoIndex::reconcile`] sweeps later.
//!
//! ## Implementations
//!
//! - [`fs_backend`]: Production stores rooted in the app data directory.
//! - [`mem_backend`]: In-memory stores with failure injection, for tests.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/
//! ├── photoindex.toml     # Optional configuration
//! ├── meta/
//! │   └── photos.json     # Metadata value for key "photos"
//! └── photos/
//!     └── {millis}.jpeg   # Blobs
//! ```

use crate::error::Result;
use crate::model::StorageKey;
use std::path::PathBuf;

pub mod fs_backend;
pub mod mem_backend;

/// Durable string key-value persistence.
pub trait MetadataStore {
    /// Returns `Ok(None)` when nothing was ever stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value under `key`. MUST be atomic.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Durable binary object storage addressed by [`StorageKey`].
pub trait BlobStore {
    /// Write the full payload. MUST be atomic: no partial blob is ever visible.
    fn write(&self, key: &StorageKey, data: &[u8]) -> Result<()>;

    /// Read the full payload. A missing blob is an error.
    fn read(&self, key: &StorageKey) -> Result<Vec<u8>>;

    /// Remove the blob. Removing a missing blob succeeds.
    fn delete(&self, key: &StorageKey) -> Result<()>;

    /// All keys currently present, in no particular order.
    fn list_keys(&self) -> Result<Vec<StorageKey>>;

    /// Where the blob lives. Virtual for in-memory stores.
    fn locate(&self, key: &StorageKey) -> Result<PathBuf>;
}
