use super::{BlobStore, MetadataStore};
use crate::error::{PhotoError, Result};
use crate::model::StorageKey;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

/// In-memory metadata store for testing.
///
/// Uses `RefCell` for interior mutability since the index is single-threaded,
/// which keeps the `MetadataStore` trait on `&self`.
#[derive(Default)]
pub struct MemMetadataStore {
    values: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    simulate_read_error: Cell<bool>,
    simulate_write_error: Cell<bool>,
}

impl MemMetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful `set` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Raw stored value, bypassing error simulation.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl MetadataStore for MemMetadataStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.simulate_read_error.get() {
            return Err(PhotoError::Store("Simulated read error".to_string()));
        }
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(PhotoError::Store("Simulated write error".to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// In-memory blob store for testing, with per-operation failure injection.
#[derive(Default)]
pub struct MemBlobStore {
    blobs: RefCell<HashMap<StorageKey, Vec<u8>>>,
    unreadable: RefCell<HashSet<StorageKey>>,
    simulate_write_error: Cell<bool>,
    simulate_delete_error: Cell<bool>,
}

impl MemBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    pub fn set_simulate_delete_error(&self, simulate: bool) {
        self.simulate_delete_error.set(simulate);
    }

    /// Make reads of `key` fail even though the blob exists.
    pub fn fail_reads_for(&self, key: &StorageKey) {
        self.unreadable.borrow_mut().insert(key.clone());
    }

    /// Remove a blob behind the index's back (out-of-band deletion).
    pub fn remove_out_of_band(&self, key: &StorageKey) -> bool {
        self.blobs.borrow_mut().remove(key).is_some()
    }

    pub fn contains(&self, key: &StorageKey) -> bool {
        self.blobs.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.blobs.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.borrow().is_empty()
    }
}

impl BlobStore for MemBlobStore {
    fn write(&self, key: &StorageKey, data: &[u8]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(PhotoError::Store("Simulated write error".to_string()));
        }
        self.blobs.borrow_mut().insert(key.clone(), data.to_vec());
        Ok(())
    }

    fn read(&self, key: &StorageKey) -> Result<Vec<u8>> {
        if self.unreadable.borrow().contains(key) {
            return Err(PhotoError::Store("Simulated read error".to_string()));
        }
        self.blobs
            .borrow()
            .get(key)
            .cloned()
            .ok_or_else(|| PhotoError::BlobNotFound(key.clone()))
    }

    fn delete(&self, key: &StorageKey) -> Result<()> {
        if self.simulate_delete_error.get() {
            return Err(PhotoError::Store("Simulated delete error".to_string()));
        }
        self.blobs.borrow_mut().remove(key);
        Ok(())
    }

    fn list_keys(&self) -> Result<Vec<StorageKey>> {
        Ok(self.blobs.borrow().keys().cloned().collect())
    }

    fn locate(&self, key: &StorageKey) -> Result<PathBuf> {
        Ok(PathBuf::from(format!("memory://photos/{}", key)))
    }
}
