//! # The Photo Index
//!
//! [`PhotoIndex`] owns the in-memory catalog (`entries`, newest first) and the
//! two stores behind it. It is an explicit handle: whoever needs the catalog
//! gets the index passed in, and `load` is the single initialization point.
//!
//! ## Operations
//!
//! | Operation | Stores touched, in order | Recovered failures |
//! |-----------|--------------------------|--------------------|
//! | [`capture`](PhotoIndex::capture) | capture source, then `add` | cancelled or failed capture |
//! | [`add`](PhotoIndex::add) | blob write, metadata write | blob write |
//! | [`load`](PhotoIndex::load) | metadata read, blob reads | per-record blob read |
//! | [`delete`](PhotoIndex::delete) | metadata write, blob delete | blob delete (orphan left) |
//! | [`reconcile`](PhotoIndex::reconcile) | metadata read, blob list/delete | per-orphan delete |
//!
//! Recovered failures are logged with `tracing` and reported through the
//! outcome types. They never surface as `Err`.
//!
//! A metadata write failure is not recoverable in that sense: the index puts
//! `entries` back the way it was, cleans up what it can, and returns the
//! error. Either way, after a call returns, the persisted list equals
//! `entries`.
//!
//! ## Ordering
//!
//! Insertion order is the only order. `add` prepends, `delete` splices, `load`
//! replaces wholesale. Nothing sorts.
//!
//! ## Concurrency
//!
//! Every mutating operation takes `&mut self`, so one capture or delete is in
//! flight at a time by construction.

use crate::capture::{CaptureError, CaptureOptions, CaptureSource, CapturedPhoto};
use crate::error::Result;
use crate::model::{data_uri, decode_catalog, encode_catalog, KeyGenerator, PhotoRecord, StorageKey};
use crate::store::fs_backend::{FsBlobStore, FsMetadataStore};
use crate::store::mem_backend::{MemBlobStore, MemMetadataStore};
use crate::store::{BlobStore, MetadataStore};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const DEFAULT_METADATA_KEY: &str = "photos";
pub const DEFAULT_EXTENSION: &str = ".jpeg";
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(PhotoRecord),
    /// The user backed out of the capture.
    Cancelled,
    CaptureFailed(String),
    /// The blob could not be written; nothing was recorded.
    BlobWriteFailed(String),
}

impl AddOutcome {
    pub fn record(&self) -> Option<&PhotoRecord> {
        match self {
            AddOutcome::Added(record) => Some(record),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed {
        record: PhotoRecord,
        position: usize,
        /// The blob delete failed and the blob was left behind.
        orphaned: bool,
    },
    /// No entry with that key; nothing changed.
    NotFound,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub total: usize,
    pub unreadable: usize,
}

/// Report from the `reconcile` sweep.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DoctorReport {
    pub removed_orphans: usize,
    pub failed_removals: usize,
    pub missing_blobs: usize,
}

impl DoctorReport {
    pub fn is_clean(&self) -> bool {
        self.removed_orphans == 0 && self.failed_removals == 0 && self.missing_blobs == 0
    }
}

pub struct PhotoIndex<M: MetadataStore, B: BlobStore> {
    metadata: M,
    blobs: B,
    entries: Vec<PhotoRecord>,
    keys: KeyGenerator,
    metadata_key: String,
    mime_type: String,
}

pub type FsPhotoIndex = PhotoIndex<FsMetadataStore, FsBlobStore>;
pub type InMemoryIndex = PhotoIndex<MemMetadataStore, MemBlobStore>;

impl FsPhotoIndex {
    pub fn open(data_dir: &Path) -> Self {
        PhotoIndex::new(FsMetadataStore::new(data_dir), FsBlobStore::new(data_dir))
    }
}

impl Default for InMemoryIndex {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl InMemoryIndex {
    pub fn in_memory() -> Self {
        PhotoIndex::new(MemMetadataStore::new(), MemBlobStore::new())
    }
}

impl<M: MetadataStore, B: BlobStore> PhotoIndex<M, B> {
    pub fn new(metadata: M, blobs: B) -> Self {
        Self {
            metadata,
            blobs,
            entries: Vec::new(),
            keys: KeyGenerator::new(DEFAULT_EXTENSION),
            metadata_key: DEFAULT_METADATA_KEY.to_string(),
            mime_type: DEFAULT_MIME_TYPE.to_string(),
        }
    }

    pub fn with_extension(mut self, extension: &str) -> Self {
        self.keys = KeyGenerator::new(extension);
        self
    }

    pub fn with_mime_type(mut self, mime_type: &str) -> Self {
        self.mime_type = mime_type.to_string();
        self
    }

    pub fn with_metadata_key(mut self, key: &str) -> Self {
        self.metadata_key = key.to_string();
        self
    }

    pub fn entries(&self) -> &[PhotoRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&PhotoRecord> {
        self.entries.get(position)
    }

    pub fn position_of(&self, key: &StorageKey) -> Option<usize> {
        self.entries.iter().position(|r| &r.storage_key == key)
    }

    pub fn metadata_store(&self) -> &M {
        &self.metadata
    }

    pub fn blob_store(&self) -> &B {
        &self.blobs
    }

    pub fn locate(&self, key: &StorageKey) -> Result<PathBuf> {
        self.blobs.locate(key)
    }

    /// Acquire a photo from `source` and add it.
    ///
    /// A cancelled or failed capture is logged and leaves the catalog as it was.
    pub fn capture<C: CaptureSource>(
        &mut self,
        source: &mut C,
        options: &CaptureOptions,
    ) -> Result<AddOutcome> {
        debug!(?options, "requesting capture");
        match source.capture(options) {
            Ok(captured) => self.add(captured),
            Err(CaptureError::Cancelled) => {
                info!("capture cancelled, catalog unchanged");
                Ok(AddOutcome::Cancelled)
            }
            Err(CaptureError::Failed(reason)) => {
                warn!(error = %reason, "capture failed, catalog unchanged");
                Ok(AddOutcome::CaptureFailed(reason))
            }
        }
    }

    /// Store a captured photo and prepend it to the catalog.
    pub fn add(&mut self, captured: CapturedPhoto) -> Result<AddOutcome> {
        let key = self.keys.next_key();

        // 1. Blob FIRST, so the catalog never references a missing blob
        if let Err(e) = self.blobs.write(&key, &captured.data) {
            warn!(storage_key = %key, error = %e, "blob write failed, photo not added");
            return Ok(AddOutcome::BlobWriteFailed(e.to_string()));
        }

        // 2. Catalog
        let record = PhotoRecord::new(key.clone()).with_display_ref(captured.web_path);
        self.entries.insert(0, record.clone());

        if let Err(e) = self.persist() {
            self.entries.remove(0);
            if let Err(cleanup) = self.blobs.delete(&key) {
                warn!(storage_key = %key, error = %cleanup, "could not remove blob after failed persist");
            }
            return Err(e);
        }

        info!(storage_key = %key, bytes = captured.data.len(), "photo added");
        Ok(AddOutcome::Added(record))
    }

    /// Replace `entries` with the persisted catalog and resolve display refs.
    pub fn load(&mut self) -> Result<LoadReport> {
        self.entries.clear();
        let mut entries = self.read_catalog()?;

        let mut report = LoadReport {
            total: entries.len(),
            ..Default::default()
        };

        for record in &mut entries {
            self.keys.observe(&record.storage_key);
            match self.blobs.read(&record.storage_key) {
                Ok(bytes) => {
                    record.display_ref = Some(data_uri(&self.mime_type, &bytes));
                    record.unreadable = false;
                }
                Err(e) => {
                    warn!(storage_key = %record.storage_key, error = %e, "could not read photo");
                    record.display_ref = None;
                    record.unreadable = true;
                    report.unreadable += 1;
                }
            }
        }

        self.entries = entries;
        debug!(total = report.total, unreadable = report.unreadable, "catalog loaded");
        Ok(report)
    }

    /// Delete a confirmed photo.
    ///
    /// `position` is a hint: if the entry there no longer carries the record's
    /// key, the record is looked up by key instead. A key that is not in the
    /// catalog is a no-op.
    pub fn delete(&mut self, record: &PhotoRecord, position: usize) -> Result<DeleteOutcome> {
        let key = &record.storage_key;
        let position = match self.entries.get(position) {
            Some(entry) if &entry.storage_key == key => Some(position),
            _ => {
                debug!(storage_key = %key, position, "stale position, resolving by key");
                self.position_of(key)
            }
        };

        match position {
            Some(position) => self.remove_at(position),
            None => Ok(DeleteOutcome::NotFound),
        }
    }

    pub fn delete_by_key(&mut self, key: &StorageKey) -> Result<DeleteOutcome> {
        match self.position_of(key) {
            Some(position) => self.remove_at(position),
            None => Ok(DeleteOutcome::NotFound),
        }
    }

    fn remove_at(&mut self, position: usize) -> Result<DeleteOutcome> {
        // 1. Catalog FIRST: a failed blob delete then leaves an orphan, never
        //    a visible entry without a photo
        let record = self.entries.remove(position);
        if let Err(e) = self.persist() {
            self.entries.insert(position, record);
            return Err(e);
        }

        // 2. Blob
        let orphaned = match self.blobs.delete(&record.storage_key) {
            Ok(()) => false,
            Err(e) => {
                warn!(storage_key = %record.storage_key, error = %e, "blob delete failed, orphan left behind");
                true
            }
        };

        info!(storage_key = %record.storage_key, orphaned, "photo deleted");
        Ok(DeleteOutcome::Removed {
            record,
            position,
            orphaned,
        })
    }

    /// Sweep the blob store against the persisted catalog.
    ///
    /// Orphan blobs are deleted. Catalog entries whose blob is gone are
    /// counted and flagged unreadable, but stay in the catalog.
    pub fn reconcile(&mut self) -> Result<DoctorReport> {
        let catalog: HashSet<StorageKey> = self
            .read_catalog()?
            .into_iter()
            .map(|r| r.storage_key)
            .collect();
        let stored: HashSet<StorageKey> = self.blobs.list_keys()?.into_iter().collect();
        let mut report = DoctorReport::default();

        for key in stored.difference(&catalog) {
            match self.blobs.delete(key) {
                Ok(()) => {
                    info!(storage_key = %key, "removed orphan blob");
                    report.removed_orphans += 1;
                }
                Err(e) => {
                    warn!(storage_key = %key, error = %e, "could not remove orphan blob");
                    report.failed_removals += 1;
                }
            }
        }

        for key in catalog.difference(&stored) {
            warn!(storage_key = %key, "catalog entry has no blob");
            report.missing_blobs += 1;
            if let Some(position) = self.position_of(key) {
                self.entries[position].unreadable = true;
                self.entries[position].display_ref = None;
            }
        }

        Ok(report)
    }

    fn read_catalog(&self) -> Result<Vec<PhotoRecord>> {
        match self.metadata.get(&self.metadata_key)? {
            Some(raw) => decode_catalog(&raw),
            None => Ok(Vec::new()),
        }
    }

    fn persist(&self) -> Result<()> {
        let raw = encode_catalog(&self.entries)?;
        self.metadata.set(&self.metadata_key, &raw)
    }
}
