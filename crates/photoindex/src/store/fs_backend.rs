use super::{BlobStore, MetadataStore};
use crate::error::{PhotoError, Result};
use crate::model::StorageKey;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const META_DIR: &str = "meta";
const BLOBS_DIR: &str = "photos";

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(PhotoError::Io)?;
    }
    Ok(())
}

/// Write through a temp file in the same directory, then rename over the target.
fn atomic_write(dir: &Path, target: &Path, data: &[u8]) -> Result<()> {
    ensure_dir(dir)?;
    let tmp = dir.join(format!(".write-{}.tmp", Uuid::new_v4()));
    if let Err(e) = fs::write(&tmp, data) {
        let _ = fs::remove_file(&tmp);
        return Err(PhotoError::Io(e));
    }
    fs::rename(&tmp, target).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        PhotoError::Io(e)
    })
}

/// Metadata store keeping one `<key>.json` file per key.
pub struct FsMetadataStore {
    root: PathBuf,
}

impl FsMetadataStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            root: data_dir.join(META_DIR),
        }
    }

    fn value_path(&self, key: &str) -> Result<PathBuf> {
        if !StorageKey::new(key).is_safe_file_name() {
            return Err(PhotoError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl MetadataStore for FsMetadataStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key)?;
        match fs::read_to_string(path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PhotoError::Io(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.value_path(key)?;
        atomic_write(&self.root, &path, value.as_bytes())
    }
}

/// Blob store keeping one file per key under `<data_dir>/photos/`.
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            root: data_dir.join(BLOBS_DIR),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn blob_path(&self, key: &StorageKey) -> Result<PathBuf> {
        if !key.is_safe_file_name() {
            return Err(PhotoError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key.as_str()))
    }
}

impl BlobStore for FsBlobStore {
    fn write(&self, key: &StorageKey, data: &[u8]) -> Result<()> {
        let path = self.blob_path(key)?;
        atomic_write(&self.root, &path, data)
    }

    fn read(&self, key: &StorageKey) -> Result<Vec<u8>> {
        let path = self.blob_path(key)?;
        match fs::read(path) {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(PhotoError::BlobNotFound(key.clone())),
            Err(e) => Err(PhotoError::Io(e)),
        }
    }

    fn delete(&self, key: &StorageKey) -> Result<()> {
        let path = self.blob_path(key)?;
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PhotoError::Io(e)),
        }
    }

    fn list_keys(&self) -> Result<Vec<StorageKey>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(PhotoError::Io)? {
            let entry = entry.map_err(PhotoError::Io)?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            // Skip in-flight temp files
            if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                if !name.starts_with('.') {
                    keys.push(StorageKey::new(name));
                }
            }
        }
        Ok(keys)
    }

    fn locate(&self, key: &StorageKey) -> Result<PathBuf> {
        self.blob_path(key)
    }
}
