//! # Domain Model: Photo Records and Storage Keys
//!
//! The catalog is a newest-first list of [`PhotoRecord`]s. Each record points at
//! exactly one blob through its [`StorageKey`]; nothing else about the photo is
//! persisted.
//!
//! ## Persisted Shape
//!
//! The metadata store holds the whole catalog as one JSON array:
//!
//! ```text
//! [{"storageKey":"1760601600123.jpeg"},{"storageKey":"1760601598001.jpeg"}]
//! ```
//!
//! `display_ref` and `unreadable` are derived on load and never written. Unknown
//! fields in older catalogs are ignored.
//!
//! ## Key Generation
//!
//! Keys are `<unix-millis><extension>`. [`KeyGenerator`] is monotonic: it never
//! hands out a millisecond value at or below the largest one it has seen, so
//! two captures inside the same millisecond still get distinct keys and a key
//! that was deleted is not issued again by the same generator.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

/// Identifier correlating a catalog entry to its blob.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The capture time encoded in the key, if it was generated by [`KeyGenerator`].
    pub fn millis(&self) -> Option<i64> {
        let stem = self.0.split('.').next()?;
        stem.parse().ok()
    }

    /// True when the key can be used as a single file name inside the blob directory.
    pub fn is_safe_file_name(&self) -> bool {
        !self.0.is_empty()
            && !self.0.starts_with('.')
            && !self.0.contains(['/', '\\', '\0'])
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StorageKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone)]
pub struct KeyGenerator {
    extension: String,
    last_millis: i64,
}

impl KeyGenerator {
    pub fn new(extension: &str) -> Self {
        let extension = if extension.is_empty() || extension.starts_with('.') {
            extension.to_string()
        } else {
            format!(".{}", extension)
        };
        Self {
            extension,
            last_millis: 0,
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Records an existing key so later keys sort strictly after it.
    pub fn observe(&mut self, key: &StorageKey) {
        if let Some(millis) = key.millis() {
            self.last_millis = self.last_millis.max(millis);
        }
    }

    pub fn next_key(&mut self) -> StorageKey {
        self.next_at(Utc::now().timestamp_millis())
    }

    pub(crate) fn next_at(&mut self, now_millis: i64) -> StorageKey {
        let millis = now_millis.max(self.last_millis + 1);
        self.last_millis = millis;
        StorageKey(format!("{}{}", millis, self.extension))
    }
}

/// One durable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRecord {
    pub storage_key: StorageKey,

    /// Display-ready form of the blob: a data URI after `load`, or the
    /// capture's ephemeral locator right after `add`.
    #[serde(skip)]
    pub display_ref: Option<String>,

    /// Set by `load` when the blob could not be read.
    #[serde(skip)]
    pub unreadable: bool,
}

impl PhotoRecord {
    pub fn new(storage_key: StorageKey) -> Self {
        Self {
            storage_key,
            display_ref: None,
            unreadable: false,
        }
    }

    pub fn with_display_ref(mut self, display_ref: Option<String>) -> Self {
        self.display_ref = display_ref;
        self
    }
}

/// Inline `data:` URI for a blob, the form handed to views.
pub fn data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

pub fn encode_catalog(entries: &[PhotoRecord]) -> Result<String> {
    Ok(serde_json::to_string(entries)?)
}

pub fn decode_catalog(raw: &str) -> Result<Vec<PhotoRecord>> {
    Ok(serde_json::from_str(raw)?)
}
