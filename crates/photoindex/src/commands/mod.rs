//! # Command Layer
//!
//! Each operation lives in its own submodule as a plain function over a
//! [`PhotoIndex`](crate::index::PhotoIndex). Commands return a structured
//! [`CmdResult`] and never touch stdout, stderr, or exit codes; asking the
//! user anything goes through the collaborator traits
//! ([`CaptureSource`](crate::capture::CaptureSource),
//! [`ConfirmationGate`](crate::gate::ConfirmationGate)).
//!
//! ## Display Indexes
//!
//! Users refer to photos by a 1-based display index: `1` is the newest photo.
//! Commands resolve it to a record once, up front, and hand the record plus
//! its position to the index. If the catalog moved underneath, the index
//! falls back to the record's storage key.
//!
//! ## Command Modules
//!
//! - [`capture`]: Acquire a photo and add it
//! - [`list`]: List the catalog
//! - [`delete`]: Confirm, then delete a photo
//! - [`doctor`]: Sweep orphan blobs and report missing ones
//! - [`paths`]: Blob locations
//! - [`helpers`]: Display index resolution

use crate::model::PhotoRecord;
use serde::Serialize;
use std::path::PathBuf;

pub mod capture;
pub mod delete;
pub mod doctor;
pub mod helpers;
pub mod list;
pub mod paths;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A record paired with its 1-based display index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPhoto {
    pub index: usize,
    pub record: PhotoRecord,
}

pub fn display_photos(entries: &[PhotoRecord]) -> Vec<DisplayPhoto> {
    entries
        .iter()
        .enumerate()
        .map(|(position, record)| DisplayPhoto {
            index: position + 1,
            record: record.clone(),
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_photos: Vec<DisplayPhoto>,
    pub listed_photos: Vec<DisplayPhoto>,
    pub photo_paths: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_photos(mut self, photos: Vec<DisplayPhoto>) -> Self {
        self.affected_photos = photos;
        self
    }

    pub fn with_listed_photos(mut self, photos: Vec<DisplayPhoto>) -> Self {
        self.listed_photos = photos;
        self
    }

    pub fn with_photo_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.photo_paths = paths;
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
