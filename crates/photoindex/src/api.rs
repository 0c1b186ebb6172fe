//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for UI clients. It owns the [`PhotoIndex`] handle and the
//! capture settings, dispatches to `commands/*`, and returns [`CmdResult`]s.
//!
//! It does no I/O of its own and no presentation. Collaborators that need a
//! human (capture prompt, delete confirmation) are passed in per call, so the
//! same API serves a terminal, a GUI shell, or a test.
//!
//! ## Generic Over Stores
//!
//! `PhotoApi<M, B>` is generic over the metadata and blob stores:
//! - Production: `PhotoApi<FsMetadataStore, FsBlobStore>`
//! - Testing: `PhotoApi<MemMetadataStore, MemBlobStore>`

use crate::capture::{CaptureOptions, CaptureSource};
use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::gate::ConfirmationGate;
use crate::index::{LoadReport, PhotoIndex};
use crate::store::{BlobStore, MetadataStore};
use std::path::{Path, PathBuf};

pub use crate::commands::{CmdMessage, DisplayPhoto, MessageLevel};

pub struct PhotoApi<M: MetadataStore, B: BlobStore> {
    index: PhotoIndex<M, B>,
    options: CaptureOptions,
    data_dir: PathBuf,
}

impl<M: MetadataStore, B: BlobStore> PhotoApi<M, B> {
    pub fn new(index: PhotoIndex<M, B>, options: CaptureOptions, data_dir: PathBuf) -> Self {
        Self {
            index,
            options,
            data_dir,
        }
    }

    pub fn index(&self) -> &PhotoIndex<M, B> {
        &self.index
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn capture_options(&self) -> &CaptureOptions {
        &self.options
    }

    pub fn load(&mut self) -> Result<LoadReport> {
        self.index.load()
    }

    pub fn capture_photo<C: CaptureSource>(&mut self, source: &mut C) -> Result<CmdResult> {
        commands::capture::run(&mut self.index, source, &self.options)
    }

    pub fn list_photos(&self) -> Result<CmdResult> {
        commands::list::run(&self.index)
    }

    pub fn delete_photo<G: ConfirmationGate>(
        &mut self,
        gate: &mut G,
        display_index: usize,
    ) -> Result<CmdResult> {
        commands::delete::run(&mut self.index, gate, display_index)
    }

    pub fn doctor(&mut self) -> Result<CmdResult> {
        commands::doctor::run(&mut self.index)
    }

    pub fn photo_paths(&self, display_index: Option<usize>) -> Result<CmdResult> {
        commands::paths::run(&self.index, display_index)
    }
}
