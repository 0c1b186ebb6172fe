//! # Context Initialization
//!
//! [`initialize`] is the one place that wires a catalog together from the
//! environment: it picks the data directory, loads configuration from it,
//! opens the filesystem stores, and runs the initial `load`.
//!
//! ## Data Directory Resolution
//!
//! 1. `data_override` (the CLI's `--data` flag), used as-is.
//! 2. `PHOTOINDEX_DATA` environment variable. Primarily for tests, to isolate state.
//! 3. The OS-appropriate data directory via the `directories` crate.
//!
//! A cold start on an empty directory is normal: the catalog loads empty and
//! directories are created on first write.

use crate::api::PhotoApi;
use crate::config::PhotoConfig;
use crate::error::{PhotoError, Result};
use crate::index::{LoadReport, PhotoIndex};
use crate::store::fs_backend::{FsBlobStore, FsMetadataStore};
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::{debug, warn};

pub const DATA_DIR_ENV: &str = "PHOTOINDEX_DATA";

pub struct PhotoContext {
    pub api: PhotoApi<FsMetadataStore, FsBlobStore>,
    pub config: PhotoConfig,
    pub load_report: LoadReport,
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("org", "photoindex", "photoindex")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PhotoError::Api("Could not determine a data directory".to_string()))
}

/// Build the production API for `data_override` (or the default location) and load the catalog.
pub fn initialize(data_override: Option<PathBuf>) -> Result<PhotoContext> {
    let data_dir = resolve_data_dir(data_override)?;
    let config = PhotoConfig::load_from(&data_dir)?;
    debug!(data_dir = %data_dir.display(), ?config, "initializing catalog");

    let index = PhotoIndex::new(FsMetadataStore::new(&data_dir), FsBlobStore::new(&data_dir))
        .with_extension(&config.extension())
        .with_mime_type(&config.mime_type)
        .with_metadata_key(&config.metadata_key);
    let mut api = PhotoApi::new(index, config.capture_options(), data_dir);

    let load_report = api.load()?;
    if load_report.unreadable > 0 {
        warn!(
            unreadable = load_report.unreadable,
            total = load_report.total,
            "some photos could not be read"
        );
    }

    Ok(PhotoContext {
        api,
        config,
        load_report,
    })
}
