//! # Configuration
//!
//! Configuration is managed by [`confique`], layered in priority order:
//! 1. **Environment variables**: `PHOTOINDEX_QUALITY`, `PHOTOINDEX_EXTENSION`, `PHOTOINDEX_MIME`.
//! 2. **Data dir config**: `<data_dir>/photoindex.toml`.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `quality` | `100` | Quality requested from the capture source |
//! | `extension` | `.jpeg` | Suffix of generated storage keys |
//! | `mime_type` | `image/jpeg` | MIME type used in display data URIs |
//! | `metadata_key` | `photos` | Metadata store key holding the catalog |

use crate::capture::CaptureOptions;
use crate::error::Result;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "photoindex.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PhotoConfig {
    /// Quality requested from the capture source, 0 to 100.
    #[config(env = "PHOTOINDEX_QUALITY", default = 100)]
    pub quality: u8,

    /// Suffix appended to generated storage keys (e.g. ".jpeg", ".png").
    #[config(env = "PHOTOINDEX_EXTENSION", default = ".jpeg")]
    pub extension: String,

    /// MIME type written into display data URIs.
    #[config(env = "PHOTOINDEX_MIME", default = "image/jpeg")]
    pub mime_type: String,

    /// Metadata store key holding the serialized catalog.
    #[config(default = "photos")]
    pub metadata_key: String,
}

impl Default for PhotoConfig {
    fn default() -> Self {
        Self {
            quality: 100,
            extension: ".jpeg".to_string(),
            mime_type: "image/jpeg".to_string(),
            metadata_key: "photos".to_string(),
        }
    }
}

impl PhotoConfig {
    /// Load from env and `<data_dir>/photoindex.toml`. A missing file is fine.
    pub fn load_from(data_dir: &Path) -> Result<Self> {
        let config = PhotoConfig::builder()
            .env()
            .file(data_dir.join(CONFIG_FILE_NAME))
            .load()?;
        Ok(config)
    }

    /// Extension normalized to start with a dot.
    pub fn extension(&self) -> String {
        if self.extension.is_empty() || self.extension.starts_with('.') {
            self.extension.clone()
        } else {
            format!(".{}", self.extension)
        }
    }

    pub fn capture_options(&self) -> CaptureOptions {
        CaptureOptions::default().with_quality(self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = PhotoConfig::default();
        assert_eq!(config.quality, 100);
        assert_eq!(config.extension(), ".jpeg");
        assert_eq!(config.metadata_key, "photos");
    }

    #[test]
    fn test_extension_normalization_without_dot() {
        let config = PhotoConfig {
            extension: "png".to_string(),
            ..Default::default()
        };
        assert_eq!(config.extension(), ".png");
    }

    #[test]
    fn test_capture_options_follow_quality() {
        let config = PhotoConfig {
            quality: 80,
            ..Default::default()
        };
        assert_eq!(config.capture_options().quality, 80);
    }

    #[test]
    fn test_load_reads_toml_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "extension = \".png\"\nmime_type = \"image/png\"\n",
        )
        .unwrap();

        let config = PhotoConfig::load_from(dir.path()).unwrap();
        assert_eq!(config.extension, ".png");
        assert_eq!(config.mime_type, "image/png");
        assert_eq!(config.metadata_key, "photos");
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = PhotoConfig::load_from(dir.path()).unwrap();
        assert_eq!(config.metadata_key, PhotoConfig::default().metadata_key);
    }
}
