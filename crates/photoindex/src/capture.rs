//! # Capture Source
//!
//! Where new photos come from. The index does not manage a capture's
//! lifecycle: it asks once, consumes the payload, and forgets the source.
//!
//! A cancelled capture and a failed capture are both recoverable. The index
//! logs them and leaves the catalog untouched.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// How the capture result should be handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    /// A locator pointing at the captured image.
    Uri,
    Base64,
    DataUrl,
}

/// Where the capture should come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraSource {
    /// Let the user choose between camera and library.
    Prompt,
    Camera,
    Photos,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureOptions {
    pub result_type: ResultType,
    pub source: CameraSource,
    pub quality: u8,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            result_type: ResultType::Uri,
            source: CameraSource::Prompt,
            quality: 100,
        }
    }
}

impl CaptureOptions {
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality.min(100);
        self
    }
}

/// A transient image produced by a capture source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedPhoto {
    /// Ephemeral locator a view can show until the next load.
    pub web_path: Option<String>,
    pub data: Vec<u8>,
}

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Capture cancelled by user")]
    Cancelled,

    #[error("Capture failed: {0}")]
    Failed(String),
}

pub trait CaptureSource {
    fn capture(&mut self, options: &CaptureOptions) -> Result<CapturedPhoto, CaptureError>;
}

/// Capture source that picks an existing image file from disk.
///
/// The path is consumed on the first capture; a second call is a cancel.
/// No path at all means the user backed out of the picker.
pub struct FileCapture {
    path: Option<PathBuf>,
}

impl FileCapture {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl CaptureSource for FileCapture {
    fn capture(&mut self, _options: &CaptureOptions) -> Result<CapturedPhoto, CaptureError> {
        let path = self.path.take().ok_or(CaptureError::Cancelled)?;
        let data = fs::read(&path)
            .map_err(|e| CaptureError::Failed(format!("{}: {}", path.display(), e)))?;
        if data.is_empty() {
            return Err(CaptureError::Failed(format!(
                "{}: image is empty",
                path.display()
            )));
        }

        let web_path = fs::canonicalize(&path)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned();
        Ok(CapturedPhoto {
            web_path: Some(format!("file://{}", web_path)),
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_options_match_gallery_settings() {
        let options = CaptureOptions::default();
        assert_eq!(options.result_type, ResultType::Uri);
        assert_eq!(options.source, CameraSource::Prompt);
        assert_eq!(options.quality, 100);
    }

    #[test]
    fn test_quality_is_clamped() {
        assert_eq!(CaptureOptions::default().with_quality(250).quality, 100);
    }

    #[test]
    fn test_file_capture_reads_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shot.jpeg");
        fs::write(&path, b"jpeg-bytes").unwrap();

        let mut source = FileCapture::new(Some(path));
        let photo = source.capture(&CaptureOptions::default()).unwrap();
        assert_eq!(photo.data, b"jpeg-bytes");
        assert!(photo.web_path.unwrap().starts_with("file://"));

        assert!(matches!(
            source.capture(&CaptureOptions::default()),
            Err(CaptureError::Cancelled)
        ));
    }

    #[test]
    fn test_file_capture_without_path_is_cancelled() {
        let mut source = FileCapture::new(None);
        assert!(matches!(
            source.capture(&CaptureOptions::default()),
            Err(CaptureError::Cancelled)
        ));
    }

    #[test]
    fn test_file_capture_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let mut source = FileCapture::new(Some(dir.path().join("nope.jpeg")));
        assert!(matches!(
            source.capture(&CaptureOptions::default()),
            Err(CaptureError::Failed(_))
        ));
    }

    #[test]
    fn test_file_capture_empty_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.jpeg");
        fs::write(&path, b"").unwrap();
        let mut source = FileCapture::new(Some(path));
        assert!(matches!(
            source.capture(&CaptureOptions::default()),
            Err(CaptureError::Failed(_))
        ));
    }
}
