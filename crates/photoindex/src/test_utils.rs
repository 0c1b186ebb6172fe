use crate::capture::CapturedPhoto;
use crate::index::FsPhotoIndex;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub index: FsPhotoIndex,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let index = FsPhotoIndex::open(&root);
        Self {
            _temp_dir: temp_dir,
            index,
            root,
        }
    }

    /// A fresh handle on the same directory, as after a restart.
    pub fn reopen(&self) -> FsPhotoIndex {
        FsPhotoIndex::open(&self.root)
    }

    pub fn blob_dir(&self) -> PathBuf {
        self.root.join("photos")
    }
}

pub fn photo(bytes: &[u8]) -> CapturedPhoto {
    CapturedPhoto {
        web_path: Some("blob:test".to_string()),
        data: bytes.to_vec(),
    }
}
