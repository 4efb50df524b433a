//! Common test utilities and fixture helpers.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Path to the checked-in fixture dataset.
pub fn fixture_dataset_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/planets-data.json")
}

/// Scratch directory holding a writable copy of the fixture dataset.
pub struct DatasetTestEnv {
    /// Temp directory (dropped on struct drop)
    _temp_dir: TempDir,
    /// Path to the dataset copy
    pub path: PathBuf,
}

impl DatasetTestEnv {
    /// Create a new environment by copying the fixture dataset.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("planets-data.json");
        fs::copy(fixture_dataset_path(), &path).expect("copy fixture dataset");

        Self {
            _temp_dir: temp_dir,
            path,
        }
    }
}
