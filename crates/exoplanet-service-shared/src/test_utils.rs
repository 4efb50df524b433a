//! Test utilities for handler testing.
//!
//! This module provides a writable copy of the fixture dataset so tests can
//! exercise replacements without touching the checked-in file.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::state::AppState;

/// Path to the checked-in fixture dataset.
pub const TEST_FIXTURE_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../docs/fixtures/planets-data.json"
);

/// Known planet names in the fixture for use in tests.
pub mod fixture_planets {
    /// Appears twice in the fixture, hosted by "Kepler-22".
    pub const KEPLER_22_B: &str = "Kepler-22 b";

    /// Host star of Kepler-22 b.
    pub const KEPLER_22: &str = "Kepler-22";

    /// Number of records in the fixture.
    pub const COUNT: usize = 8;

    /// Number of fixture planets discovered in 2009.
    pub const DISCOVERED_2009: usize = 3;
}

/// Application state backed by a temporary copy of the fixture dataset.
///
/// The temporary directory lives as long as this value.
pub struct FixtureState {
    _temp_dir: TempDir,
    data_path: PathBuf,
    state: AppState,
}

impl FixtureState {
    /// Copy the fixture into a fresh temp directory and load it.
    ///
    /// # Panics
    ///
    /// Panics if the fixture cannot be copied. This indicates a test
    /// configuration issue.
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let data_path = temp_dir.path().join("planets-data.json");
        fs::copy(TEST_FIXTURE_PATH, &data_path)
            .unwrap_or_else(|e| panic!("failed to copy fixture {}: {}", TEST_FIXTURE_PATH, e));

        let state = AppState::load(&data_path).await;
        Self {
            _temp_dir: temp_dir,
            data_path,
            state,
        }
    }

    /// Shared state to hand to the router.
    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    /// Path of the writable dataset copy.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }
}

/// Application state whose replacements always fail to persist.
///
/// The dataset path points into a directory that does not exist.
pub fn unwritable_state(dataset: exoplanet_lib::Dataset) -> AppState {
    AppState::from_dataset("/nonexistent-dir/for-tests/planets-data.json", dataset)
}
