//! Dataset store: the process-wide dataset snapshot and its backing file.
//!
//! Reads work on an `Arc` snapshot and never hold the lock while using it.
//! Replacements are serialized; each one writes the document to a temporary
//! sibling, renames it over the backing file, and only then swaps the
//! snapshot. A failed write leaves the snapshot and the previous document
//! untouched.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::{Mutex, RwLock};
use tracing::{error, info, warn};

use crate::dataset::Dataset;
use crate::error::{Error, Result};

/// Owner of the in-memory dataset and the JSON document that backs it.
#[derive(Debug)]
pub struct DatasetStore {
    path: PathBuf,
    snapshot: RwLock<Arc<Dataset>>,
    replace_lock: Mutex<()>,
}

impl DatasetStore {
    /// Open the store, loading the document at `path`.
    ///
    /// Never fails: a missing or malformed document is logged and the store
    /// starts with an empty dataset.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let dataset = match Dataset::from_path(&path).await {
            Ok(dataset) => {
                info!(
                    path = %path.display(),
                    records = dataset.len(),
                    "dataset loaded"
                );
                dataset
            }
            Err(Error::DatasetNotFound { .. }) => {
                warn!(path = %path.display(), "dataset not found, starting with an empty dataset");
                Dataset::default()
            }
            Err(e) => {
                error!(
                    path = %path.display(),
                    error = %e,
                    "failed to load dataset, starting with an empty dataset"
                );
                Dataset::default()
            }
        };

        Self::with_dataset(path, dataset)
    }

    /// Create a store from an already loaded dataset without touching disk.
    pub fn with_dataset(path: impl Into<PathBuf>, dataset: Dataset) -> Self {
        Self {
            path: path.into(),
            snapshot: RwLock::new(Arc::new(dataset)),
            replace_lock: Mutex::new(()),
        }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The current dataset.
    pub async fn snapshot(&self) -> Arc<Dataset> {
        self.snapshot.read().await.clone()
    }

    /// Replace the whole dataset with `value`, persisting it first.
    ///
    /// The value is written verbatim (pretty-printed, two-space indent).
    /// Returns the new snapshot on success.
    pub async fn replace(&self, value: Value) -> Result<Arc<Dataset>> {
        let _guard = self.replace_lock.lock().await;

        let document = serde_json::to_vec_pretty(&value)?;
        self.persist(&document).await?;

        let dataset = Arc::new(Dataset::from_value(value));
        *self.snapshot.write().await = Arc::clone(&dataset);

        info!(
            path = %self.path.display(),
            records = dataset.len(),
            "dataset replaced"
        );
        Ok(dataset)
    }

    async fn persist(&self, document: &[u8]) -> Result<()> {
        let staging = self.staging_path();

        if let Err(source) = tokio::fs::write(&staging, document).await {
            return Err(Error::Persist {
                path: self.path.clone(),
                source,
            });
        }

        if let Err(source) = tokio::fs::rename(&staging, &self.path).await {
            // Best effort; the staging file is never read back.
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(Error::Persist {
                path: self.path.clone(),
                source,
            });
        }

        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
