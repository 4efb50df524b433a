use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the exoplanet library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Dataset document could not be located at the given path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// Raised when a replacement dataset could not be written to disk.
    #[error("failed to persist dataset to {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when a filter runs against a dataset that is not a list of records.
    #[error("dataset is not a sequence of planet records")]
    NotARecordSequence,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parse and serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
