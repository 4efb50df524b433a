//! The exoplanet dataset document and the queries it answers.

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::record::PlanetRecord;

/// Default filename of the persisted dataset.
pub const DATASET_FILENAME: &str = "planets-data.json";

/// In-memory mirror of the persisted dataset document.
///
/// A replacement is accepted without validation, so the document is not
/// guaranteed to be a list of records. Anything else is kept verbatim as
/// [`Dataset::Opaque`]: it is still served by a full listing, but cannot be
/// filtered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dataset {
    /// Ordered sequence of planet records.
    Records(Vec<PlanetRecord>),
    /// Any other JSON document.
    Opaque(Value),
}

impl Default for Dataset {
    fn default() -> Self {
        Dataset::Records(Vec::new())
    }
}

impl Dataset {
    /// Build a dataset from an arbitrary JSON value.
    pub fn from_value(value: Value) -> Self {
        // Anything but an array of objects falls back to an opaque document.
        serde_json::from_value(value.clone()).unwrap_or(Dataset::Opaque(value))
    }

    /// Parse a dataset from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Ok(Self::from_value(value))
    }

    /// Read and parse the dataset document at `path`.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading dataset document");

        let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::DatasetNotFound {
                path: path.to_path_buf(),
            },
            _ => Error::Io(e),
        })?;

        Self::from_slice(&bytes)
    }

    /// Records of the dataset, or an error when the document is opaque.
    pub fn records(&self) -> Result<&[PlanetRecord]> {
        match self {
            Dataset::Records(records) => Ok(records),
            Dataset::Opaque(_) => Err(Error::NotARecordSequence),
        }
    }

    /// Number of records; zero for an opaque document.
    pub fn len(&self) -> usize {
        match self {
            Dataset::Records(records) => records.len(),
            Dataset::Opaque(_) => 0,
        }
    }

    /// True when there are no records to query.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The whole document as JSON, unchanged.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Records whose `pl_name` equals `name` exactly.
    pub fn filter_by_name(&self, name: &str) -> Result<Vec<PlanetRecord>> {
        self.filter(|record| record.name() == Some(name))
    }

    /// Records whose `disc_year` is numerically equal to `year`.
    pub fn filter_by_disc_year(&self, year: f64) -> Result<Vec<PlanetRecord>> {
        self.filter(|record| record.disc_year() == Some(year))
    }

    /// Records whose `hostname` equals `hostname` exactly.
    pub fn filter_by_hostname(&self, hostname: &str) -> Result<Vec<PlanetRecord>> {
        self.filter(|record| record.hostname() == Some(hostname))
    }

    fn filter<F>(&self, predicate: F) -> Result<Vec<PlanetRecord>>
    where
        F: Fn(&PlanetRecord) -> bool,
    {
        Ok(self
            .records()?
            .iter()
            .filter(|record| predicate(*record))
            .cloned()
            .collect())
    }
}
