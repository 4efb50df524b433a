//! Exoplanet library entry points.
//!
//! This crate owns the planet record model, the dataset document, and the
//! store that keeps the dataset in memory and persists replacements. Service
//! crates should only depend on the items exported here instead of touching
//! the dataset file themselves.
//!

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod record;
pub mod store;

pub use dataset::{Dataset, DATASET_FILENAME};
pub use error::{Error, Result};
pub use record::PlanetRecord;
pub use store::DatasetStore;
