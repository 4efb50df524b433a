//! Service configuration.
//!
//! # Environment Variables
//!
//! - `PLANETS_DATA_PATH`: Path to the dataset document (default: `planets-data.json`)
//! - `SERVICE_PORT`: HTTP port (default: 3000)

use std::net::SocketAddr;
use std::path::PathBuf;

use exoplanet_lib::DATASET_FILENAME;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration for the JSON-RPC service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Path to the dataset document.
    pub data_path: PathBuf,
    /// Port to listen on (all interfaces).
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DATASET_FILENAME),
            port: DEFAULT_PORT,
        }
    }
}

impl ServiceConfig {
    /// Create configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let data_path = lookup("PLANETS_DATA_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_path);

        let port = lookup("SERVICE_PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        Self { data_path, port }
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
