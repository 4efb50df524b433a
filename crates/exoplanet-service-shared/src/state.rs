//! Application state for the HTTP service.
//!
//! This module provides the shared state structure that axum handlers use to
//! reach the dataset store.

use std::path::PathBuf;
use std::sync::Arc;

use exoplanet_lib::{Dataset, DatasetStore};

/// Shared application state for all axum handlers.
///
/// This struct is cheaply cloneable (using `Arc` internally) and should be
/// shared via axum's `State` extractor.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::post, extract::State};
/// use exoplanet_service_shared::AppState;
///
/// async fn handler(State(state): State<AppState>) {
///     let dataset = state.store().snapshot().await;
///     // ... use dataset
/// }
///
/// let state = AppState::load("planets-data.json").await;
/// let app = Router::new()
///     .route("/rpc", post(handler))
///     .with_state(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    inner: Arc<DatasetStore>,
}

impl AppState {
    /// Load application state from a dataset document.
    ///
    /// Loading is best effort: a missing or malformed document leaves the
    /// service running with an empty dataset.
    pub async fn load(data_path: impl Into<PathBuf>) -> Self {
        let data_path = data_path.into();
        tracing::info!(path = %data_path.display(), "loading dataset");
        Self::from_store(DatasetStore::open(data_path).await)
    }

    /// Create application state from an existing store.
    pub fn from_store(store: DatasetStore) -> Self {
        Self {
            inner: Arc::new(store),
        }
    }

    /// Create application state from an in-memory dataset.
    ///
    /// This is useful for testing; replacements still persist to `data_path`.
    pub fn from_dataset(data_path: impl Into<PathBuf>, dataset: Dataset) -> Self {
        Self::from_store(DatasetStore::with_dataset(data_path, dataset))
    }

    /// Access the dataset store.
    pub fn store(&self) -> &DatasetStore {
        &self.inner
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("data_path", &self.inner.path())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_app_state_from_dataset() {
        let dataset = Dataset::from_value(json!([{"pl_name": "Kepler-22 b"}]));
        let state = AppState::from_dataset("/tmp/planets-data.json", dataset);

        assert_eq!(state.store().snapshot().await.len(), 1);
    }

    #[tokio::test]
    async fn test_app_state_clone_shares_store() {
        let state1 = AppState::from_dataset("/tmp/planets-data.json", Dataset::default());
        let state2 = state1.clone();

        assert!(std::ptr::eq(state1.store(), state2.store()));
    }

    #[test]
    fn test_app_state_debug() {
        let state = AppState::from_dataset("/tmp/planets-data.json", Dataset::default());
        let debug = format!("{:?}", state);

        assert!(debug.contains("AppState"));
        assert!(debug.contains("planets-data.json"));
    }

    #[tokio::test]
    async fn test_app_state_load_nonexistent() {
        let state = AppState::load("/nonexistent/path/to/planets-data.json").await;
        assert!(state.store().snapshot().await.is_empty());
    }
}
