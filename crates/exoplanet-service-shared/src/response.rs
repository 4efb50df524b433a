//! Response body for dataset replacement requests.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Message returned when a replacement succeeded.
pub const UPDATE_OK_MESSAGE: &str = "Dataset updated";

/// Message returned when a replacement could not be persisted.
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update dataset";

/// Outcome of `POST /update-local-data`.
///
/// # Example
///
/// ```
/// use exoplanet_service_shared::UpdateResponse;
///
/// let ok = UpdateResponse::updated();
/// assert!(ok.success);
///
/// let failed = UpdateResponse::failed("permission denied");
/// assert_eq!(failed.error.as_deref(), Some("permission denied"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateResponse {
    /// Whether the dataset was replaced.
    pub success: bool,

    /// Human-readable summary.
    pub message: String,

    /// Underlying failure, only present when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UpdateResponse {
    /// Successful replacement.
    pub fn updated() -> Self {
        Self {
            success: true,
            message: UPDATE_OK_MESSAGE.to_string(),
            error: None,
        }
    }

    /// Failed replacement with the underlying error text.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: UPDATE_FAILED_MESSAGE.to_string(),
            error: Some(error.into()),
        }
    }

    /// HTTP status for this outcome.
    pub fn status(&self) -> StatusCode {
        if self.success {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}
