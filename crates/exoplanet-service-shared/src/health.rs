//! Liveness handler.
//!
//! `GET /` answers with a plain-text line as long as the process is up. It
//! does not inspect the dataset: an empty dataset is a valid state.

/// Body returned by the liveness endpoint.
pub const LIVENESS_MESSAGE: &str = "JSON-RPC server for exoplanets is running!";

/// Liveness handler.
///
/// ```text
/// GET /
/// JSON-RPC server for exoplanets is running!
/// ```
pub async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}
