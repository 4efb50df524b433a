//! HTTP surface of the service.
//!
//! - `GET /` - liveness text
//! - `POST /rpc` - JSON-RPC 2.0 endpoint for the read operations
//! - `POST /update-local-data` - replace the whole dataset

use axum::{
    body::{Body, Bytes},
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::dispatch::handle_body;
use crate::health::liveness;
use crate::jsonrpc::JsonRpcResponse;
use crate::middleware::request_span;
use crate::response::UpdateResponse;
use crate::state::AppState;

/// Path of the JSON-RPC endpoint.
pub const RPC_PATH: &str = "/rpc";

/// Path of the dataset replacement endpoint.
pub const UPDATE_PATH: &str = "/update-local-data";

/// Build the service router with CORS and request tracing applied.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(liveness))
        .route(RPC_PATH, post(rpc_handler))
        .route(UPDATE_PATH, post(update_handler))
        .layer(TraceLayer::new_for_http().make_span_with(request_span::<Body>))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Handle `POST /rpc`.
///
/// The body is read raw so that unparsable JSON can be answered with a
/// JSON-RPC parse error instead of an HTTP rejection.
async fn rpc_handler(State(state): State<AppState>, body: Bytes) -> Json<JsonRpcResponse> {
    let response = handle_body(state.store(), &body).await;

    match &response.error {
        Some(err) => info!(code = err.code, id = %response.id, "JSON-RPC request rejected"),
        None => info!(id = %response.id, "JSON-RPC request handled"),
    }

    Json(response)
}

/// Handle `POST /update-local-data`.
async fn update_handler(State(state): State<AppState>, Json(dataset): Json<Value>) -> UpdateResponse {
    match state.store().replace(dataset).await {
        Ok(snapshot) => {
            info!(records = snapshot.len(), "dataset replaced via HTTP");
            UpdateResponse::updated()
        }
        Err(e) => {
            error!(error = %e, "dataset replacement failed");
            UpdateResponse::failed(e.to_string())
        }
    }
}
