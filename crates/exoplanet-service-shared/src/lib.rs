//! Shared infrastructure for the exoplanet JSON-RPC HTTP service.
//!
//! This crate provides the HTTP glue around `exoplanet-lib`:
//!
//! - [`AppState`]: The dataset store shared by all handlers
//! - [`jsonrpc`]: JSON-RPC 2.0 request/response types and error codes
//! - [`dispatch`]: Validation and routing of calls to the query operations
//! - [`build_router`]: The axum router (`/`, `/rpc`, `/update-local-data`)
//! - [`UpdateResponse`]: Body of dataset replacement responses
//! - [`ServiceConfig`]: Port and dataset path from the environment
//! - [`logging`]: Structured JSON logging setup
//! - [`middleware`]: Request ID extraction and request spans
//!
//! # Architecture
//!
//! Handlers stay thin; dataset semantics live in `exoplanet-lib`:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  axum Handler                                               │
//! │  - Read request body                                        │
//! │  - Validate the JSON-RPC envelope                           │
//! │  - Match the method and call exoplanet-lib                  │
//! │  - Format response                                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides a writable copy of the fixture dataset.
//! Enable the `test-utils` feature to access it from dependent crates.

#![deny(warnings)]

mod config;
pub mod dispatch;
mod health;
pub mod jsonrpc;
pub mod logging;
pub mod middleware;
mod response;
mod router;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{ServiceConfig, DEFAULT_PORT};
pub use dispatch::{dispatch, handle_body, RpcMethod};
pub use health::{liveness, LIVENESS_MESSAGE};
pub use jsonrpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, RpcCall};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use middleware::{extract_or_generate_request_id, request_span, RequestId};
pub use response::{UpdateResponse, UPDATE_FAILED_MESSAGE, UPDATE_OK_MESSAGE};
pub use router::{build_router, RPC_PATH, UPDATE_PATH};
pub use state::AppState;
