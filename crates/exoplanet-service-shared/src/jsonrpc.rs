//! JSON-RPC 2.0 protocol types.
//!
//! - Request: `{"jsonrpc": "2.0", "method": "...", "params": [...], "id": ...}`
//! - Response: `{"jsonrpc": "2.0", "result": ..., "id": ...}` or
//!   `{"jsonrpc": "2.0", "error": {"code": ..., "message": "..."}, "id": ...}`
//!
//! Requests are decoded leniently so that a malformed envelope can still be
//! answered with a proper `Invalid Request` error that echoes its `id`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol version accepted and emitted by this service.
pub const JSONRPC_VERSION: &str = "2.0";

/// Invalid JSON was received by the server.
pub const PARSE_ERROR: i32 = -32700;
/// The JSON sent is not a valid Request object.
pub const INVALID_REQUEST: i32 = -32600;
/// The method does not exist / is not available.
pub const METHOD_NOT_FOUND: i32 = -32601;
/// Invalid method parameter(s).
pub const INVALID_PARAMS: i32 = -32602;
/// Internal JSON-RPC error.
pub const INTERNAL_ERROR: i32 = -32603;

/// JSON-RPC request envelope as received on the wire.
///
/// Every member is optional here; [`JsonRpcRequest::validate`] decides
/// whether the envelope is acceptable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version, must be exactly `"2.0"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsonrpc: Option<Value>,
    /// Name of the method to invoke.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<Value>,
    /// Positional parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    /// Request identifier (number, string, or null).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

/// A request envelope that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcCall {
    /// Method name as sent by the client. A non-string method is carried as
    /// its JSON text, which never names a registered operation.
    pub method: String,
    /// Raw `params` member, `None` when absent or empty.
    pub params: Option<Value>,
    /// Identifier to echo back, `Value::Null` when absent.
    pub id: Value,
}

impl JsonRpcRequest {
    /// Decode a request from an arbitrary JSON value.
    ///
    /// Returns `None` when the value is not a JSON object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(_) => serde_json::from_value(value).ok(),
            _ => None,
        }
    }

    /// Identifier to echo in a response, `null` when absent.
    pub fn echo_id(&self) -> Value {
        self.id.clone().unwrap_or(Value::Null)
    }

    /// Check the envelope and extract the call.
    ///
    /// Fails with `Invalid Request` when `jsonrpc` is not `"2.0"` or when
    /// `method` is missing or empty. Empty `params` are dropped.
    pub fn validate(self) -> Result<RpcCall, JsonRpcResponse> {
        let id = self.echo_id();

        let version_ok = matches!(&self.jsonrpc, Some(Value::String(v)) if v == JSONRPC_VERSION);
        let method = match self.method {
            Some(method) if is_empty_member(&method) => None,
            Some(Value::String(method)) => Some(method),
            Some(other) => Some(other.to_string()),
            None => None,
        };

        match (version_ok, method) {
            (true, Some(method)) => Ok(RpcCall {
                method,
                params: self.params.filter(|p| !is_empty_member(p)),
                id,
            }),
            _ => Err(JsonRpcResponse::error(id, JsonRpcError::invalid_request())),
        }
    }
}

/// `null`, `false`, zero, and the empty string count as an absent member.
fn is_empty_member(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// JSON-RPC 2.0 response.
///
/// Exactly one of `result` and `error` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// JSON-RPC version (always "2.0")
    pub jsonrpc: String,
    /// Result value on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error object on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    /// Request identifier (matches the request id, or null)
    pub id: Value,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Create an error response.
    pub fn error(id: Value, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            result: None,
            error: Some(error),
            id,
        }
    }
}

/// JSON-RPC 2.0 error object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// Error code (standard codes are negative integers)
    pub code: i32,
    /// Short description of the error
    pub message: String,
}

impl JsonRpcError {
    /// Create an error with an arbitrary code.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create a parse error (-32700).
    pub fn parse_error() -> Self {
        Self::new(PARSE_ERROR, "Parse error")
    }

    /// Create an invalid request error (-32600).
    pub fn invalid_request() -> Self {
        Self::new(INVALID_REQUEST, "Invalid Request")
    }

    /// Create a method not found error (-32601).
    pub fn method_not_found() -> Self {
        Self::new(METHOD_NOT_FOUND, "Method not found")
    }

    /// Create an invalid params error (-32602).
    pub fn invalid_params(msg: impl Into<String>) -> Self {
        Self::new(INVALID_PARAMS, msg)
    }

    /// Create an internal error (-32603).
    ///
    /// Falls back to the generic "Internal error" message when `msg` is empty.
    pub fn internal_error(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        if msg.is_empty() {
            Self::new(INTERNAL_ERROR, "Internal error")
        } else {
            Self::new(INTERNAL_ERROR, msg)
        }
    }
}
