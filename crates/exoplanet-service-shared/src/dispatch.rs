//! JSON-RPC method dispatch.
//!
//! The method set is closed: [`RpcMethod`] names every operation and
//! [`dispatch`] matches on it explicitly.

use std::fmt;
use std::str::FromStr;

use exoplanet_lib::{Dataset, DatasetStore, PlanetRecord};
use serde_json::Value;
use tracing::{debug, warn};

use crate::jsonrpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, RpcCall};

/// Registered JSON-RPC methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcMethod {
    /// `getAllPlanets()`
    GetAllPlanets,
    /// `getPlanetByName(name)`
    GetPlanetByName,
    /// `getPlanetsByDiscYear(year)`
    GetPlanetsByDiscYear,
    /// `getPlanetsByHostname(hostname)`
    GetPlanetsByHostname,
}

impl RpcMethod {
    /// All registered methods.
    pub const ALL: [RpcMethod; 4] = [
        RpcMethod::GetAllPlanets,
        RpcMethod::GetPlanetByName,
        RpcMethod::GetPlanetsByDiscYear,
        RpcMethod::GetPlanetsByHostname,
    ];

    /// Wire name of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            RpcMethod::GetAllPlanets => "getAllPlanets",
            RpcMethod::GetPlanetByName => "getPlanetByName",
            RpcMethod::GetPlanetsByDiscYear => "getPlanetsByDiscYear",
            RpcMethod::GetPlanetsByHostname => "getPlanetsByHostname",
        }
    }
}

impl fmt::Display for RpcMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a method name is not registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMethod(pub String);

impl FromStr for RpcMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RpcMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

/// Handle a raw `/rpc` body and produce the response envelope.
pub async fn handle_body(store: &DatasetStore, body: &[u8]) -> JsonRpcResponse {
    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, "rejecting unparsable JSON-RPC body");
            return JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error());
        }
    };

    let Some(request) = JsonRpcRequest::from_value(value) else {
        return JsonRpcResponse::error(Value::Null, JsonRpcError::invalid_request());
    };

    match request.validate() {
        Ok(call) => dispatch(store, call).await,
        Err(response) => response,
    }
}

/// Route a validated call to its operation.
pub async fn dispatch(store: &DatasetStore, call: RpcCall) -> JsonRpcResponse {
    let RpcCall { method, params, id } = call;

    let method = match method.parse::<RpcMethod>() {
        Ok(method) => method,
        Err(UnknownMethod(name)) => {
            debug!(method = %name, "unknown JSON-RPC method");
            return JsonRpcResponse::error(id, JsonRpcError::method_not_found());
        }
    };

    let args = match params {
        None => Vec::new(),
        Some(Value::Array(args)) => args,
        Some(_) => {
            return JsonRpcResponse::error(
                id,
                JsonRpcError::invalid_params("params must be an array of positional arguments"),
            );
        }
    };

    let dataset = store.snapshot().await;
    match invoke(method, &dataset, &args) {
        Ok(result) => JsonRpcResponse::success(id, result),
        Err(error) => {
            warn!(method = %method, code = error.code, error = %error.message, "JSON-RPC call failed");
            JsonRpcResponse::error(id, error)
        }
    }
}

fn invoke(method: RpcMethod, dataset: &Dataset, args: &[Value]) -> Result<Value, JsonRpcError> {
    let arg = args.first();

    let matches = match method {
        RpcMethod::GetAllPlanets => {
            return dataset
                .to_value()
                .map_err(|e| JsonRpcError::internal_error(e.to_string()));
        }
        RpcMethod::GetPlanetByName => match arg.and_then(Value::as_str) {
            Some(name) => dataset.filter_by_name(name),
            None => no_match(dataset),
        },
        RpcMethod::GetPlanetsByDiscYear => match arg.and_then(Value::as_f64) {
            Some(year) => dataset.filter_by_disc_year(year),
            None => no_match(dataset),
        },
        RpcMethod::GetPlanetsByHostname => match arg.and_then(Value::as_str) {
            Some(hostname) => dataset.filter_by_hostname(hostname),
            None => no_match(dataset),
        },
    }
    .map_err(|e| JsonRpcError::internal_error(e.to_string()))?;

    Ok(Value::Array(matches.into_iter().map(Value::from).collect()))
}

/// A missing or mistyped argument can never equal a projected field.
fn no_match(dataset: &Dataset) -> exoplanet_lib::Result<Vec<PlanetRecord>> {
    dataset.records().map(|_| Vec::new())
}
