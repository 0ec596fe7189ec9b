//! Call outcomes.
//!
//! Every call yields an [`RpcResult`]: `Ok` with the method's typed payload,
//! or `Err` with a [`CallError`] saying which stage failed. `is_ok()` /
//! `is_err()` branch on it; `unwrap()` / `unwrap_err()` panic on the wrong
//! variant.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::transport::TransportError;

/// Result of a wallet RPC call.
pub type RpcResult<T> = Result<T, CallError>;

/// An error object returned by the wallet service.
///
/// Code and message are passed through exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message} (code {code})")]
pub struct RpcError {
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

impl RpcError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// The response did not have the shape the method declares.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{method}: expected {expected}, got {actual} ({detail})")]
pub struct DecodeError {
    /// Method whose response was being decoded.
    pub method: String,
    /// Name of the expected shape.
    pub expected: &'static str,
    /// Summary of what actually arrived.
    pub actual: String,
    /// Decoder message.
    pub detail: String,
}

impl DecodeError {
    pub(crate) fn new(
        method: &str,
        expected: &'static str,
        value: &Value,
        detail: impl ToString,
    ) -> Self {
        Self {
            method: method.to_string(),
            expected,
            actual: describe_shape(value),
            detail: detail.to_string(),
        }
    }
}

/// Short description of a JSON value's shape, e.g. `object {balance, fee}`.
pub(crate) fn describe_shape(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Array(items) => format!("array of {}", items.len()),
        Value::Object(map) => {
            let keys: Vec<&str> = map.keys().map(String::as_str).collect();
            format!("object {{{}}}", keys.join(", "))
        }
    }
}

/// Why a call failed.
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    /// The method name is not in the registry.
    #[error("unknown method: {0}")]
    UnknownMethod(String),
    /// The params do not fit the method's parameter shape.
    #[error("invalid params for {method}: {source}")]
    InvalidParams {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),
    /// Network, authentication or timeout failure.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    /// The service rejected the call.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),
    /// The service answered with something the client does not understand.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Discriminant of [`CallError`], for branching and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnknownMethod,
    InvalidParams,
    Encode,
    Transport,
    Rpc,
    Decode,
}

impl CallError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CallError::UnknownMethod(_) => ErrorKind::UnknownMethod,
            CallError::InvalidParams { .. } => ErrorKind::InvalidParams,
            CallError::Encode(_) => ErrorKind::Encode,
            CallError::Transport(_) => ErrorKind::Transport,
            CallError::Rpc(_) => ErrorKind::Rpc,
            CallError::Decode(_) => ErrorKind::Decode,
        }
    }

    /// The service error, if the service rejected the call.
    pub fn as_rpc_error(&self) -> Option<&RpcError> {
        match self {
            CallError::Rpc(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_decode_error(&self) -> Option<&DecodeError> {
        match self {
            CallError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rpc_error_parses_wire_object() {
        let err: RpcError =
            serde_json::from_value(json!({"code": -32602, "message": "Invalid parameter"}))
                .unwrap();
        assert_eq!(err, RpcError::new(-32602, "Invalid parameter"));
        assert_eq!(err.to_string(), "Invalid parameter (code -32602)");
    }

    #[test]
    fn rpc_error_without_message() {
        let err: RpcError = serde_json::from_value(json!({"code": -1})).unwrap();
        assert_eq!(err.message, "");
    }

    #[test]
    fn describe_shapes() {
        assert_eq!(describe_shape(&json!(null)), "null");
        assert_eq!(describe_shape(&json!("x")), "string");
        assert_eq!(describe_shape(&json!([1, 2])), "array of 2");
        assert_eq!(
            describe_shape(&json!({"balance": 1})),
            "object {balance}"
        );
    }

    #[test]
    fn kinds_and_accessors() {
        let rpc = CallError::from(RpcError::new(-1, "no"));
        assert_eq!(rpc.kind(), ErrorKind::Rpc);
        assert_eq!(rpc.as_rpc_error().map(|e| e.code), Some(-1));
        assert!(rpc.as_decode_error().is_none());

        let unknown = CallError::UnknownMethod("nope".into());
        assert_eq!(unknown.kind(), ErrorKind::UnknownMethod);
        assert!(unknown.as_rpc_error().is_none());
    }

    #[test]
    #[should_panic]
    fn unwrap_on_err_panics() {
        let result: RpcResult<u64> = Err(CallError::UnknownMethod("x".into()));
        let _ = result.unwrap();
    }
}
