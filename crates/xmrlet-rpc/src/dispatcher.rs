//! The dispatcher: the one place a call goes from request to typed result.

use serde_json::Value;
use tracing::{debug, info, warn};

use xmrlet_core::config::Config;

use crate::registry::{Method, Payload, WalletMethod};
use crate::request::{IdPolicy, RequestBuilder, RequestEnvelope, ResponseEnvelope};
use crate::result::{CallError, DecodeError, RpcResult};
use crate::transport::{HttpTransport, Transport, TransportError};

/// Sends requests to the wallet service and decodes the answers.
///
/// Holds no per-call state apart from the request id counter, so a shared
/// reference can serve concurrent callers.
pub struct Dispatcher<T: Transport = HttpTransport> {
    transport: T,
    url: String,
    builder: RequestBuilder,
}

impl Dispatcher<HttpTransport> {
    /// Build a dispatcher talking HTTP to the wallet named in `config`.
    pub fn from_config(config: &Config) -> Result<Self, TransportError> {
        let transport = HttpTransport::from_config(config)?;
        Ok(Self::new(transport, config.wallet_rpc_url()))
    }
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T, url: impl Into<String>) -> Self {
        Self::with_id_policy(transport, url, IdPolicy::Counter)
    }

    pub fn with_id_policy(transport: T, url: impl Into<String>, policy: IdPolicy) -> Self {
        let url = url.into();
        info!(url = %url, "wallet dispatcher ready");
        Self {
            transport,
            url,
            builder: RequestBuilder::new(policy),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn builder(&self) -> &RequestBuilder {
        &self.builder
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Call a method with typed params and get its typed response.
    pub async fn call<M: WalletMethod>(&self, params: &M::Params) -> RpcResult<M::Response> {
        let params = serde_json::to_value(params).map_err(CallError::Encode)?;
        let envelope = self.builder.build_method(M::METHOD, params)?;
        let payload = self.send(&envelope).await?;
        let method = payload.method();
        M::into_response(payload).ok_or_else(|| {
            // The descriptor for M::METHOD always decodes into M's variant.
            CallError::Decode(DecodeError {
                method: M::METHOD.as_str().to_string(),
                expected: M::METHOD.descriptor().result_shape,
                actual: method.descriptor().result_shape.to_string(),
                detail: "payload tagged with another method".to_string(),
            })
        })
    }

    /// Call a method by wire name with untyped params.
    pub async fn call_raw(&self, method: &str, params: Value) -> RpcResult<Payload> {
        let envelope = self.builder.build(method, params)?;
        self.send(&envelope).await
    }

    /// Send a built request and decode the answer against its method.
    pub async fn send(&self, envelope: &RequestEnvelope) -> RpcResult<Payload> {
        let method = envelope
            .rpc_method()
            .ok_or_else(|| CallError::UnknownMethod(envelope.method.clone()))?;

        debug!(method = %method, id = ?envelope.id, "sending wallet request");
        let body = serde_json::to_vec(envelope).map_err(CallError::Encode)?;

        let bytes = match self.transport.post_json(&self.url, body).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(method = %method, error = %e, "wallet request failed in transport");
                return Err(e.into());
            }
        };

        let result = decode_response(method, &bytes);
        if let Err(e) = &result {
            warn!(method = %method, kind = ?e.kind(), error = %e, "wallet call failed");
        }
        result
    }
}

/// Turn raw response bytes into the method's payload.
///
/// An `error` member wins over any `result` member.
fn decode_response(method: Method, bytes: &[u8]) -> RpcResult<Payload> {
    let descriptor = method.descriptor();

    let raw: Value = serde_json::from_slice(bytes).map_err(|e| {
        let preview = String::from_utf8_lossy(&bytes[..bytes.len().min(64)]).into_owned();
        DecodeError::new(
            descriptor.name,
            "JSON-RPC response",
            &Value::String(preview),
            e,
        )
    })?;

    let envelope: ResponseEnvelope = serde_json::from_value(raw.clone())
        .map_err(|e| DecodeError::new(descriptor.name, "JSON-RPC response", &raw, e))?;

    if let Some(error) = envelope.error {
        return Err(CallError::Rpc(error));
    }

    let result = envelope.result.ok_or_else(|| {
        DecodeError::new(
            descriptor.name,
            descriptor.result_shape,
            &raw,
            "response has neither result nor error",
        )
    })?;

    let shape = crate::result::describe_shape(&result);
    (descriptor.decode)(result).map_err(|e| {
        CallError::Decode(DecodeError {
            method: descriptor.name.to_string(),
            expected: descriptor.result_shape,
            actual: shape,
            detail: e.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bytes(value: Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    #[test]
    fn decode_success() {
        let payload = decode_response(
            Method::GetHeight,
            &bytes(json!({"id": "0", "jsonrpc": "2.0", "result": {"height": 3}})),
        )
        .unwrap();
        assert_eq!(payload.method(), Method::GetHeight);
    }

    #[test]
    fn error_wins_over_result() {
        let err = decode_response(
            Method::GetHeight,
            &bytes(json!({
                "id": "0",
                "jsonrpc": "2.0",
                "result": {"height": 3},
                "error": {"code": -1, "message": "busy"}
            })),
        )
        .unwrap_err();
        assert_eq!(err.as_rpc_error().map(|e| e.code), Some(-1));
    }

    #[test]
    fn missing_result_is_decode_error() {
        let err =
            decode_response(Method::GetHeight, &bytes(json!({"id": "0", "jsonrpc": "2.0"})))
                .unwrap_err();
        let decode = err.as_decode_error().unwrap();
        assert_eq!(decode.method, "get_height");
        assert_eq!(decode.expected, "GetHeightResult");
    }

    #[test]
    fn non_json_body_is_decode_error() {
        let err = decode_response(Method::GetHeight, b"<html>502</html>").unwrap_err();
        assert!(err.as_decode_error().is_some());
    }

    #[test]
    fn wrong_shape_reports_actual_keys() {
        let err = decode_response(
            Method::GetBalance,
            &bytes(json!({"id": "0", "jsonrpc": "2.0", "result": {"height": 3}})),
        )
        .unwrap_err();
        let decode = err.as_decode_error().unwrap();
        assert_eq!(decode.expected, "GetBalanceResult");
        assert_eq!(decode.actual, "object {height}");
    }

    #[test]
    fn array_result_is_decode_error() {
        for (method, result, actual) in [
            (Method::GetHeight, json!([7]), "array of 1"),
            (Method::GetBalance, json!([500, 500]), "array of 2"),
            (Method::Store, json!([]), "array of 0"),
        ] {
            let err = decode_response(
                method,
                &bytes(json!({"id": "0", "jsonrpc": "2.0", "result": result})),
            )
            .unwrap_err();
            let decode = err.as_decode_error().unwrap();
            assert_eq!(decode.method, method.as_str());
            assert_eq!(decode.actual, actual);
        }
    }
}
