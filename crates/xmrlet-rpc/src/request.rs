//! JSON-RPC 2.0 envelopes and the request builder.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::registry::{self, Method};
use crate::result::{CallError, RpcError};

/// Protocol version tag attached to every request.
pub const JSONRPC_VERSION: &str = "2.0";

/// Correlation id of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    Number(u64),
    Text(String),
}

impl From<u64> for RequestId {
    fn from(n: u64) -> Self {
        RequestId::Number(n)
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        RequestId::Text(s.to_string())
    }
}

/// A request ready to be sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestEnvelope {
    pub id: RequestId,
    pub jsonrpc: &'static str,
    pub method: String,
    pub params: Value,
}

impl RequestEnvelope {
    /// The registered method this envelope calls.
    ///
    /// Envelopes only come out of [`RequestBuilder`], so the name is always
    /// registered; `None` means the envelope was built by hand.
    pub fn rpc_method(&self) -> Option<Method> {
        Method::parse_method(&self.method)
    }
}

/// A response as it arrives from the wallet.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcError>,
}

/// How correlation ids are chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdPolicy {
    /// 0, 1, 2, ... for the life of the builder.
    Counter,
    /// The same id on every request.
    Constant(RequestId),
}

/// Turns a method name and params into a [`RequestEnvelope`].
///
/// The builder validates the name against the registry and the params
/// against the method's parameter shape. The only state is the id counter.
#[derive(Debug)]
pub struct RequestBuilder {
    policy: IdPolicy,
    next_id: AtomicU64,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new(IdPolicy::Counter)
    }
}

impl RequestBuilder {
    pub fn new(policy: IdPolicy) -> Self {
        Self {
            policy,
            next_id: AtomicU64::new(0),
        }
    }

    pub fn policy(&self) -> &IdPolicy {
        &self.policy
    }

    /// Build a request for a method given by wire name.
    pub fn build(&self, method: &str, params: Value) -> Result<RequestEnvelope, CallError> {
        let method = Method::parse_method(method)
            .ok_or_else(|| CallError::UnknownMethod(method.to_string()))?;
        self.build_method(method, params)
    }

    /// Build a request for a registered method.
    ///
    /// `params` must be an object, or null for a method that takes none.
    pub fn build_method(
        &self,
        method: Method,
        params: Value,
    ) -> Result<RequestEnvelope, CallError> {
        let params = match params {
            Value::Null => Value::Object(Map::new()),
            other => other,
        };

        let descriptor = method.descriptor();
        (descriptor.validate)(&params).map_err(|source| CallError::InvalidParams {
            method: descriptor.name,
            source,
        })?;

        Ok(RequestEnvelope {
            id: self.next_id(),
            jsonrpc: JSONRPC_VERSION,
            method: descriptor.name.to_string(),
            params,
        })
    }

    fn next_id(&self) -> RequestId {
        match &self.policy {
            IdPolicy::Counter => RequestId::Number(self.next_id.fetch_add(1, Ordering::Relaxed)),
            IdPolicy::Constant(id) => id.clone(),
        }
    }
}

/// Whether `name` is a registered method.
pub fn is_registered(name: &str) -> bool {
    registry::lookup(name).is_some()
}
