//! # xmrlet-rpc
//!
//! Registry-driven JSON-RPC client for monero-wallet-rpc.
//!
//! Calls go through one [`Dispatcher`]: typed via
//! `dispatcher.call::<GetBalance>(&params)`, or by wire name via
//! `dispatcher.call_raw("get_balance", json)`. Multi-step operations are
//! [`Plan`]s.

pub mod composite;
pub mod dispatcher;
pub mod methods;
pub mod registry;
pub mod request;
pub mod result;
pub mod transport;
pub mod types;

pub use composite::{plans, History, Plan, StepFailure};
pub use dispatcher::Dispatcher;
pub use registry::{lookup, Method, MethodDescriptor, Payload, WalletMethod};
pub use request::{IdPolicy, RequestBuilder, RequestEnvelope, RequestId};
pub use result::{CallError, DecodeError, ErrorKind, RpcError, RpcResult};
pub use transport::{HttpTransport, Transport, TransportError};
