//! # xmrlet
//!
//! Typed client for the Monero wallet JSON-RPC service.
//!
//! Re-exports the configuration layer ([`xmrlet_core`]) and the RPC client
//! ([`xmrlet_rpc`]) so applications depend on a single crate.

pub use xmrlet_core;
pub use xmrlet_rpc;

pub use xmrlet_core::config::Config;
pub use xmrlet_rpc::{CallError, Dispatcher, RpcResult};

/// Returns the library version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!version().is_empty());
    }
}
