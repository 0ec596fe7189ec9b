//! The top-level crate wires configuration into a ready dispatcher.

use xmrlet::xmrlet_rpc::registry::lookup;
use xmrlet::{Config, Dispatcher};

#[test]
fn dispatcher_from_yaml_config() {
    let config = Config::from_yaml(
        "wallet_rpc_addr: 10.0.0.5:28083\ndigest:\n  username: monero\n  password: pw\n",
    )
    .unwrap();
    let dispatcher = Dispatcher::from_config(&config).unwrap();

    assert_eq!(dispatcher.url(), "http://10.0.0.5:28083/json_rpc");
    assert!(dispatcher.transport().has_credentials());
}

#[test]
fn registry_is_reachable_through_facade() {
    assert!(lookup("get_balance").is_some());
    assert!(!xmrlet::version().is_empty());
}
