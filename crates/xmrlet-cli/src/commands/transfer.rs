//! `xmrlet transfer`: send XMR from a wallet that can sign.

use xmrlet_core::config::Config;
use xmrlet_rpc::methods::TransferParams;
use xmrlet_rpc::registry::Transfer;
use xmrlet_rpc::types::Destination;

use super::{connect, format_xmr};

/// Run the `transfer` subcommand.
pub async fn run(
    config: &Config,
    to: String,
    amount: u64,
    account: u32,
    priority: u32,
    do_not_relay: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if amount == 0 {
        return Err("amount must be greater than zero".into());
    }

    let dispatcher = connect(config)?;
    let mut params = TransferParams::new(vec![Destination::new(to.clone(), amount)]);
    params.account_index = account;
    params.priority = priority;
    params.do_not_relay = do_not_relay;

    println!("\n=== Transfer Summary ===");
    println!("  To:      {to}");
    println!("  Amount:  {} XMR", format_xmr(amount));
    println!("  Account: {account}");
    println!("  Wallet:  {}", dispatcher.url());
    println!("========================\n");

    let result = dispatcher.call::<Transfer>(&params).await?;

    if !result.unsigned_txset.is_empty() {
        println!("Wallet is view-only; use `xmrlet send-transfer` to sign and submit.");
        return Ok(());
    }
    if do_not_relay {
        println!("Transaction built, not relayed.");
    } else {
        println!("Transaction sent!");
    }
    println!("  Hash: {}", result.tx_hash);
    println!("  Fee:  {} XMR", format_xmr(result.fee));
    if !result.tx_key.is_empty() {
        println!("  Key:  {}", result.tx_key);
    }
    Ok(())
}
