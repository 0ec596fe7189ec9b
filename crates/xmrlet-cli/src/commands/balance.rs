//! `xmrlet balance`: show an account's balance.

use xmrlet_core::config::Config;
use xmrlet_rpc::methods::GetBalanceParams;
use xmrlet_rpc::registry::GetBalance;

use super::{connect, format_xmr};

pub async fn run(config: &Config, account: u32) -> Result<(), Box<dyn std::error::Error>> {
    let dispatcher = connect(config)?;
    let params = GetBalanceParams {
        account_index: account,
        ..GetBalanceParams::default()
    };
    let balance = dispatcher.call::<GetBalance>(&params).await?;

    println!("Account:  {account}");
    println!("Balance:  {} XMR", format_xmr(balance.balance));
    println!("Unlocked: {} XMR", format_xmr(balance.unlocked_balance));
    if balance.blocks_to_unlock > 0 {
        println!("Unlocks in {} blocks", balance.blocks_to_unlock);
    }
    for sub in &balance.per_subaddress {
        println!(
            "  #{:<4} {} {} XMR",
            sub.address_index,
            sub.address,
            format_xmr(sub.balance)
        );
    }
    Ok(())
}
