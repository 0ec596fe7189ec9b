//! `xmrlet send-transfer`: transfer, sign and submit as one plan.

use xmrlet_core::config::Config;
use xmrlet_rpc::methods::TransferParams;
use xmrlet_rpc::plans;
use xmrlet_rpc::types::Destination;

use super::{connect, format_xmr};

pub async fn run(
    config: &Config,
    to: String,
    amount: u64,
    account: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    if amount == 0 {
        return Err("amount must be greater than zero".into());
    }

    let dispatcher = connect(config)?;
    let mut params = TransferParams::new(vec![Destination::new(to.clone(), amount)]);
    params.account_index = account;

    println!("Sending {} XMR to {to} (transfer, sign, submit)", format_xmr(amount));
    let submitted = plans::transfer_sign_submit()
        .run(&dispatcher, &params)
        .await?;

    for hash in &submitted.tx_hash_list {
        println!("Submitted: {hash}");
    }
    Ok(())
}
