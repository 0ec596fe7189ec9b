//! `xmrlet height`: show the wallet's block height.

use xmrlet_core::config::Config;
use xmrlet_rpc::methods::EmptyParams;
use xmrlet_rpc::registry::GetHeight;

use super::connect;

pub async fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let dispatcher = connect(config)?;
    let height = dispatcher.call::<GetHeight>(&EmptyParams {}).await?;
    println!("{}", height.height);
    Ok(())
}
