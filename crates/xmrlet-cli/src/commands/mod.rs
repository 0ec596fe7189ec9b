//! CLI subcommand implementations.

use xmrlet_core::config::Config;
use xmrlet_rpc::Dispatcher;

pub mod balance;
pub mod call;
pub mod height;
pub mod methods;
pub mod send_transfer;
pub mod transfer;

/// Atomic units per XMR.
const PICONERO_PER_XMR: u64 = 1_000_000_000_000;

/// Build a dispatcher for the wallet named in `config`.
pub(crate) fn connect(config: &Config) -> Result<Dispatcher, Box<dyn std::error::Error>> {
    Ok(Dispatcher::from_config(config)?)
}

/// Render an atomic amount as XMR with all twelve decimals.
pub(crate) fn format_xmr(atomic: u64) -> String {
    format!(
        "{}.{:012}",
        atomic / PICONERO_PER_XMR,
        atomic % PICONERO_PER_XMR
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_xmr_keeps_precision() {
        assert_eq!(format_xmr(0), "0.000000000000");
        assert_eq!(format_xmr(1), "0.000000000001");
        assert_eq!(format_xmr(1_500_000_000_000), "1.500000000000");
    }
}
