//! # xmrlet CLI
//!
//! Entry point for the `xmrlet` binary.
//!
//! Subcommands:
//! - `xmrlet methods`: List the wallet RPC methods the client knows
//! - `xmrlet balance`: Show an account's balance
//! - `xmrlet height`: Show the wallet's block height
//! - `xmrlet call`: Call any registered method with JSON params
//! - `xmrlet transfer`: Send XMR from a hot wallet
//! - `xmrlet send-transfer`: Transfer, sign and submit in one go

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use xmrlet_core::config::Config;

mod commands;

/// xmrlet: typed client for monero-wallet-rpc.
#[derive(Parser)]
#[command(name = "xmrlet", version, about)]
struct Cli {
    /// Path to xmrlet.yaml (default: built-in defaults plus XMRLET_* env vars).
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every registered wallet RPC method with its param/result shapes.
    Methods,

    /// Show the balance of an account.
    Balance {
        /// Account index (default: 0).
        #[arg(long, default_value_t = 0)]
        account: u32,
    },

    /// Show the wallet's current block height.
    Height,

    /// Call a wallet RPC method by name.
    Call {
        /// Wire method name, e.g. `get_accounts`.
        method: String,

        /// Params as a JSON object (default: `{}`).
        #[arg(long)]
        params: Option<String>,
    },

    /// Send XMR to one address.
    Transfer {
        /// Recipient address.
        #[arg(long)]
        to: String,

        /// Amount in atomic units (1 XMR = 10^12).
        #[arg(long)]
        amount: u64,

        /// Account to spend from (default: 0).
        #[arg(long, default_value_t = 0)]
        account: u32,

        /// Fee priority, 0 (default) to 3.
        #[arg(long, default_value_t = 0)]
        priority: u32,

        /// Build the transaction but do not broadcast it.
        #[arg(long)]
        do_not_relay: bool,
    },

    /// Transfer from a view-only wallet, sign the unsigned set, and submit it.
    SendTransfer {
        /// Recipient address.
        #[arg(long)]
        to: String,

        /// Amount in atomic units (1 XMR = 10^12).
        #[arg(long)]
        amount: u64,

        /// Account to spend from (default: 0).
        #[arg(long, default_value_t = 0)]
        account: u32,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = xmrlet_core::logging::init(&config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    tracing::debug!(wallet = %config.wallet_rpc_url(), "configuration loaded");

    let result = match cli.command {
        Commands::Methods => commands::methods::run(),
        Commands::Balance { account } => commands::balance::run(&config, account).await,
        Commands::Height => commands::height::run(&config).await,
        Commands::Call { method, params } => {
            commands::call::run(&config, &method, params.as_deref()).await
        }
        Commands::Transfer {
            to,
            amount,
            account,
            priority,
            do_not_relay,
        } => commands::transfer::run(&config, to, amount, account, priority, do_not_relay).await,
        Commands::SendTransfer {
            to,
            amount,
            account,
        } => commands::send_transfer::run(&config, to, amount, account).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_call_with_params() {
        let cli = Cli::try_parse_from([
            "xmrlet",
            "call",
            "get_accounts",
            "--params",
            r#"{"tag":"savings"}"#,
        ])
        .unwrap();
        match cli.command {
            Commands::Call { method, params } => {
                assert_eq!(method, "get_accounts");
                assert_eq!(params.as_deref(), Some(r#"{"tag":"savings"}"#));
            }
            _ => panic!("expected call"),
        }
        assert!(cli.config.is_none());
    }

    #[test]
    fn config_flag_is_global() {
        let cli =
            Cli::try_parse_from(["xmrlet", "height", "--config", "/etc/xmrlet.yaml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/etc/xmrlet.yaml")));
        assert!(matches!(cli.command, Commands::Height));
    }

    #[test]
    fn transfer_defaults() {
        let cli = Cli::try_parse_from(["xmrlet", "transfer", "--to", "44AFF", "--amount", "5"])
            .unwrap();
        match cli.command {
            Commands::Transfer {
                to,
                amount,
                account,
                priority,
                do_not_relay,
            } => {
                assert_eq!(to, "44AFF");
                assert_eq!(amount, 5);
                assert_eq!(account, 0);
                assert_eq!(priority, 0);
                assert!(!do_not_relay);
            }
            _ => panic!("expected transfer"),
        }
    }

    #[test]
    fn transfer_requires_amount() {
        assert!(Cli::try_parse_from(["xmrlet", "transfer", "--to", "44AFF"]).is_err());
        assert!(
            Cli::try_parse_from(["xmrlet", "transfer", "--to", "44AFF", "--amount", "-1"])
                .is_err()
        );
    }

    #[test]
    fn send_transfer_subcommand_name() {
        let cli = Cli::try_parse_from([
            "xmrlet",
            "send-transfer",
            "--to",
            "44AFF",
            "--amount",
            "1000",
            "--account",
            "2",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::SendTransfer { account: 2, amount: 1000, .. }
        ));
    }
}
