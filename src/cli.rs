//! CLI argument definitions for qup-vault.
//!
//! Uses `clap` derive macros. Read-only commands take an optional wallet
//! address; transaction commands always sign with the configured keypair.

use clap::{Parser, Subcommand};

/// Terminal companion for the QUP token: wallet balances with registry
/// metadata, plus status and operations for the devnet staking vault.
#[derive(Debug, Parser)]
#[command(name = "qup-vault")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Solana JSON-RPC endpoint. Overrides SOLANA_RPC_URL.
    #[arg(long, value_name = "URL", global = true)]
    pub rpc_url: Option<String>,

    /// Path to a Solana CLI keypair file. Overrides ANCHOR_WALLET.
    #[arg(long, value_name = "PATH", global = true)]
    pub keypair: Option<String>,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show SOL and token balances for a wallet.
    Balance {
        /// Wallet address to inspect. Defaults to the configured keypair.
        address: Option<String>,
    },

    /// Check wallet balances and staking vault health.
    Status {
        /// Wallet address to inspect. Defaults to the configured keypair.
        address: Option<String>,
    },

    /// Estimate staking rewards without touching the chain.
    Plan {
        /// Amount of QUPDEV to stake.
        amount: f64,

        /// Lock-up duration in days.
        #[arg(long)]
        days: u32,

        /// Annual percentage yield of the chosen plan.
        #[arg(long)]
        apy: f64,
    },

    /// Stake QUPDEV tokens into the vault.
    Stake {
        /// Amount of QUPDEV to stake.
        amount: f64,

        /// Lock-up duration in days.
        #[arg(long)]
        days: u32,
    },

    /// Unstake the full position, rewards included.
    Unstake,

    /// Claim accrued rewards, leaving the stake in place.
    Claim,
}
