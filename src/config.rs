use std::env;

/// Default devnet RPC endpoint, matching the cluster the QUP vault runs on.
pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";

/// Default Solana CLI keypair location.
pub const DEFAULT_KEYPAIR_PATH: &str = "~/.config/solana/id.json";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// URL of the Solana JSON-RPC endpoint
    pub rpc_url: String,

    /// Path to the signing keypair file
    pub keypair_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEVNET_RPC_URL.to_string(),
            keypair_path: DEFAULT_KEYPAIR_PATH.to_string(),
        }
    }
}

impl AppConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            rpc_url: env::var("SOLANA_RPC_URL").unwrap_or_else(|_| DEVNET_RPC_URL.to_string()),
            keypair_path: env::var("ANCHOR_WALLET")
                .unwrap_or_else(|_| DEFAULT_KEYPAIR_PATH.to_string()),
        }
    }
}
