use std::sync::Arc;

use solana_client::nonblocking::rpc_client::RpcClient;

use crate::solana::vault::VaultConfig;

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    solana_client: Arc<RpcClient>,
    vault_config: VaultConfig,
}

impl ServiceContainer {
    /// Create a new service container with essential dependencies
    pub fn new(solana_client: Arc<RpcClient>) -> Self {
        let vault_config = VaultConfig::from_env();

        Self {
            solana_client,
            vault_config,
        }
    }

    // Accessor methods

    pub fn solana_client(&self) -> Arc<RpcClient> {
        self.solana_client.clone()
    }

    pub fn vault_config(&self) -> VaultConfig {
        self.vault_config.clone()
    }
}
