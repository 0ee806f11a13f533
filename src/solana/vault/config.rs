use std::env;

use crate::solana::tokens::registry::QUPDEV_MINT;

// Devnet deployment of the QUP staking vault
pub const VAULT_PROGRAM_ID: &str = "69GqjmqyXcL593ByVF4YqrFzBxHX5DsVcSRsAk49pPq7";
pub const VAULT_PDA: &str = "FGCLTzWpKHmPLcak8HcqP7j7wz7jjLTWzZ1SwKNFfzuz";
pub const TOKEN_VAULT_PDA: &str = "HCw3qKrvemEwYzAzozqtwBtdapsWe7GfeCKjrUUPNSQf";

/// Staking vault configuration
#[derive(Debug, Clone)]
pub struct VaultConfig {
    /// Vault program id
    pub program_id: String,

    /// Vault state account (PDA)
    pub vault_pda: String,

    /// Token account holding staked funds (PDA)
    pub token_vault_pda: String,

    /// Mint accepted by the vault
    pub mint: String,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            program_id: VAULT_PROGRAM_ID.to_string(),
            vault_pda: VAULT_PDA.to_string(),
            token_vault_pda: TOKEN_VAULT_PDA.to_string(),
            mint: QUPDEV_MINT.to_string(),
        }
    }
}

impl VaultConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            program_id: env::var("VAULT_PROGRAM_ID")
                .unwrap_or_else(|_| VAULT_PROGRAM_ID.to_string()),
            vault_pda: env::var("VAULT_PDA").unwrap_or_else(|_| VAULT_PDA.to_string()),
            token_vault_pda: env::var("TOKEN_VAULT_PDA")
                .unwrap_or_else(|_| TOKEN_VAULT_PDA.to_string()),
            mint: env::var("VAULT_MINT").unwrap_or_else(|_| QUPDEV_MINT.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solana::wallet::parse_pubkey;

    #[test]
    fn default_addresses_are_well_formed() {
        let config = VaultConfig::default();

        assert!(parse_pubkey(&config.program_id).is_ok());
        assert!(parse_pubkey(&config.vault_pda).is_ok());
        assert!(parse_pubkey(&config.token_vault_pda).is_ok());
        assert!(parse_pubkey(&config.mint).is_ok());
    }
}
