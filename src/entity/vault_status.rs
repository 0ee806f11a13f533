use serde::{Deserialize, Serialize};

use crate::entity::StakePosition;

/// Combined wallet and vault health, as shown by the `status` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultStatus {
    pub wallet_address: String,
    pub sol_balance: f64,
    pub token_balance: f64,
    pub vault_address: String,
    pub vault_active: bool,
    pub stake: Option<StakePosition>,
}
