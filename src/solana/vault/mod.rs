// Re-export submodules
pub mod config;
pub mod instructions;
pub mod pda;
pub mod rewards;
pub mod state;

// Re-export commonly used items
pub use config::VaultConfig;
pub use pda::{find_user_stake_pda, find_vault_pda};
pub use rewards::{estimate_rewards, RewardEstimate};
pub use state::decode_user_stake;
