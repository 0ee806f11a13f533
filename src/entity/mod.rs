mod stake_position;
mod token;
mod token_balance;
mod vault_status;
mod wallet_error;

pub use stake_position::StakePosition;
pub use token::Token;
pub use token_balance::TokenBalance;
pub use vault_status::VaultStatus;
pub use wallet_error::WalletError;
