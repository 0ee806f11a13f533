// Re-export submodules
pub mod native;
pub mod registry;
pub mod spl;
pub mod transaction;

// Re-export commonly used items
pub use native::get_sol_balance;
pub use registry::{get_token_info, QUPDEV_DECIMALS, QUPDEV_MINT};
pub use spl::{get_mint_balance, get_token_balances, ParsedTokenAccount, TokenAccountSource};
