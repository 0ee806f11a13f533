// Re-export everything from submodules
pub mod client;
pub mod tokens;
pub mod utils;
pub mod vault;
pub mod wallet;

// Re-export commonly used items
pub use client::create_solana_client;
pub use tokens::native::get_sol_balance;
pub use tokens::registry::{get_token_info, QUPDEV_MINT};
pub use tokens::spl::{get_mint_balance, get_token_balances};
pub use wallet::{load_keypair, parse_pubkey};
