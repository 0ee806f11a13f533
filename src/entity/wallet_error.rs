#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("Solana client error: {0}")]
    SolanaClient(String),

    #[error("Wallet keypair not found")]
    WalletNotFound,

    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Invalid address")]
    InvalidAddress,

    #[error("Invalid amount")]
    InvalidAmount,

    #[error("No token account for mint {0}")]
    NoTokenAccount(String),

    #[error("No active stake found")]
    StakeNotFound,
}
