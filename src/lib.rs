pub mod cli;
pub mod config;
pub mod di;
pub mod entity;
pub mod interactor;
pub mod presenter;
pub mod solana;
pub mod view;

// Re-export commonly used items
pub use config::*;
pub use di::*;
pub use entity::*;
pub use solana::*;

/// Crate version, logged at startup and printed by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
