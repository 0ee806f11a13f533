use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::entity::Token;

// Known token information
pub const QUPDEV_MINT: &str = "8bjKA2mkXMdkUHC6m8TfyQcksTDLKeP61XmFFcVViYef";

// Define token decimals
pub const QUPDEV_DECIMALS: u8 = 9;
pub const UNKNOWN_DECIMALS: u8 = 9;

// Fee constants
pub const ESTIMATED_SOL_FEE: u64 = 5000; // in lamports

lazy_static! {
    static ref TOKEN_REGISTRY: HashMap<&'static str, Token> = {
        let mut registry = HashMap::new();
        registry.insert(
            QUPDEV_MINT,
            Token {
                id: QUPDEV_MINT.to_string(),
                symbol: "QUPDEV".to_string(),
                name: "QUP Development Token".to_string(),
                decimals: QUPDEV_DECIMALS,
                logo_uri: Some("https://drinqup.com/qupdev-logo.png".to_string()),
                network: Some("devnet".to_string()),
            },
        );
        // The mainnet QUP entry is added here once the mint is live
        registry
    };
}

/// Look up display metadata for a mint address.
///
/// Unregistered mints get a fixed placeholder so callers never deal
/// with a missing entry.
pub fn get_token_info(mint_address: &str) -> Token {
    TOKEN_REGISTRY
        .get(mint_address)
        .cloned()
        .unwrap_or_else(|| Token {
            id: mint_address.to_string(),
            symbol: "UNKNOWN".to_string(),
            name: "Unknown Token".to_string(),
            decimals: UNKNOWN_DECIMALS,
            logo_uri: None,
            network: None,
        })
}
