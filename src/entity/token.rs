use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub id: String,               // Token ID (mint address)
    pub symbol: String,           // Token symbol (e.g. "QUPDEV")
    pub name: String,             // Full token name
    pub decimals: u8,             // Number of decimal places
    pub logo_uri: Option<String>, // Token logo URI, if one is published
    pub network: Option<String>,  // Cluster the mint lives on
}
