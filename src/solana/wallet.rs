use anyhow::{anyhow, Result};
use solana_sdk::{pubkey::Pubkey, signature::Keypair};
use std::path::Path;
use std::str::FromStr;

use crate::entity::WalletError;

/// Convert base58 string to Solana `Pubkey`.
pub fn parse_pubkey(address: &str) -> Result<Pubkey> {
    Pubkey::from_str(address).map_err(|_| WalletError::InvalidAddress.into())
}

/// Load a signing keypair from a Solana CLI keypair file.
///
/// The file is either the usual JSON byte array written by
/// `solana-keygen`, or a bare base58-encoded 64-byte keypair. A leading
/// `~` is expanded to the user's home directory.
pub fn load_keypair(path: &str) -> Result<Keypair> {
    let expanded = expand_home(path);
    if !Path::new(&expanded).exists() {
        return Err(WalletError::WalletNotFound.into());
    }

    let contents = std::fs::read_to_string(&expanded)
        .map_err(|e| anyhow!("Failed to read keypair file {}: {}", expanded, e))?;
    let trimmed = contents.trim();

    if trimmed.starts_with('[') {
        let keypair_bytes: Vec<u8> = serde_json::from_str(trimmed)
            .map_err(|e| anyhow!("Failed to parse keypair file {}: {}", expanded, e))?;
        keypair_from_bytes(&keypair_bytes)
    } else {
        keypair_from_base58(trimmed)
    }
}

/// Restore Keypair from base58 string (64 bytes).
pub fn keypair_from_base58(keypair_base58: &str) -> Result<Keypair> {
    let keypair_bytes = bs58::decode(keypair_base58)
        .into_vec()
        .map_err(|e| anyhow!("Failed to decode base58 keypair: {}", e))?;

    keypair_from_bytes(&keypair_bytes)
}

/// Serialize Keypair (64 bytes) to base58.
pub fn keypair_to_base58(keypair: &Keypair) -> Result<String> {
    let keypair_bytes = keypair.to_bytes();
    Ok(bs58::encode(keypair_bytes).into_string())
}

fn keypair_from_bytes(keypair_bytes: &[u8]) -> Result<Keypair> {
    if keypair_bytes.len() != 64 {
        return Err(anyhow!("Invalid keypair length: {}", keypair_bytes.len()));
    }

    Keypair::from_bytes(keypair_bytes)
        .map_err(|e| anyhow!("Failed to create keypair from bytes: {}", e))
}

fn expand_home(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Ok(home) = std::env::var("HOME") {
            return format!("{}/{}", home, rest);
        }
    }
    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signer::Signer;
    use std::io::Write;

    #[test]
    fn parse_pubkey_accepts_valid_address() {
        assert!(parse_pubkey("8bjKA2mkXMdkUHC6m8TfyQcksTDLKeP61XmFFcVViYef").is_ok());
    }

    #[test]
    fn parse_pubkey_rejects_garbage() {
        let err = parse_pubkey("not-a-valid-address").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WalletError>(),
            Some(WalletError::InvalidAddress)
        ));
    }

    #[test]
    fn base58_keypair_round_trip() {
        let keypair = Keypair::new();
        let encoded = keypair_to_base58(&keypair).unwrap();
        let restored = keypair_from_base58(&encoded).unwrap();

        assert_eq!(keypair.pubkey(), restored.pubkey());
    }

    #[test]
    fn base58_keypair_rejects_wrong_length() {
        let encoded = bs58::encode([7u8; 32]).into_string();
        assert!(keypair_from_base58(&encoded).is_err());
    }

    #[test]
    fn load_keypair_reads_json_array_file() {
        let keypair = Keypair::new();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let restored = load_keypair(file.path().to_str().unwrap()).unwrap();
        assert_eq!(keypair.pubkey(), restored.pubkey());
    }

    #[test]
    fn load_keypair_reads_base58_file() {
        let keypair = Keypair::new();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let encoded = keypair_to_base58(&keypair).unwrap();
        file.write_all(encoded.as_bytes()).unwrap();

        let restored = load_keypair(file.path().to_str().unwrap()).unwrap();
        assert_eq!(keypair.pubkey(), restored.pubkey());
    }

    #[test]
    fn load_keypair_missing_file_is_wallet_not_found() {
        let err = load_keypair("/nonexistent/id.json").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WalletError>(),
            Some(WalletError::WalletNotFound)
        ));
    }
}
