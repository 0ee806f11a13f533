// Constants for conversion
pub const LAMPORTS_PER_SOL: f64 = 1_000_000_000.0;

/// Convert lamports to SOL
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL
}

/// Convert amount with decimals to token units
pub fn convert_to_token_amount(amount: f64, decimals: u8) -> u64 {
    (amount * 10_f64.powi(decimals as i32)) as u64
}

/// Convert token units back to a human-readable amount
pub fn token_amount_to_ui(amount: u64, decimals: u8) -> f64 {
    amount as f64 / 10_f64.powi(decimals as i32)
}

// Shorten address for display
pub fn shorten_address(address: &str) -> String {
    if address.len() <= 16 {
        return address.to_string();
    }

    let start = &address[..8];
    let end = &address[address.len() - 8..];

    format!("{}...{}", start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lamports_round_trip() {
        assert_eq!(lamports_to_sol(1_500_000_000), 1.5);
        assert_eq!(lamports_to_sol(0), 0.0);
    }

    #[test]
    fn token_amount_conversions() {
        assert_eq!(convert_to_token_amount(42.5, 9), 42_500_000_000);
        assert_eq!(token_amount_to_ui(42_500_000_000, 9), 42.5);
        assert_eq!(convert_to_token_amount(1.0, 6), 1_000_000);
    }

    #[test]
    fn shorten_address_keeps_ends() {
        let address = "8bjKA2mkXMdkUHC6m8TfyQcksTDLKeP61XmFFcVViYef";
        assert_eq!(shorten_address(address), "8bjKA2mk...FcVViYef");
        assert_eq!(shorten_address("short"), "short");
    }
}
