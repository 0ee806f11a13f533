use crate::entity::{Token, TokenBalance};
use crate::solana::tokens::registry::{get_token_info, QUPDEV_MINT};
use crate::solana::utils::shorten_address;
use anyhow::Result;
use async_trait::async_trait;
use chrono;

#[async_trait]
pub trait BalanceView: Send + Sync {
    async fn display_balances(
        &self,
        address: String,
        sol_balance: f64,
        featured_balance: f64,
        token_balances: Vec<TokenBalance>,
    ) -> Result<()>;

    async fn display_error(&self, error_message: String) -> Result<()>;
}

pub struct TerminalBalanceView;

impl TerminalBalanceView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalBalanceView {
    fn default() -> Self {
        Self::new()
    }
}

/// Render one token with its registry metadata: logo line when the
/// registry has one, then amount and symbol, then the full name.
pub fn format_token_display(balance: f64, token: &Token) -> String {
    let mut lines = Vec::new();

    if let Some(logo_uri) = &token.logo_uri {
        lines.push(format!("[logo] {}", logo_uri));
    }

    lines.push(format!("{} {}", balance, token.symbol));

    match &token.network {
        Some(network) => lines.push(format!("{} ({})", token.name, network)),
        None => lines.push(token.name.clone()),
    }

    lines.join("\n")
}

// Non-empty holdings as an indented list; empty when nothing is held.
fn format_holdings(token_balances: &[TokenBalance]) -> String {
    let mut text = String::new();
    for token in token_balances {
        if token.amount > 0.0 {
            text.push_str(&format!("  {}: {}\n", token.symbol, token.amount));
        }
    }

    if text.is_empty() {
        return text;
    }

    format!("Token Balances\n{}", text)
}

#[async_trait]
impl BalanceView for TerminalBalanceView {
    async fn display_balances(
        &self,
        address: String,
        sol_balance: f64,
        featured_balance: f64,
        token_balances: Vec<TokenBalance>,
    ) -> Result<()> {
        let token = get_token_info(QUPDEV_MINT);

        println!("Wallet {}", shorten_address(&address));
        println!("{}", address);
        println!();
        println!("Balance: {:.6} SOL", sol_balance);
        println!();
        println!("{}", format_token_display(featured_balance, &token));

        let holdings = format_holdings(&token_balances);
        if !holdings.is_empty() {
            println!();
            println!("{}", holdings);
        }

        println!("Updated: {} UTC", chrono::Utc::now().format("%H:%M:%S"));

        Ok(())
    }

    async fn display_error(&self, error_message: String) -> Result<()> {
        eprintln!("Error: {}", error_message);

        Ok(())
    }
}
