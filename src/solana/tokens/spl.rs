use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::error;
use solana_account_decoder::parse_token::UiTokenAccount;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_request::TokenAccountsFilter;
use solana_client::rpc_response::RpcKeyedAccount;
use solana_sdk::pubkey::Pubkey;

use crate::entity::TokenBalance;
use crate::solana::tokens::registry::get_token_info;
use crate::solana::wallet::parse_pubkey;

/// Mint and human-readable amount of one parsed token account.
#[derive(Debug, Clone)]
pub struct ParsedTokenAccount {
    pub mint: String,
    pub ui_amount: Option<f64>,
}

impl From<UiTokenAccount> for ParsedTokenAccount {
    fn from(account: UiTokenAccount) -> Self {
        Self {
            mint: account.mint,
            ui_amount: account.token_amount.ui_amount,
        }
    }
}

/// Source of a wallet's parsed token accounts.
///
/// Implemented for the RPC client; tests substitute canned sources.
#[async_trait]
pub trait TokenAccountSource: Send + Sync {
    async fn parsed_token_accounts(&self, owner: &Pubkey) -> Result<Vec<ParsedTokenAccount>>;
}

#[async_trait]
impl TokenAccountSource for RpcClient {
    async fn parsed_token_accounts(&self, owner: &Pubkey) -> Result<Vec<ParsedTokenAccount>> {
        // 1) The list of token accounts under the SPL token program
        let keyed_accounts: Vec<RpcKeyedAccount> = self
            .get_token_accounts_by_owner(owner, TokenAccountsFilter::ProgramId(spl_token::ID))
            .await
            .map_err(|e| anyhow!("Failed to get token accounts: {}", e))?;

        // 2) Each one re-read in parsed form to expose mint and ui amount
        let mut accounts = Vec::new();
        for keyed_account in keyed_accounts {
            let token_account_pubkey = parse_pubkey(&keyed_account.pubkey)?;

            if let Some(token_account) = self
                .get_token_account(&token_account_pubkey)
                .await
                .map_err(|e| anyhow!("Failed to get token account: {}", e))?
            {
                accounts.push(token_account.into());
            }
        }

        Ok(accounts)
    }
}

/// Get all token balances with registry metadata
pub async fn get_token_balances<S>(source: &S, address: &str) -> Result<Vec<TokenBalance>>
where
    S: TokenAccountSource + ?Sized,
{
    let pubkey = parse_pubkey(address)?;

    let mut balances: Vec<TokenBalance> = Vec::new();
    for account in source.parsed_token_accounts(&pubkey).await? {
        let token = get_token_info(&account.mint);

        balances.push(TokenBalance {
            symbol: token.symbol,
            amount: account.ui_amount.unwrap_or(0.0),
            mint_address: account.mint,
        });
    }

    Ok(balances)
}

/// Get the balance of a single mint, masking every failure as zero.
///
/// Query errors are logged and swallowed; a wallet with no matching
/// token account reads as an empty balance.
pub async fn get_mint_balance<S>(source: &S, address: &str, mint: &str) -> f64
where
    S: TokenAccountSource + ?Sized,
{
    match try_get_mint_balance(source, address, mint).await {
        Ok(amount) => amount,
        Err(e) => {
            error!("Error fetching token balance for mint {}: {}", mint, e);
            0.0
        }
    }
}

async fn try_get_mint_balance<S>(source: &S, address: &str, mint: &str) -> Result<f64>
where
    S: TokenAccountSource + ?Sized,
{
    let pubkey = parse_pubkey(address)?;
    let accounts = source.parsed_token_accounts(&pubkey).await?;

    Ok(select_mint_amount(&accounts, mint))
}

/// Pick the human-readable amount for one mint out of a wallet's accounts.
fn select_mint_amount(accounts: &[ParsedTokenAccount], mint: &str) -> f64 {
    accounts
        .iter()
        .find(|account| account.mint == mint)
        .and_then(|account| account.ui_amount)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solana::tokens::registry::QUPDEV_MINT;

    // Any well-formed address works for the mock sources.
    const OWNER: &str = "8bjKA2mkXMdkUHC6m8TfyQcksTDLKeP61XmFFcVViYef";

    struct CannedSource(Vec<ParsedTokenAccount>);

    #[async_trait]
    impl TokenAccountSource for CannedSource {
        async fn parsed_token_accounts(&self, _owner: &Pubkey) -> Result<Vec<ParsedTokenAccount>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl TokenAccountSource for FailingSource {
        async fn parsed_token_accounts(&self, _owner: &Pubkey) -> Result<Vec<ParsedTokenAccount>> {
            Err(anyhow!("connection refused"))
        }
    }

    #[tokio::test]
    async fn empty_wallet_reads_as_zero() {
        let source = CannedSource(Vec::new());
        assert_eq!(get_mint_balance(&source, OWNER, QUPDEV_MINT).await, 0.0);
    }

    #[tokio::test]
    async fn matching_account_yields_its_ui_amount() {
        let source = CannedSource(vec![ParsedTokenAccount {
            mint: QUPDEV_MINT.to_string(),
            ui_amount: Some(42.5),
        }]);

        assert_eq!(get_mint_balance(&source, OWNER, QUPDEV_MINT).await, 42.5);
    }

    #[tokio::test]
    async fn other_mints_do_not_count() {
        let source = CannedSource(vec![ParsedTokenAccount {
            mint: "So11111111111111111111111111111111111111112".to_string(),
            ui_amount: Some(10.0),
        }]);

        assert_eq!(get_mint_balance(&source, OWNER, QUPDEV_MINT).await, 0.0);
    }

    #[tokio::test]
    async fn query_failure_is_masked_as_zero() {
        assert_eq!(get_mint_balance(&FailingSource, OWNER, QUPDEV_MINT).await, 0.0);
    }

    #[tokio::test]
    async fn missing_ui_amount_reads_as_zero() {
        let source = CannedSource(vec![ParsedTokenAccount {
            mint: QUPDEV_MINT.to_string(),
            ui_amount: None,
        }]);

        assert_eq!(get_mint_balance(&source, OWNER, QUPDEV_MINT).await, 0.0);
    }

    #[tokio::test]
    async fn invalid_owner_address_is_masked_as_zero() {
        let source = CannedSource(Vec::new());
        assert_eq!(
            get_mint_balance(&source, "not-an-address", QUPDEV_MINT).await,
            0.0
        );
    }

    #[tokio::test]
    async fn balances_resolve_symbols_through_the_registry() {
        let source = CannedSource(vec![
            ParsedTokenAccount {
                mint: QUPDEV_MINT.to_string(),
                ui_amount: Some(42.5),
            },
            ParsedTokenAccount {
                mint: "So11111111111111111111111111111111111111112".to_string(),
                ui_amount: Some(1.0),
            },
        ]);

        let balances = get_token_balances(&source, OWNER).await.unwrap();

        assert_eq!(balances.len(), 2);
        assert_eq!(balances[0].symbol, "QUPDEV");
        assert_eq!(balances[0].amount, 42.5);
        assert_eq!(balances[1].symbol, "UNKNOWN");
    }

    #[tokio::test]
    async fn balances_propagate_query_errors() {
        assert!(get_token_balances(&FailingSource, OWNER).await.is_err());
    }
}
