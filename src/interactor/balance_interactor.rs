use crate::entity::TokenBalance;
use crate::solana;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use std::sync::Arc;

#[async_trait]
pub trait BalanceInteractor: Send + Sync {
    async fn get_wallet_balances(&self, address: &str) -> Result<(f64, Vec<TokenBalance>)>;

    /// Best-effort read of a single mint; failures read as zero.
    async fn get_token_balance(&self, address: &str, mint: &str) -> f64;
}

pub struct BalanceInteractorImpl {
    solana_client: Arc<RpcClient>,
}

impl BalanceInteractorImpl {
    pub fn new(solana_client: Arc<RpcClient>) -> Self {
        Self { solana_client }
    }
}

#[async_trait]
impl BalanceInteractor for BalanceInteractorImpl {
    async fn get_wallet_balances(&self, address: &str) -> Result<(f64, Vec<TokenBalance>)> {
        // Get SOL balance
        let sol_balance = solana::get_sol_balance(&self.solana_client, address).await?;

        // Get token balances
        let token_balances =
            match solana::get_token_balances(self.solana_client.as_ref(), address).await {
                Ok(balances) => balances,
                Err(e) => {
                    return Err(anyhow!("Error fetching token balances: {}", e));
                }
            };

        Ok((sol_balance, token_balances))
    }

    async fn get_token_balance(&self, address: &str, mint: &str) -> f64 {
        solana::get_mint_balance(self.solana_client.as_ref(), address, mint).await
    }
}
