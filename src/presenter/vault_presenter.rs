use crate::entity::WalletError;
use crate::interactor::vault_interactor::VaultInteractor;
use crate::solana::vault::estimate_rewards;
use crate::view::vault_view::VaultView;
use anyhow::Result;
use async_trait::async_trait;
use solana_sdk::signature::Keypair;
use std::sync::Arc;

#[async_trait]
pub trait VaultPresenter: Send + Sync {
    async fn show_status(&self, address: &str) -> Result<()>;
    async fn show_plan(&self, amount: f64, duration_days: u32, apy_percent: f64) -> Result<()>;
    async fn stake(&self, keypair: &Keypair, amount: f64, duration_days: u32) -> Result<()>;
    async fn unstake(&self, keypair: &Keypair) -> Result<()>;
    async fn claim(&self, keypair: &Keypair) -> Result<()>;
}

pub struct VaultPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> VaultPresenterImpl<I, V>
where
    I: VaultInteractor,
    V: VaultView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

impl<I, V> VaultPresenterImpl<I, V>
where
    I: VaultInteractor + Send + Sync,
    V: VaultView + Send + Sync,
{
    async fn display_failure(&self, e: anyhow::Error) -> Result<()> {
        if let Some(wallet_error) = e.downcast_ref::<WalletError>() {
            match wallet_error {
                WalletError::StakeNotFound => {
                    self.view.display_no_stake().await?;
                }
                WalletError::NoTokenAccount(mint) => {
                    self.view.display_no_token_account(mint.clone()).await?;
                }
                _ => {
                    self.view.display_error(e.to_string()).await?;
                }
            }
        } else {
            self.view.display_error(e.to_string()).await?;
        }

        Ok(())
    }

    async fn display_transaction_result(
        &self,
        action: &str,
        result: Result<String>,
    ) -> Result<()> {
        match result {
            Ok(signature) => self.view.display_transaction(action, signature).await,
            Err(e) => self.display_failure(e).await,
        }
    }
}

#[async_trait]
impl<I, V> VaultPresenter for VaultPresenterImpl<I, V>
where
    I: VaultInteractor + Send + Sync,
    V: VaultView + Send + Sync,
{
    async fn show_status(&self, address: &str) -> Result<()> {
        match self.interactor.get_status(address).await {
            Ok(status) => self.view.display_status(status).await?,
            Err(e) => self.display_failure(e).await?,
        }

        Ok(())
    }

    async fn show_plan(&self, amount: f64, duration_days: u32, apy_percent: f64) -> Result<()> {
        if amount <= 0.0 || duration_days == 0 || apy_percent < 0.0 {
            return self
                .display_failure(WalletError::InvalidAmount.into())
                .await;
        }

        let estimate = estimate_rewards(amount, apy_percent, duration_days);
        self.view
            .display_plan(amount, duration_days, apy_percent, estimate)
            .await
    }

    async fn stake(&self, keypair: &Keypair, amount: f64, duration_days: u32) -> Result<()> {
        let result = self.interactor.stake(keypair, amount, duration_days).await;
        self.display_transaction_result("Stake", result).await
    }

    async fn unstake(&self, keypair: &Keypair) -> Result<()> {
        let result = self.interactor.unstake(keypair).await;
        self.display_transaction_result("Unstake", result).await
    }

    async fn claim(&self, keypair: &Keypair) -> Result<()> {
        let result = self.interactor.claim(keypair).await;
        self.display_transaction_result("Claim", result).await
    }
}
