use crate::interactor::balance_interactor::BalanceInteractor;
use crate::solana::tokens::registry::QUPDEV_MINT;
use crate::view::balance_view::BalanceView;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait BalancePresenter: Send + Sync {
    async fn show_balances(&self, address: &str) -> Result<()>;
}

pub struct BalancePresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> BalancePresenterImpl<I, V>
where
    I: BalanceInteractor,
    V: BalanceView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> BalancePresenter for BalancePresenterImpl<I, V>
where
    I: BalanceInteractor + Send + Sync,
    V: BalanceView + Send + Sync,
{
    async fn show_balances(&self, address: &str) -> Result<()> {
        match self.interactor.get_wallet_balances(address).await {
            Ok((sol_balance, token_balances)) => {
                // The featured QUP display never fails; it reads zero instead
                let featured_balance =
                    self.interactor.get_token_balance(address, QUPDEV_MINT).await;

                self.view
                    .display_balances(
                        address.to_string(),
                        sol_balance,
                        featured_balance,
                        token_balances,
                    )
                    .await?;
            }
            Err(e) => {
                self.view.display_error(e.to_string()).await?;
            }
        }

        Ok(())
    }
}
