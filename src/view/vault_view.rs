use crate::entity::VaultStatus;
use crate::solana::tokens::registry::QUPDEV_MINT;
use crate::solana::vault::RewardEstimate;
use anyhow::Result;
use async_trait::async_trait;
use chrono;

#[async_trait]
pub trait VaultView: Send + Sync {
    async fn display_status(&self, status: VaultStatus) -> Result<()>;
    async fn display_plan(
        &self,
        amount: f64,
        duration_days: u32,
        apy_percent: f64,
        estimate: RewardEstimate,
    ) -> Result<()>;
    async fn display_transaction(&self, action: &str, signature: String) -> Result<()>;
    async fn display_no_stake(&self) -> Result<()>;
    async fn display_no_token_account(&self, mint: String) -> Result<()>;
    async fn display_error(&self, error_message: String) -> Result<()>;
}

pub struct TerminalVaultView;

impl TerminalVaultView {
    pub fn new() -> Self {
        Self
    }

    fn explorer_url(signature: &str) -> String {
        format!(
            "https://explorer.solana.com/tx/{}?cluster=devnet",
            signature
        )
    }
}

impl Default for TerminalVaultView {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VaultView for TerminalVaultView {
    async fn display_status(&self, status: VaultStatus) -> Result<()> {
        println!("QUP Vault Status");
        println!("================");
        println!("Wallet: {}", status.wallet_address);
        println!("SOL Balance: {:.6} SOL", status.sol_balance);
        println!("QUPDEV Balance: {} QUPDEV", status.token_balance);

        if status.token_balance == 0.0 {
            println!("No QUPDEV tokens found. Request test tokens from the team!");
        }

        if status.vault_active {
            println!("Vault: active and ready for staking");
            println!("  Address: {}", status.vault_address);
        } else {
            println!("Vault: not found on this cluster");
        }

        match &status.stake {
            Some(stake) => {
                println!("Active stake:");
                println!("  Staked: {:.2} QUP", stake.staked_amount);
                println!("  Pending rewards: {:.4} QUP", stake.pending_rewards);
                println!("  Time staked: {} days", stake.days_staked());
            }
            None => {
                println!("No active stake found. Ready to start earning?");
            }
        }

        println!();
        println!("Updated: {} UTC", chrono::Utc::now().format("%H:%M:%S"));

        Ok(())
    }

    async fn display_plan(
        &self,
        amount: f64,
        duration_days: u32,
        apy_percent: f64,
        estimate: RewardEstimate,
    ) -> Result<()> {
        println!("Staking Plan");
        println!("Amount: {} QUPDEV", amount);
        println!("Duration: {} days at {}% APY", duration_days, apy_percent);
        println!("Daily rewards: {:.4} QUP", estimate.daily);
        println!(
            "Total after {} days: {:.2} QUP",
            duration_days, estimate.total_return
        );

        Ok(())
    }

    async fn display_transaction(&self, action: &str, signature: String) -> Result<()> {
        println!("{} successful!", action);
        println!("Transaction: {}", signature);
        println!("  {}", Self::explorer_url(&signature));

        Ok(())
    }

    async fn display_no_stake(&self) -> Result<()> {
        println!("No active stake found for this wallet.");

        Ok(())
    }

    async fn display_no_token_account(&self, mint: String) -> Result<()> {
        println!("No token account found for mint {}.", mint);
        if mint == QUPDEV_MINT {
            println!("Request test tokens from the team to get started.");
        }

        Ok(())
    }

    async fn display_error(&self, error_message: String) -> Result<()> {
        eprintln!("Error: {}", error_message);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explorer_links_point_at_devnet() {
        let url = TerminalVaultView::explorer_url("sig123");
        assert_eq!(
            url,
            "https://explorer.solana.com/tx/sig123?cluster=devnet"
        );
    }
}
