use crate::entity::{VaultStatus, WalletError};
use crate::solana;
use crate::solana::tokens::registry::{get_token_info, ESTIMATED_SOL_FEE};
use crate::solana::tokens::transaction::send_transaction;
use crate::solana::utils::convert_to_token_amount;
use crate::solana::vault::instructions::{self, StakeAccounts};
use crate::solana::vault::pda::find_user_stake_pda;
use crate::solana::vault::{decode_user_stake, VaultConfig};
use crate::solana::wallet::parse_pubkey;
use anyhow::Result;
use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use spl_associated_token_account::get_associated_token_address;
use std::sync::Arc;

#[async_trait]
pub trait VaultInteractor: Send + Sync {
    async fn get_status(&self, address: &str) -> Result<VaultStatus>;
    async fn stake(&self, keypair: &Keypair, amount: f64, duration_days: u32) -> Result<String>;
    async fn unstake(&self, keypair: &Keypair) -> Result<String>;
    async fn claim(&self, keypair: &Keypair) -> Result<String>;
}

pub struct VaultInteractorImpl {
    solana_client: Arc<RpcClient>,
    config: VaultConfig,
}

// Config addresses resolved into pubkeys once per call
struct VaultAddresses {
    program_id: Pubkey,
    vault: Pubkey,
    token_vault: Pubkey,
    mint: Pubkey,
}

impl VaultInteractorImpl {
    pub fn new(solana_client: Arc<RpcClient>, config: VaultConfig) -> Self {
        Self {
            solana_client,
            config,
        }
    }

    fn addresses(&self) -> Result<VaultAddresses> {
        Ok(VaultAddresses {
            program_id: parse_pubkey(&self.config.program_id)?,
            vault: parse_pubkey(&self.config.vault_pda)?,
            token_vault: parse_pubkey(&self.config.token_vault_pda)?,
            mint: parse_pubkey(&self.config.mint)?,
        })
    }

    fn stake_accounts(&self, addresses: &VaultAddresses, wallet: &Pubkey) -> StakeAccounts {
        let user_token_account = get_associated_token_address(wallet, &addresses.mint);
        let (user_stake, _) = find_user_stake_pda(&addresses.program_id, wallet, &addresses.vault);

        StakeAccounts {
            wallet: *wallet,
            user_token_account,
            token_vault: addresses.token_vault,
            user_stake,
            vault: addresses.vault,
            mint: addresses.mint,
        }
    }

    async fn get_account_data(&self, pubkey: &Pubkey) -> Result<Option<Vec<u8>>> {
        let response = self
            .solana_client
            .get_account_with_commitment(pubkey, CommitmentConfig::confirmed())
            .await
            .map_err(|e| WalletError::SolanaClient(e.to_string()))?;

        Ok(response.value.map(|account| account.data))
    }

    async fn require_active_stake(&self, user_stake: &Pubkey) -> Result<()> {
        match self.get_account_data(user_stake).await? {
            Some(data) if !data.is_empty() => Ok(()),
            _ => Err(WalletError::StakeNotFound.into()),
        }
    }

    async fn check_fee_budget(&self, wallet: &Pubkey) -> Result<()> {
        let lamports = self
            .solana_client
            .get_balance(wallet)
            .await
            .map_err(|e| WalletError::SolanaClient(e.to_string()))?;

        if lamports < ESTIMATED_SOL_FEE {
            return Err(WalletError::InsufficientFunds.into());
        }

        Ok(())
    }
}

#[async_trait]
impl VaultInteractor for VaultInteractorImpl {
    async fn get_status(&self, address: &str) -> Result<VaultStatus> {
        let wallet = parse_pubkey(address)?;
        let addresses = self.addresses()?;

        let sol_balance = solana::get_sol_balance(&self.solana_client, address).await?;

        // Best-effort: a wallet without a token account shows zero
        let token_balance =
            solana::get_mint_balance(self.solana_client.as_ref(), address, &self.config.mint).await;

        let vault_active = self.get_account_data(&addresses.vault).await?.is_some();

        let (user_stake, _) = find_user_stake_pda(&addresses.program_id, &wallet, &addresses.vault);
        let stake = match self.get_account_data(&user_stake).await? {
            Some(data) if !data.is_empty() => Some(decode_user_stake(&data)?),
            _ => None,
        };

        Ok(VaultStatus {
            wallet_address: address.to_string(),
            sol_balance,
            token_balance,
            vault_address: self.config.vault_pda.clone(),
            vault_active,
            stake,
        })
    }

    async fn stake(&self, keypair: &Keypair, amount: f64, duration_days: u32) -> Result<String> {
        if amount <= 0.0 || duration_days == 0 {
            return Err(WalletError::InvalidAmount.into());
        }

        let wallet = keypair.pubkey();
        let addresses = self.addresses()?;
        let accounts = self.stake_accounts(&addresses, &wallet);

        self.check_fee_budget(&wallet).await?;

        // The wallet must hold the tokens it is about to lock up
        let token_balance = self
            .solana_client
            .get_token_account_balance(&accounts.user_token_account)
            .await
            .map_err(|_| WalletError::NoTokenAccount(self.config.mint.clone()))?;

        if token_balance.ui_amount.unwrap_or(0.0) < amount {
            return Err(WalletError::InsufficientFunds.into());
        }

        let decimals = get_token_info(&self.config.mint).decimals;
        let amount_base = convert_to_token_amount(amount, decimals);
        let instruction =
            instructions::stake(&addresses.program_id, &accounts, amount_base, duration_days);

        send_transaction(&self.solana_client, keypair, &[instruction]).await
    }

    async fn unstake(&self, keypair: &Keypair) -> Result<String> {
        let wallet = keypair.pubkey();
        let addresses = self.addresses()?;
        let accounts = self.stake_accounts(&addresses, &wallet);

        self.check_fee_budget(&wallet).await?;
        self.require_active_stake(&accounts.user_stake).await?;

        let instruction = instructions::unstake(&addresses.program_id, &accounts);

        send_transaction(&self.solana_client, keypair, &[instruction]).await
    }

    async fn claim(&self, keypair: &Keypair) -> Result<String> {
        let wallet = keypair.pubkey();
        let addresses = self.addresses()?;
        let accounts = self.stake_accounts(&addresses, &wallet);

        self.check_fee_budget(&wallet).await?;
        self.require_active_stake(&accounts.user_stake).await?;

        let instruction = instructions::claim(&addresses.program_id, &accounts);

        send_transaction(&self.solana_client, keypair, &[instruction]).await
    }
}
