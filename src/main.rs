//! QUP Vault CLI - Main executable
//!
//! This is the entry point for the terminal companion to the QUP token:
//! it shows wallet balances with registry metadata, checks the staking
//! vault, and submits stake, unstake and claim transactions.
use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use log::info;
use qup_vault_cli::cli::{Cli, Commands};
use qup_vault_cli::config::AppConfig;
use qup_vault_cli::di::ServiceContainer;
use qup_vault_cli::interactor::balance_interactor::BalanceInteractorImpl;
use qup_vault_cli::interactor::vault_interactor::VaultInteractorImpl;
use qup_vault_cli::presenter::balance_presenter::{BalancePresenter, BalancePresenterImpl};
use qup_vault_cli::presenter::vault_presenter::{VaultPresenter, VaultPresenterImpl};
use qup_vault_cli::solana::create_solana_client;
use qup_vault_cli::solana::wallet::load_keypair;
use qup_vault_cli::view::balance_view::TerminalBalanceView;
use qup_vault_cli::view::vault_view::TerminalVaultView;
use solana_sdk::signer::Signer;
use std::sync::Arc;
use tokio;

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();

    // Environment configuration, overridden by global CLI flags
    let mut config = AppConfig::from_env();
    if let Some(rpc_url) = &cli.rpc_url {
        config.rpc_url = rpc_url.clone();
    }
    if let Some(keypair) = &cli.keypair {
        config.keypair_path = keypair.clone();
    }

    info!(
        "Starting QUP Vault CLI v{} against {}",
        qup_vault_cli::VERSION,
        config.rpc_url
    );

    let solana_client = create_solana_client(&config.rpc_url)?;
    let services = Arc::new(ServiceContainer::new(solana_client));

    match &cli.command {
        Commands::Balance { address } => {
            let address = resolve_address(address.as_deref(), &config)?;
            let interactor = Arc::new(BalanceInteractorImpl::new(services.solana_client()));
            let view = Arc::new(TerminalBalanceView::new());
            let presenter = BalancePresenterImpl::new(interactor, view);
            presenter.show_balances(&address).await?;
        }
        Commands::Status { address } => {
            let address = resolve_address(address.as_deref(), &config)?;
            let presenter = vault_presenter(&services);
            presenter.show_status(&address).await?;
        }
        Commands::Plan { amount, days, apy } => {
            let presenter = vault_presenter(&services);
            presenter.show_plan(*amount, *days, *apy).await?;
        }
        Commands::Stake { amount, days } => {
            let keypair = load_keypair(&config.keypair_path)?;
            let presenter = vault_presenter(&services);
            presenter.stake(&keypair, *amount, *days).await?;
        }
        Commands::Unstake => {
            let keypair = load_keypair(&config.keypair_path)?;
            let presenter = vault_presenter(&services);
            presenter.unstake(&keypair).await?;
        }
        Commands::Claim => {
            let keypair = load_keypair(&config.keypair_path)?;
            let presenter = vault_presenter(&services);
            presenter.claim(&keypair).await?;
        }
    }

    Ok(())
}

/// Wire up the vault command stack from the service container.
fn vault_presenter(
    services: &Arc<ServiceContainer>,
) -> VaultPresenterImpl<VaultInteractorImpl, TerminalVaultView> {
    let interactor = Arc::new(VaultInteractorImpl::new(
        services.solana_client(),
        services.vault_config(),
    ));
    let view = Arc::new(TerminalVaultView::new());
    VaultPresenterImpl::new(interactor, view)
}

/// Use the explicit address when given, otherwise the configured keypair's.
fn resolve_address(address: Option<&str>, config: &AppConfig) -> Result<String> {
    match address {
        Some(address) => Ok(address.to_string()),
        None => Ok(load_keypair(&config.keypair_path)?.pubkey().to_string()),
    }
}
