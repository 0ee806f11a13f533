use anyhow::{anyhow, Result};
use solana_client::nonblocking::rpc_client::RpcClient;

use crate::solana::utils::lamports_to_sol;
use crate::solana::wallet::parse_pubkey;

/// Get SOL balance
pub async fn get_sol_balance(client: &RpcClient, address: &str) -> Result<f64> {
    let pubkey = parse_pubkey(address)?;

    let balance = client
        .get_balance(&pubkey)
        .await
        .map_err(|e| anyhow!("Failed to get balance: {}", e))?;

    // Convert from lamports to SOL
    Ok(lamports_to_sol(balance))
}
