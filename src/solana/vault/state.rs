use anyhow::{anyhow, Result};

use crate::entity::StakePosition;
use crate::solana::tokens::registry::QUPDEV_DECIMALS;
use crate::solana::utils::token_amount_to_ui;

// User stake account layout:
// [8 discriminator][8 amount u64 LE][8 rewards u64 LE][4 start_time u32 LE]
pub const USER_STAKE_ACCOUNT_LEN: usize = 28;
const AMOUNT_OFFSET: usize = 8;
const REWARDS_OFFSET: usize = 16;
const START_TIME_OFFSET: usize = 24;

/// Decode a user stake account into a position with ui amounts.
pub fn decode_user_stake(data: &[u8]) -> Result<StakePosition> {
    if data.len() < USER_STAKE_ACCOUNT_LEN {
        return Err(anyhow!("Stake account data too short: {} bytes", data.len()));
    }

    let amount = u64::from_le_bytes(data[AMOUNT_OFFSET..AMOUNT_OFFSET + 8].try_into()?);
    let rewards = u64::from_le_bytes(data[REWARDS_OFFSET..REWARDS_OFFSET + 8].try_into()?);
    let start_time = u32::from_le_bytes(data[START_TIME_OFFSET..START_TIME_OFFSET + 4].try_into()?);

    Ok(StakePosition {
        staked_amount: token_amount_to_ui(amount, QUPDEV_DECIMALS),
        pending_rewards: token_amount_to_ui(rewards, QUPDEV_DECIMALS),
        start_time,
    })
}
