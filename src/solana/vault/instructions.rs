use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};
use spl_token::ID as TOKEN_PROGRAM_ID;

// Anchor method discriminators of the deployed vault program
pub const STAKE_DISCRIMINATOR: [u8; 8] = [48, 191, 163, 44, 71, 129, 63, 164];
pub const UNSTAKE_DISCRIMINATOR: [u8; 8] = [90, 95, 107, 42, 205, 124, 50, 225];
pub const CLAIM_DISCRIMINATOR: [u8; 8] = [62, 198, 214, 193, 213, 159, 108, 210];

/// Accounts every vault instruction touches.
#[derive(Debug, Clone)]
pub struct StakeAccounts {
    pub wallet: Pubkey,
    pub user_token_account: Pubkey,
    pub token_vault: Pubkey,
    pub user_stake: Pubkey,
    pub vault: Pubkey,
    pub mint: Pubkey,
}

// Shared prefix of the account list; the program expects this exact order.
fn vault_keys(accounts: &StakeAccounts) -> Vec<AccountMeta> {
    vec![
        AccountMeta::new_readonly(accounts.wallet, true),
        AccountMeta::new(accounts.user_token_account, false),
        AccountMeta::new(accounts.token_vault, false),
        AccountMeta::new(accounts.user_stake, false),
        AccountMeta::new(accounts.vault, false),
        AccountMeta::new_readonly(accounts.mint, false),
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
    ]
}

/// Stake `amount` base units for `duration_days`.
///
/// Instruction data is the discriminator followed by the amount (u64 LE)
/// and the duration in days (u32 LE).
pub fn stake(
    program_id: &Pubkey,
    accounts: &StakeAccounts,
    amount: u64,
    duration_days: u32,
) -> Instruction {
    let mut data = Vec::with_capacity(20);
    data.extend_from_slice(&STAKE_DISCRIMINATOR);
    data.extend_from_slice(&amount.to_le_bytes());
    data.extend_from_slice(&duration_days.to_le_bytes());

    // Stake additionally creates the user stake account
    let mut keys = vault_keys(accounts);
    keys.push(AccountMeta::new_readonly(system_program::ID, false));

    Instruction {
        program_id: *program_id,
        accounts: keys,
        data,
    }
}

/// Withdraw the full position, rewards included.
pub fn unstake(program_id: &Pubkey, accounts: &StakeAccounts) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vault_keys(accounts),
        data: UNSTAKE_DISCRIMINATOR.to_vec(),
    }
}

/// Claim accrued rewards without touching the stake.
pub fn claim(program_id: &Pubkey, accounts: &StakeAccounts) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vault_keys(accounts),
        data: CLAIM_DISCRIMINATOR.to_vec(),
    }
}
