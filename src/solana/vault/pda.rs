use solana_sdk::pubkey::Pubkey;

pub const USER_STAKE_SEED: &[u8] = b"user_stake";
pub const VAULT_SEED: &[u8] = b"vault";

/// Derive the per-wallet stake account for a vault.
pub fn find_user_stake_pda(program_id: &Pubkey, wallet: &Pubkey, vault: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[USER_STAKE_SEED, wallet.as_ref(), vault.as_ref()],
        program_id,
    )
}

/// Derive the vault account for an LP mint. Operator tooling uses this
/// when pointing the config at a fresh deployment.
pub fn find_vault_pda(program_id: &Pubkey, lp_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, lp_mint.as_ref()], program_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solana::vault::config::{VAULT_PDA, VAULT_PROGRAM_ID};
    use crate::solana::wallet::parse_pubkey;
    use solana_sdk::signature::Keypair;
    use solana_sdk::signer::Signer;

    #[test]
    fn user_stake_pda_is_deterministic() {
        let program_id = parse_pubkey(VAULT_PROGRAM_ID).unwrap();
        let vault = parse_pubkey(VAULT_PDA).unwrap();
        let wallet = Keypair::new().pubkey();

        let first = find_user_stake_pda(&program_id, &wallet, &vault);
        let second = find_user_stake_pda(&program_id, &wallet, &vault);

        assert_eq!(first, second);
    }

    #[test]
    fn distinct_wallets_get_distinct_stake_accounts() {
        let program_id = parse_pubkey(VAULT_PROGRAM_ID).unwrap();
        let vault = parse_pubkey(VAULT_PDA).unwrap();

        let (first, _) = find_user_stake_pda(&program_id, &Keypair::new().pubkey(), &vault);
        let (second, _) = find_user_stake_pda(&program_id, &Keypair::new().pubkey(), &vault);

        assert_ne!(first, second);
    }

    #[test]
    fn vault_pda_depends_on_the_mint() {
        let program_id = parse_pubkey(VAULT_PROGRAM_ID).unwrap();

        let (first, _) = find_vault_pda(&program_id, &Keypair::new().pubkey());
        let (second, _) = find_vault_pda(&program_id, &Keypair::new().pubkey());

        assert_ne!(first, second);
    }
}
