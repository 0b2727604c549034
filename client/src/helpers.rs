use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;

use crate::constants::{FAUCET_CONFIG_SEED, USER_CLAIM_SEED};

pub fn faucet_config_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[FAUCET_CONFIG_SEED], program_id)
}

/// Seeds are `"user_claim"` followed by the raw user key, no separator.
pub fn user_claim_address(program_id: &Pubkey, user: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[USER_CLAIM_SEED, user.as_ref()], program_id)
}

pub fn user_token_address(user: &Pubkey, token_mint: &Pubkey) -> Pubkey {
    get_associated_token_address(user, token_mint)
}

pub fn short_signature(signature: &str, len: usize) -> String {
    let preview: String = signature.chars().take(len).collect();
    format!("{preview}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program_id() -> Pubkey {
        Pubkey::new_from_array([42; 32])
    }

    #[test]
    fn test_faucet_config_address_is_deterministic() {
        let first = faucet_config_address(&program_id());
        let second = faucet_config_address(&program_id());
        assert_eq!(first, second);

        let (address, bump) = first;
        let recreated =
            Pubkey::create_program_address(&[b"faucet_config", &[bump]], &program_id()).unwrap();
        assert_eq!(address, recreated);
    }

    #[test]
    fn test_user_claim_address_concatenates_seeds() {
        let user = Pubkey::new_from_array([5; 32]);
        let (address, bump) = user_claim_address(&program_id(), &user);
        let recreated = Pubkey::create_program_address(
            &[b"user_claim", user.as_ref(), &[bump]],
            &program_id(),
        )
        .unwrap();
        assert_eq!(address, recreated);
        assert_ne!(address, user_claim_address(&program_id(), &Pubkey::new_from_array([6; 32])).0);
    }

    #[test]
    fn test_addresses_depend_on_program() {
        let other = Pubkey::new_from_array([43; 32]);
        assert_ne!(faucet_config_address(&program_id()).0, faucet_config_address(&other).0);
    }

    #[test]
    fn test_short_signature() {
        assert_eq!(short_signature("5VERYlongSignature", 8), "5VERYlon...");
        assert_eq!(short_signature("abc", 8), "abc...");
    }
}
