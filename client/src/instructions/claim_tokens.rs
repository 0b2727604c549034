use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};

use crate::helpers::{faucet_config_address, user_claim_address, user_token_address};
use crate::instructions::FaucetInstruction;

/// Accounts, in program order: user (signer, pays for the claim record),
/// user claim PDA, user token account, faucet config PDA.
pub fn claim_tokens(program_id: &Pubkey, user: &Pubkey, token_mint: &Pubkey) -> Instruction {
    let (user_claim, _) = user_claim_address(program_id, user);
    let (faucet_config, _) = faucet_config_address(program_id);

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*user, true),
            AccountMeta::new(user_claim, false),
            AccountMeta::new(user_token_address(user, token_mint), false),
            AccountMeta::new_readonly(faucet_config, false),
        ],
        data: FaucetInstruction::ClaimTokens.encode(),
    }
}
