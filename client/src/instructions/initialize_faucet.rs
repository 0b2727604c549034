use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::system_program;

use crate::helpers::faucet_config_address;
use crate::instructions::FaucetInstruction;

/// Accounts, in program order: admin (signer, pays for the config account),
/// faucet config PDA, token mint, system program.
pub fn initialize_faucet(
    program_id: &Pubkey,
    admin: &Pubkey,
    token_mint: &Pubkey,
    whole_tokens_per_claim: u64,
    cooldown_seconds: i64,
) -> Result<Instruction> {
    let payload = FaucetInstruction::initialize(whole_tokens_per_claim, cooldown_seconds)?;
    let (faucet_config, _) = faucet_config_address(program_id);

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*admin, true),
            AccountMeta::new(faucet_config, false),
            AccountMeta::new_readonly(*token_mint, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: payload.encode(),
    })
}
