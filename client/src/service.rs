use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use solana_sdk::signature::Signature;

use crate::config::FaucetEnv;
use crate::error::FaucetError;
use crate::helpers::{faucet_config_address, user_claim_address};
use crate::instructions::{claim_tokens, initialize_faucet};
use crate::rpc::FaucetRpc;
use crate::session::WalletSession;
use crate::state::{FaucetConfig, UserClaimRecord};

/// Reads faucet accounts and submits faucet instructions through `R`.
pub struct FaucetService<'a, R: FaucetRpc> {
    rpc: &'a R,
    env: &'a FaucetEnv,
}

impl<'a, R: FaucetRpc> FaucetService<'a, R> {
    pub fn new(rpc: &'a R, env: &'a FaucetEnv) -> Self {
        Self { rpc, env }
    }

    pub fn faucet_config_address(&self) -> (Pubkey, u8) {
        faucet_config_address(&self.env.program_id)
    }

    pub fn fetch_config(&self) -> Result<FaucetConfig> {
        let (address, _) = self.faucet_config_address();
        let data = self
            .rpc
            .account_data(&address)?
            .filter(|data| !data.is_empty())
            .ok_or_else(|| error!(FaucetError::ConfigNotInitialized))?;

        let config = FaucetConfig::decode(&data)?;
        msg!(
            "Faucet config loaded: {} units per claim, {}s cooldown, active: {}",
            config.tokens_per_claim,
            config.cooldown_seconds,
            config.is_active
        );
        Ok(config)
    }

    /// `None` means the user has never claimed.
    pub fn fetch_user_claim(&self, user: &Pubkey) -> Result<Option<UserClaimRecord>> {
        let (address, _) = user_claim_address(&self.env.program_id, user);
        match self.rpc.account_data(&address)? {
            Some(data) if !data.is_empty() => UserClaimRecord::decode(&data).map(Some),
            _ => Ok(None),
        }
    }

    pub fn initialize_faucet(
        &self,
        session: &WalletSession,
        whole_tokens_per_claim: u64,
        cooldown_seconds: i64,
    ) -> Result<Signature> {
        let admin = session.pubkey()?;
        msg!(
            "Initializing faucet: mint {}, {} tokens per claim, {}s cooldown",
            self.env.token_mint,
            whole_tokens_per_claim,
            cooldown_seconds
        );
        let ix = initialize_faucet(
            &self.env.program_id,
            &admin,
            &self.env.token_mint,
            whole_tokens_per_claim,
            cooldown_seconds,
        )?;
        self.submit(session, ix)
    }

    pub fn claim_tokens(&self, session: &WalletSession) -> Result<Signature> {
        let user = session.pubkey()?;
        msg!("Claiming tokens for {}", user);
        let ix = claim_tokens(&self.env.program_id, &user, &self.env.token_mint);
        self.submit(session, ix)
    }

    fn submit(&self, session: &WalletSession, ix: Instruction) -> Result<Signature> {
        let blockhash = self.rpc.latest_blockhash()?;
        let transaction = session.sign(ix, blockhash)?;
        let signature = self.rpc.send_and_confirm(&transaction)?;
        msg!("Transaction confirmed: {}", signature);
        Ok(signature)
    }
}
