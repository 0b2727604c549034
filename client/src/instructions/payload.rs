use anchor_lang::prelude::*;

use crate::constants::{
    CLAIM_DISCRIMINANT, INITIALIZE_DISCRIMINANT, INITIALIZE_PAYLOAD_LEN, TOKEN_UNIT,
};
use crate::error::FaucetError;

/// Instruction payloads understood by the faucet program.
///
/// Borsh writes the variant index as a single leading byte, so the variant
/// order here is the wire discriminant: `InitializeFaucet` = 0, `ClaimTokens` = 1.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaucetInstruction {
    InitializeFaucet {
        tokens_per_claim: u64,
        cooldown_seconds: i64,
    },
    ClaimTokens,
}

impl FaucetInstruction {
    /// Builds the initialize payload from a whole-token amount, scaling it to
    /// the mint's smallest unit.
    pub fn initialize(whole_tokens_per_claim: u64, cooldown_seconds: i64) -> Result<Self> {
        require!(cooldown_seconds >= 0, FaucetError::EncodingError);
        let tokens_per_claim = whole_tokens_per_claim
            .checked_mul(TOKEN_UNIT)
            .ok_or_else(|| error!(FaucetError::EncodingError))?;
        Ok(Self::InitializeFaucet {
            tokens_per_claim,
            cooldown_seconds,
        })
    }

    pub fn discriminant(&self) -> u8 {
        match self {
            Self::InitializeFaucet { .. } => INITIALIZE_DISCRIMINANT,
            Self::ClaimTokens => CLAIM_DISCRIMINANT,
        }
    }

    pub fn encoded_len(&self) -> usize {
        match self {
            Self::InitializeFaucet { .. } => INITIALIZE_PAYLOAD_LEN,
            Self::ClaimTokens => 1,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.encoded_len());
        // Writing into a Vec cannot fail.
        let _ = self.serialize(&mut data);
        data
    }
}

/// Converts a signed amount coming from user input into the unsigned wire type.
pub fn checked_amount(value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| error!(FaucetError::EncodingError))
}
