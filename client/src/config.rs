use std::str::FromStr;

use anchor_lang::prelude::*;

use crate::constants::{DEFAULT_RPC_URL, PROGRAM_ID_VAR, RPC_URL_VAR, TOKEN_MINT_VAR};
use crate::error::FaucetError;

/// Deployment identifiers the client cannot run without.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaucetEnv {
    pub program_id: Pubkey,
    pub token_mint: Pubkey,
    pub rpc_url: String,
}

impl FaucetEnv {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let program_id = required_pubkey(&lookup, PROGRAM_ID_VAR)?;
        let token_mint = required_pubkey(&lookup, TOKEN_MINT_VAR)?;
        let rpc_url = lookup(RPC_URL_VAR)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_RPC_URL.to_string());

        Ok(Self {
            program_id,
            token_mint,
            rpc_url,
        })
    }
}

fn required_pubkey<F>(lookup: &F, key: &str) -> Result<Pubkey>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            msg!("{} is not set", key);
            error!(FaucetError::MissingConfiguration)
        })?;

    Pubkey::from_str(&raw).map_err(|_| {
        msg!("{} is not a valid address: {}", key, raw);
        error!(FaucetError::InvalidConfiguration)
    })
}
