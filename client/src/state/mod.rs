pub mod faucet_config;
pub mod user_claim_record;

pub use faucet_config::*;
pub use user_claim_record::*;

use anchor_lang::prelude::*;

use crate::error::FaucetError;

/// Decodes a fixed-size record, rejecting any input that is not exactly `len` bytes.
pub(crate) fn decode_exact<T: AnchorDeserialize>(data: &[u8], len: usize) -> Result<T> {
    require!(data.len() == len, FaucetError::MalformedAccount);
    T::try_from_slice(data).map_err(|_| error!(FaucetError::MalformedAccount))
}

pub(crate) fn encode_exact<T: AnchorSerialize>(value: &T, len: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(len);
    // Writing into a Vec cannot fail.
    let _ = value.serialize(&mut data);
    data
}
