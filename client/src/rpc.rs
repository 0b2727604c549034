use anchor_lang::prelude::*;
use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_client::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

use crate::error::FaucetError;

/// The cluster operations the faucet client needs.
pub trait FaucetRpc {
    /// Raw account data, or `None` when the account does not exist.
    fn account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>>;

    fn latest_blockhash(&self) -> Result<Hash>;

    /// Submits `transaction` and waits for confirmation.
    fn send_and_confirm(&self, transaction: &Transaction) -> Result<Signature>;
}

impl FaucetRpc for RpcClient {
    fn account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>> {
        let response = self
            .get_account_with_commitment(address, CommitmentConfig::confirmed())
            .map_err(map_client_error)?;
        Ok(response.value.map(|account| account.data))
    }

    fn latest_blockhash(&self) -> Result<Hash> {
        self.get_latest_blockhash().map_err(map_client_error)
    }

    fn send_and_confirm(&self, transaction: &Transaction) -> Result<Signature> {
        self.send_and_confirm_transaction(transaction)
            .map_err(map_client_error)
    }
}

pub fn map_client_error(err: ClientError) -> Error {
    match err.kind() {
        ClientErrorKind::Io(_) | ClientErrorKind::Reqwest(_) => {
            msg!("Network failure: {}", err);
            error!(FaucetError::NetworkError)
        }
        _ => rejection(&err.to_string()),
    }
}

pub fn rejection(message: &str) -> Error {
    msg!("Transaction rejected: {}", message);
    Error::from(FaucetError::classify_rejection(message))
}
