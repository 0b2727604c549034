use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use solana_sdk::hash::Hash;
use solana_sdk::signer::Signer;
use solana_sdk::transaction::Transaction;

use crate::error::FaucetError;

/// The connected wallet, handed explicitly to every call that needs to sign.
#[derive(Default)]
pub struct WalletSession {
    signer: Option<Box<dyn Signer>>,
}

impl WalletSession {
    pub fn disconnected() -> Self {
        Self { signer: None }
    }

    pub fn connected<S: Signer + 'static>(signer: S) -> Self {
        Self {
            signer: Some(Box::new(signer)),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.signer.is_some()
    }

    pub fn pubkey(&self) -> Result<Pubkey> {
        self.signer
            .as_ref()
            .map(|signer| signer.pubkey())
            .ok_or_else(|| error!(FaucetError::WalletNotConnected))
    }

    /// Wraps `instruction` in a transaction paid for and signed by the wallet.
    pub fn sign(&self, instruction: Instruction, recent_blockhash: Hash) -> Result<Transaction> {
        let signer = self
            .signer
            .as_deref()
            .ok_or_else(|| error!(FaucetError::WalletNotConnected))?;

        let mut transaction = Transaction::new_with_payer(&[instruction], Some(&signer.pubkey()));
        transaction
            .try_sign(&[signer], recent_blockhash)
            .map_err(|err| {
                msg!("Wallet refused to sign: {}", err);
                error!(FaucetError::TransactionRejected)
            })?;
        Ok(transaction)
    }
}

impl std::fmt::Debug for WalletSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.pubkey() {
            Ok(pubkey) => write!(f, "WalletSession({pubkey})"),
            Err(_) => write!(f, "WalletSession(disconnected)"),
        }
    }
}
