use anchor_lang::error::Error;
use anchor_lang::prelude::*;

#[error_code]
pub enum FaucetError {
    #[msg("Wallet not connected")]
    WalletNotConnected,
    #[msg("Faucet not initialized yet")]
    ConfigNotInitialized,
    #[msg("Malformed account data")]
    MalformedAccount,
    #[msg("Instruction argument out of range")]
    EncodingError,
    #[msg("Transaction rejected")]
    TransactionRejected,
    #[msg("Please wait for cooldown period to end")]
    CooldownActive,
    #[msg("Faucet has insufficient tokens")]
    InsufficientFunds,
    #[msg("Network error")]
    NetworkError,
    #[msg("Missing configuration value")]
    MissingConfiguration,
    #[msg("Invalid configuration value")]
    InvalidConfiguration,
}

impl FaucetError {
    const ALL: [FaucetError; 10] = [
        FaucetError::WalletNotConnected,
        FaucetError::ConfigNotInitialized,
        FaucetError::MalformedAccount,
        FaucetError::EncodingError,
        FaucetError::TransactionRejected,
        FaucetError::CooldownActive,
        FaucetError::InsufficientFunds,
        FaucetError::NetworkError,
        FaucetError::MissingConfiguration,
        FaucetError::InvalidConfiguration,
    ];

    /// Recovers the faucet error kind carried by an anchor error, if any.
    pub fn from_error(err: &Error) -> Option<Self> {
        match err {
            Error::AnchorError(anchor_error) => Self::ALL
                .into_iter()
                .find(|kind| u32::from(*kind) == anchor_error.error_code_number),
            Error::ProgramError(_) => None,
        }
    }

    /// Sorts a remote rejection by the text the cluster sent back.
    pub fn classify_rejection(message: &str) -> Self {
        let message = message.to_lowercase();
        if message.contains("cooldown") {
            FaucetError::CooldownActive
        } else if message.contains("insufficient") {
            FaucetError::InsufficientFunds
        } else {
            FaucetError::TransactionRejected
        }
    }
}

pub fn is_kind(err: &Error, kind: FaucetError) -> bool {
    FaucetError::from_error(err).is_some_and(|found| found as u32 == kind as u32)
}
