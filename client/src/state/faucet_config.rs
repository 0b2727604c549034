use anchor_lang::prelude::*;

use crate::constants::FAUCET_CONFIG_LEN;
use crate::state::{decode_exact, encode_exact};

/// Global faucet configuration stored at the `faucet_config` PDA.
///
/// The account carries no discriminator: the layout is the bare field
/// sequence below, integers little-endian.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaucetConfig {
    pub admin: Pubkey,
    pub token_mint: Pubkey,
    /// Smallest token units dispensed per claim.
    pub tokens_per_claim: u64,
    pub cooldown_seconds: i64,
    pub is_active: bool,
}

impl FaucetConfig {
    pub const LEN: usize = FAUCET_CONFIG_LEN;

    pub fn decode(data: &[u8]) -> Result<Self> {
        decode_exact(data, Self::LEN)
    }

    pub fn encode(&self) -> Vec<u8> {
        encode_exact(self, Self::LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{is_kind, FaucetError};

    fn sample() -> FaucetConfig {
        FaucetConfig {
            admin: Pubkey::new_from_array([7; 32]),
            token_mint: Pubkey::new_from_array([9; 32]),
            tokens_per_claim: 100_000_000,
            cooldown_seconds: 3_600,
            is_active: true,
        }
    }

    #[test]
    fn test_layout_is_fixed_offset() {
        let data = sample().encode();
        assert_eq!(data.len(), 81);
        assert_eq!(&data[0..32], &[7; 32]);
        assert_eq!(&data[32..64], &[9; 32]);
        assert_eq!(&data[64..72], &100_000_000u64.to_le_bytes());
        assert_eq!(&data[72..80], &3_600i64.to_le_bytes());
        assert_eq!(data[80], 1);
    }

    #[test]
    fn test_decode_reproduces_fields() {
        let decoded = FaucetConfig::decode(&sample().encode()).unwrap();
        assert_eq!(decoded.tokens_per_claim, 100_000_000);
        assert_eq!(decoded.cooldown_seconds, 3_600);
        assert!(decoded.is_active);
        assert_eq!(decoded, sample());
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        let data = sample().encode();
        for len in [0, 1, 80] {
            let err = FaucetConfig::decode(&data[..len]).unwrap_err();
            assert!(is_kind(&err, FaucetError::MalformedAccount));
        }
        let mut longer = data.clone();
        longer.push(0);
        let err = FaucetConfig::decode(&longer).unwrap_err();
        assert!(is_kind(&err, FaucetError::MalformedAccount));
    }

    #[test]
    fn test_decode_accepts_zero_mint() {
        let config = FaucetConfig {
            token_mint: Pubkey::default(),
            is_active: false,
            ..sample()
        };
        let decoded = FaucetConfig::decode(&config.encode()).unwrap();
        assert_eq!(decoded.token_mint, Pubkey::default());
        assert!(!decoded.is_active);
    }

    #[test]
    fn test_decode_rejects_invalid_bool_byte() {
        let mut data = sample().encode();
        data[80] = 2;
        let err = FaucetConfig::decode(&data).unwrap_err();
        assert!(is_kind(&err, FaucetError::MalformedAccount));
    }
}
