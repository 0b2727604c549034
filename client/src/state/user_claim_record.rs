use anchor_lang::prelude::*;

use crate::constants::USER_CLAIM_RECORD_LEN;
use crate::state::{decode_exact, encode_exact};

/// Per-user claim history kept by the program at the `user_claim` PDA.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserClaimRecord {
    pub user: Pubkey,
    /// Unix seconds of the last successful claim.
    pub last_claim_time: i64,
    pub total_claims: u64,
}

impl UserClaimRecord {
    pub const LEN: usize = USER_CLAIM_RECORD_LEN;

    pub fn decode(data: &[u8]) -> Result<Self> {
        decode_exact(data, Self::LEN)
    }

    pub fn encode(&self) -> Vec<u8> {
        encode_exact(self, Self::LEN)
    }

    pub fn next_claim_at(&self, cooldown_seconds: i64) -> i64 {
        self.last_claim_time.saturating_add(cooldown_seconds)
    }

    /// Seconds left before the program accepts another claim; zero once the cooldown elapsed.
    pub fn cooldown_remaining(&self, cooldown_seconds: i64, now: i64) -> i64 {
        self.next_claim_at(cooldown_seconds)
            .saturating_sub(now)
            .max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{is_kind, FaucetError};

    fn record() -> UserClaimRecord {
        UserClaimRecord {
            user: Pubkey::new_from_array([3; 32]),
            last_claim_time: 1_700_000_000,
            total_claims: 4,
        }
    }

    #[test]
    fn test_layout() {
        let data = record().encode();
        assert_eq!(data.len(), 48);
        assert_eq!(&data[32..40], &1_700_000_000i64.to_le_bytes());
        assert_eq!(&data[40..48], &4u64.to_le_bytes());
        assert_eq!(UserClaimRecord::decode(&data).unwrap(), record());
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        let err = UserClaimRecord::decode(&[0u8; 47]).unwrap_err();
        assert!(is_kind(&err, FaucetError::MalformedAccount));
        let err = UserClaimRecord::decode(&[0u8; 81]).unwrap_err();
        assert!(is_kind(&err, FaucetError::MalformedAccount));
    }

    #[test]
    fn test_cooldown_remaining() {
        let record = record();
        assert_eq!(record.next_claim_at(3_600), 1_700_003_600);
        assert_eq!(record.cooldown_remaining(3_600, 1_700_000_000), 3_600);
        assert_eq!(record.cooldown_remaining(3_600, 1_700_003_000), 600);
        assert_eq!(record.cooldown_remaining(3_600, 1_700_003_600), 0);
        assert_eq!(record.cooldown_remaining(3_600, 1_800_000_000), 0);
    }

    #[test]
    fn test_cooldown_saturates() {
        let record = UserClaimRecord {
            last_claim_time: i64::MAX - 10,
            ..record()
        };
        assert_eq!(record.next_claim_at(3_600), i64::MAX);
    }
}
