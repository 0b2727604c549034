pub const FAUCET_CONFIG_SEED: &[u8] = b"faucet_config";
pub const USER_CLAIM_SEED: &[u8] = b"user_claim";

pub const INITIALIZE_DISCRIMINANT: u8 = 0;
pub const CLAIM_DISCRIMINANT: u8 = 1;

/// admin + token_mint + tokens_per_claim + cooldown_seconds + is_active
pub const FAUCET_CONFIG_LEN: usize = 32 + 32 + 8 + 8 + 1;
/// user + last_claim_time + total_claims
pub const USER_CLAIM_RECORD_LEN: usize = 32 + 8 + 8;
pub const INITIALIZE_PAYLOAD_LEN: usize = 1 + 8 + 8;

pub const TOKEN_DECIMALS: u32 = 6;
pub const TOKEN_UNIT: u64 = 10u64.pow(TOKEN_DECIMALS);

pub const DEFAULT_TOKENS_PER_CLAIM: u64 = 100;
pub const DEFAULT_COOLDOWN_SECONDS: i64 = 3_600;

pub const PROGRAM_ID_VAR: &str = "FAUCET_PROGRAM_ID";
pub const TOKEN_MINT_VAR: &str = "FAUCET_TOKEN_MINT";
pub const RPC_URL_VAR: &str = "FAUCET_RPC_URL";
pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";

// Signatures are shown abbreviated in notifications.
pub const SIGNATURE_PREVIEW_LEN: usize = 8;
