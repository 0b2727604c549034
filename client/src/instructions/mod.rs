pub mod claim_tokens;
pub mod initialize_faucet;
pub mod payload;

pub use claim_tokens::*;
pub use initialize_faucet::*;
pub use payload::*;
