use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use solana_client::rpc_client::RpcClient;

use crate::config::FaucetEnv;
use crate::constants::{
    DEFAULT_COOLDOWN_SECONDS, DEFAULT_TOKENS_PER_CLAIM, SIGNATURE_PREVIEW_LEN, TOKEN_UNIT,
};
use crate::error::FaucetError;
use crate::helpers::short_signature;
use crate::instructions::checked_amount;
use crate::rpc::FaucetRpc;
use crate::service::FaucetService;
use crate::session::WalletSession;
use crate::state::FaucetConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// Transient outcome of a user action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.level == NotificationLevel::Success
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimStatus {
    pub total_claims: u64,
    pub cooldown_remaining: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaucetStats {
    pub tokens_per_claim: u64,
    pub cooldown_seconds: i64,
    pub is_active: bool,
    pub claim_status: Option<ClaimStatus>,
}

impl FaucetStats {
    fn from_config(config: &FaucetConfig, claim_status: Option<ClaimStatus>) -> Self {
        Self {
            tokens_per_claim: config.tokens_per_claim,
            cooldown_seconds: config.cooldown_seconds,
            is_active: config.is_active,
            claim_status,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatsView {
    Disconnected,
    NotInitialized,
    Loaded(FaucetStats),
    Unavailable(String),
}

impl fmt::Display for StatsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsView::Disconnected => write!(f, "Connect wallet to view faucet stats"),
            StatsView::NotInitialized => write!(f, "Faucet not initialized yet."),
            StatsView::Unavailable(reason) => write!(f, "Failed to load faucet config: {reason}"),
            StatsView::Loaded(stats) => {
                let whole = stats.tokens_per_claim / TOKEN_UNIT;
                let fraction = stats.tokens_per_claim % TOKEN_UNIT;
                if fraction == 0 {
                    writeln!(f, "Tokens per claim: {whole}")?;
                } else {
                    let fraction = format!("{fraction:06}");
                    writeln!(f, "Tokens per claim: {whole}.{}", fraction.trim_end_matches('0'))?;
                }
                writeln!(f, "Cooldown: {} seconds", stats.cooldown_seconds)?;
                write!(
                    f,
                    "Status: {}",
                    if stats.is_active { "Active" } else { "Inactive" }
                )?;
                if let Some(status) = stats.claim_status {
                    write!(f, "\nYour claims: {}", status.total_claims)?;
                    if status.cooldown_remaining > 0 {
                        write!(f, "\nNext claim in: {} seconds", status.cooldown_remaining)?;
                    } else {
                        write!(f, "\nNext claim: available now")?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// Action boundary: every call returns a value to render, never an error.
pub struct FaucetApp<R: FaucetRpc> {
    env: FaucetEnv,
    rpc: R,
    session: WalletSession,
    stats: StatsView,
}

impl FaucetApp<RpcClient> {
    pub fn from_env() -> Result<Self> {
        let env = FaucetEnv::from_env()?;
        let rpc = RpcClient::new(env.rpc_url.clone());
        Ok(Self::new(env, rpc))
    }
}

impl<R: FaucetRpc> FaucetApp<R> {
    pub fn new(env: FaucetEnv, rpc: R) -> Self {
        Self {
            env,
            rpc,
            session: WalletSession::disconnected(),
            stats: StatsView::Disconnected,
        }
    }

    pub fn env(&self) -> &FaucetEnv {
        &self.env
    }

    pub fn rpc(&self) -> &R {
        &self.rpc
    }

    pub fn session(&self) -> &WalletSession {
        &self.session
    }

    /// Last fetched statistics.
    pub fn stats(&self) -> &StatsView {
        &self.stats
    }

    pub fn connect(&mut self, session: WalletSession) -> &StatsView {
        self.session = session;
        self.refresh()
    }

    pub fn disconnect(&mut self) {
        self.session = WalletSession::disconnected();
        self.stats = StatsView::Disconnected;
    }

    pub fn refresh(&mut self) -> &StatsView {
        self.refresh_at(unix_now())
    }

    pub fn refresh_at(&mut self, now: i64) -> &StatsView {
        self.stats = self.load_stats(now);
        &self.stats
    }

    pub fn claim(&mut self) -> Notification {
        let result = FaucetService::new(&self.rpc, &self.env).claim_tokens(&self.session);
        match result {
            Ok(signature) => {
                self.refresh();
                Notification::success(format!(
                    "Tokens claimed! Signature: {}",
                    short_signature(&signature.to_string(), SIGNATURE_PREVIEW_LEN)
                ))
            }
            Err(err) => Notification::error(claim_failure_message(&err)),
        }
    }

    pub fn initialize(&mut self, whole_tokens_per_claim: i64, cooldown_seconds: i64) -> Notification {
        let result = checked_amount(whole_tokens_per_claim).and_then(|tokens| {
            FaucetService::new(&self.rpc, &self.env).initialize_faucet(
                &self.session,
                tokens,
                cooldown_seconds,
            )
        });
        match result {
            Ok(signature) => {
                self.refresh();
                Notification::success(format!(
                    "Faucet initialized! Signature: {}",
                    short_signature(&signature.to_string(), SIGNATURE_PREVIEW_LEN)
                ))
            }
            Err(err) => Notification::error(format!("Failed to initialize: {}", describe(&err))),
        }
    }

    /// Admin action with the stock faucet settings: 100 tokens per claim, one hour cooldown.
    pub fn initialize_with_defaults(&mut self) -> Notification {
        self.initialize(DEFAULT_TOKENS_PER_CLAIM as i64, DEFAULT_COOLDOWN_SECONDS)
    }

    fn load_stats(&self, now: i64) -> StatsView {
        let Ok(user) = self.session.pubkey() else {
            return StatsView::Disconnected;
        };
        let service = FaucetService::new(&self.rpc, &self.env);

        let config = match service.fetch_config() {
            Ok(config) => config,
            Err(err) if is_not_initialized(&err) => return StatsView::NotInitialized,
            Err(err) => return StatsView::Unavailable(describe(&err)),
        };

        // A missing or unreadable claim record only hides the per-user line.
        let claim_status = match service.fetch_user_claim(&user) {
            Ok(record) => record.map(|record| ClaimStatus {
                total_claims: record.total_claims,
                cooldown_remaining: record.cooldown_remaining(config.cooldown_seconds, now),
            }),
            Err(err) => {
                msg!("Failed to load claim record for {}: {}", user, err);
                None
            }
        };

        StatsView::Loaded(FaucetStats::from_config(&config, claim_status))
    }
}

fn is_not_initialized(err: &Error) -> bool {
    matches!(
        FaucetError::from_error(err),
        Some(FaucetError::ConfigNotInitialized)
    )
}

fn describe(err: &Error) -> String {
    match FaucetError::from_error(err) {
        Some(kind) => kind.to_string(),
        None => err.to_string(),
    }
}

fn claim_failure_message(err: &Error) -> String {
    match FaucetError::from_error(err) {
        Some(FaucetError::WalletNotConnected) => {
            "Please ensure your wallet is connected".to_string()
        }
        Some(kind @ (FaucetError::CooldownActive | FaucetError::InsufficientFunds)) => {
            kind.to_string()
        }
        _ => format!("Failed to claim: {}", describe(err)),
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or_default()
}
