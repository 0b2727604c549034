//! Client for the token faucet program.
//!
//! The program itself is deployed separately; this crate knows its account
//! layouts, its instruction encoding and the addresses it derives, and drives
//! the initialize/claim flow through an injected RPC handle.

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod instructions;
pub mod rpc;
pub mod service;
pub mod session;
pub mod state;

pub use app::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use helpers::*;
pub use instructions::*;
pub use rpc::*;
pub use service::*;
pub use session::*;
pub use state::*;
