//! Wallet module: balance, transaction ledger view, and delta application.
//!
//! Balances live on the backend and only move through the
//! `wallet_apply_delta` remote procedure, which keeps mutation atomic and
//! writes the ledger row. This module implements the client side:
//! - balance and transaction queries
//! - delta application with a reason, an optional reference, and free-form
//!   metadata
//! - deposit/withdraw flows with local validation
//! - a per-user realtime feed of ledger inserts

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{WalletError, WalletResult};
pub use manager::{WalletManager, WalletRemote};
pub use models::{DEFAULT_TX_LIMIT, DeltaRequest, TxRef, WalletTx};
