//! Remote backend boundary.
//!
//! The app runs against a hosted backend-as-a-service that owns the
//! schema, row security, the realtime change feed, and the remote
//! procedures (`create_bet_with_prize`, `join_bet`, `settle_bet`,
//! `wallet_apply_delta`, `add_review`). None of that logic lives in this
//! crate: each concern module declares a narrow async trait describing the
//! calls it makes, and the embedding application supplies the transport.
//!
//! This module holds what those seams share: the error type surfaced by
//! every remote call and the connection configuration.

pub mod config;
pub mod errors;

pub use config::RemoteConfig;
pub use errors::{RemoteError, RemoteResult};
