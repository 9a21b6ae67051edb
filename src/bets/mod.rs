//! Social bets: create, browse, join, settle.
//!
//! Bet rows, participant escrow, and payout math are owned by the backend
//! behind the `create_bet_with_prize`, `join_bet`, and `settle_bet`
//! procedures. The client validates form input before calling out and
//! reads bets through the stats and participant-detail views.

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{BetsError, BetsResult};
pub use manager::{BetsManager, BetsRemote, DEFAULT_STAKE};
pub use models::{Bet, BetId, BetParticipant, BetStats, BetStatus, NewBet};
