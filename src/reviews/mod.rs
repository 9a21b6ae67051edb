//! Bet reviews.
//!
//! Short free-text comments attached to a bet, written through the
//! `add_review` procedure and read from a view joined with author names.

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{ReviewsError, ReviewsResult};
pub use manager::{ReviewsManager, ReviewsRemote};
pub use models::{Review, ReviewDetail};
