//! Card domain - the 52-card deck, dealing, and 5-card hand evaluation.
//!
//! This module is the self-contained core of the crate: it has no I/O, no
//! shared state, and no dependency on the remote backend. A deck is built
//! fresh per round, shuffled, dealt from the front, and discarded.
//!
//! - [`entities`]: `Suit`, `Card`, and the mutable `Deck`
//! - [`eval`]: hand classification and hand-vs-hand comparison
//! - [`errors`]: deck failure modes

pub mod constants;
pub mod entities;
pub mod errors;
pub mod eval;

pub use constants::{DECK_SIZE, HAND_SIZE, MAX_RANK, MIN_RANK};
pub use entities::{Card, Deck, Suit, Value};
pub use errors::CardError;
pub use eval::{HandCategory, HandEvaluation, compare_hands, evaluate};
