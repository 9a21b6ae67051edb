//! Card domain constants.

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Number of cards in an evaluable poker hand.
pub const HAND_SIZE: usize = 5;

/// Lowest card value (deuce).
pub const MIN_RANK: u8 = 2;

/// Highest card value (ace).
pub const MAX_RANK: u8 = 14;
