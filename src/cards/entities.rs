use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::{DECK_SIZE, MAX_RANK, MIN_RANK};
use super::errors::CardError;

/// Card suits. Suits carry no ordering for gameplay; they matter only for
/// flush detection and asset lookup.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// The fixed suit order used when building a deck.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Suit name as it appears in card keys, e.g. `"Hearts"`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Clubs => "♣",
            Self::Diamonds => "♦",
            Self::Hearts => "♥",
            Self::Spades => "♠",
        };
        write!(f, "{repr}")
    }
}

/// Placeholder for card values.
pub type Value = u8;

/// A card is a tuple of a uInt8 value (2u8 ... ace=14u8, jack=11u8,
/// queen=12u8, king=13u8) and a suit.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Card(pub Value, pub Suit);

impl Card {
    /// Stable identifier combining rank label and suit name, e.g.
    /// `"AHearts"` or `"10Clubs"`. Used for display and asset lookup only,
    /// never for gameplay decisions.
    pub fn key(&self) -> String {
        format!("{}{}", rank_label(self.0), self.1.name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = format!("{}/{}", rank_label(self.0), self.1);
        write!(f, "{repr:>4}")
    }
}

/// Rank label for keys and display: `2`..`10`, `J`, `Q`, `K`, `A`.
fn rank_label(value: Value) -> String {
    match value {
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        14 => "A".to_string(),
        v => v.to_string(),
    }
}

/// An ordered sequence of cards, dealt from the front. A deck is created
/// fresh per round and must not be shared across concurrent rounds.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the full 52-card deck in canonical order: values ascending,
    /// suits in the fixed `Suit::ALL` order within each value.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for value in MIN_RANK..=MAX_RANK {
            for suit in Suit::ALL {
                cards.push(Card(value, suit));
            }
        }
        Self { cards }
    }

    /// Unbiased in-place Fisher-Yates permutation using the thread RNG.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Shuffle with a caller-supplied RNG (seedable in tests).
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Remove and return the first `n` cards. The deck is left untouched
    /// when fewer than `n` cards remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, CardError> {
        if n > self.cards.len() {
            return Err(CardError::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Number of cards left to deal.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The undealt cards, front first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a deck from an explicit card sequence (stacked decks in tests
/// and simulations).
impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
