use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use super::constants::HAND_SIZE;
use super::entities::{Card, Value};

/// The nine 5-card hand categories, weakest first. The discriminant is the
/// category score used on the wire and in game results.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum HandCategory {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandCategory {
    /// Numeric category score, 0 (high card) through 8 (straight flush).
    pub fn score(self) -> u8 {
        self as u8
    }

    /// Display label shown on result screens.
    pub fn label(self) -> &'static str {
        match self {
            Self::HighCard => "HIGH CARD",
            Self::Pair => "PAIR",
            Self::TwoPair => "TWO PAIR",
            Self::ThreeOfAKind => "THREE OF A KIND",
            Self::Straight => "STRAIGHT",
            Self::Flush => "FLUSH",
            Self::FullHouse => "FULL HOUSE",
            Self::FourOfAKind => "FOUR OF A KIND",
            Self::StraightFlush => "STRAIGHT FLUSH",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of classifying a 5-card hand. Derived per call, never stored.
///
/// Only `category` and `tiebreaks` take part in comparison; the label is
/// presentation-only.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct HandEvaluation {
    pub category: HandCategory,
    /// Tie-break key for hands of the same category: `[high]` for
    /// straights, otherwise the five ranks ordered by group size
    /// descending, then rank descending.
    pub tiebreaks: Vec<Value>,
}

impl HandEvaluation {
    pub fn label(&self) -> &'static str {
        self.category.label()
    }
}

impl Ord for HandEvaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category.cmp(&other.category).then_with(|| {
            let len = self.tiebreaks.len().max(other.tiebreaks.len());
            for i in 0..len {
                // A ranked-out position counts as 0; in practice equal
                // categories always carry equal-length keys.
                let a = self.tiebreaks.get(i).copied().unwrap_or(0);
                let b = other.tiebreaks.get(i).copied().unwrap_or(0);
                match a.cmp(&b) {
                    Ordering::Equal => continue,
                    ord => return ord,
                }
            }
            Ordering::Equal
        })
    }
}

impl PartialOrd for HandEvaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Straight-high value of a descending-sorted rank list, if the ranks form
/// a straight. The wheel (A-2-3-4-5) is the one irregular case: the ace
/// plays low and the straight is 5-high.
fn straight_high(ranks_desc: &[Value]) -> Option<Value> {
    let mut uniq = ranks_desc.to_vec();
    uniq.dedup();
    // Any duplicated rank rules out five in a row.
    if uniq.len() != HAND_SIZE {
        return None;
    }
    const WHEEL: [Value; HAND_SIZE] = [14, 5, 4, 3, 2];
    if uniq == WHEEL {
        return Some(5);
    }
    let max = uniq[0];
    if uniq
        .iter()
        .enumerate()
        .all(|(i, &v)| v == max - i as Value)
    {
        return Some(max);
    }
    None
}

/// Classify a 5-card hand.
///
/// Total over its domain: every 5-card combination maps to exactly one
/// category, independent of input order.
///
/// # Panics
///
/// Panics if `cards` does not hold exactly 5 cards. Single-card hands in
/// the high-card game compare by raw rank in the game logic and never
/// reach the evaluator.
pub fn evaluate(cards: &[Card]) -> HandEvaluation {
    assert_eq!(cards.len(), HAND_SIZE, "hand must hold exactly 5 cards");

    let mut ranks: Vec<Value> = cards.iter().map(|c| c.0).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.iter().all(|c| c.1 == cards[0].1);
    let straight = straight_high(&ranks);

    let mut counts: HashMap<Value, u8> = HashMap::new();
    for &rank in &ranks {
        *counts.entry(rank).or_insert(0) += 1;
    }
    let mut groups: Vec<(u8, Value)> = counts.into_iter().map(|(rank, n)| (n, rank)).collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let shape: Vec<u8> = groups.iter().map(|&(n, _)| n).collect();
    let by_count_then_rank: Vec<Value> = groups
        .iter()
        .flat_map(|&(n, rank)| std::iter::repeat(rank).take(n as usize))
        .collect();

    let (category, tiebreaks) = match (straight, flush, shape.as_slice()) {
        (Some(high), true, _) => (HandCategory::StraightFlush, vec![high]),
        (_, _, [4, 1]) => (HandCategory::FourOfAKind, by_count_then_rank),
        (_, _, [3, 2]) => (HandCategory::FullHouse, by_count_then_rank),
        (None, true, _) => (HandCategory::Flush, ranks),
        (Some(high), false, _) => (HandCategory::Straight, vec![high]),
        (_, _, [3, 1, 1]) => (HandCategory::ThreeOfAKind, by_count_then_rank),
        (_, _, [2, 2, 1]) => (HandCategory::TwoPair, by_count_then_rank),
        (_, _, [2, 1, 1, 1]) => (HandCategory::Pair, by_count_then_rank),
        _ => (HandCategory::HighCard, ranks),
    };

    HandEvaluation {
        category,
        tiebreaks,
    }
}

/// Total order over two 5-card hands: category first, then the lock-step
/// tie-break walk. `Less` means `a` ranks below `b`.
pub fn compare_hands(a: &[Card], b: &[Card]) -> Ordering {
    evaluate(a).cmp(&evaluate(b))
}
