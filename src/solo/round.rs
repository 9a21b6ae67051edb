//! The pure round logic of the three solo games.
//!
//! A round consumes cards from the deck it is handed and computes the
//! outcome; it never touches the wallet or the backend. Decks must be
//! freshly built and shuffled per round.

use enum_dispatch::enum_dispatch;
use std::cmp::Ordering;
use uuid::Uuid;

use super::errors::SoloError;
use super::models::{GameType, RoundOutcome};
use crate::cards::{Deck, HAND_SIZE, HandCategory, evaluate};
use crate::profiles::Bones;

/// Pair-Plus pay table: gross multiplier applied to the wager for a
/// winning category. High card pays nothing.
pub fn payout_multiplier(category: HandCategory) -> Bones {
    match category {
        HandCategory::HighCard => 0,
        HandCategory::Pair => 2,
        HandCategory::TwoPair => 3,
        HandCategory::ThreeOfAKind => 4,
        HandCategory::Straight => 5,
        HandCategory::Flush => 6,
        HandCategory::FullHouse => 8,
        HandCategory::FourOfAKind => 12,
        HandCategory::StraightFlush => 20,
    }
}

/// One playable solo round variant.
#[enum_dispatch]
pub trait SoloRound {
    fn game_type(&self) -> GameType;

    /// Deal from `deck` and settle the round against the wager.
    fn play(&self, deck: &mut Deck, wager: Bones) -> Result<RoundOutcome, SoloError>;
}

/// Closed set of round variants, dispatching [`SoloRound`].
#[enum_dispatch(SoloRound)]
#[derive(Clone, Copy, Debug)]
pub enum Round {
    FiveCard,
    HighCard,
    PairPlus,
}

impl From<GameType> for Round {
    fn from(game_type: GameType) -> Self {
        match game_type {
            GameType::FiveCard => Self::FiveCard(FiveCard),
            GameType::HighCard => Self::HighCard(HighCard),
            GameType::PairPlus => Self::PairPlus(PairPlus),
        }
    }
}

fn ensure_wager(wager: Bones) -> Result<(), SoloError> {
    if wager <= 0 {
        return Err(SoloError::InvalidWager(wager));
    }
    Ok(())
}

/// Five-card showdown: player and dealer each get 5 cards, better hand
/// wins double, a push returns the wager.
#[derive(Clone, Copy, Debug, Default)]
pub struct FiveCard;

impl SoloRound for FiveCard {
    fn game_type(&self) -> GameType {
        GameType::FiveCard
    }

    fn play(&self, deck: &mut Deck, wager: Bones) -> Result<RoundOutcome, SoloError> {
        ensure_wager(wager)?;
        let player = deck.deal(HAND_SIZE)?;
        let dealer = deck.deal(HAND_SIZE)?;
        let player_eval = evaluate(&player);
        let dealer_eval = evaluate(&dealer);

        let ord = player_eval.cmp(&dealer_eval);
        let (won, payout) = match ord {
            Ordering::Greater => (true, wager * 2),
            Ordering::Less => (false, 0),
            Ordering::Equal => (false, wager),
        };

        Ok(RoundOutcome {
            round_id: Uuid::new_v4(),
            game_type: self.game_type(),
            won,
            score: match ord {
                Ordering::Greater => 1,
                Ordering::Equal => 0,
                Ordering::Less => -1,
            },
            wager,
            payout,
            player,
            dealer,
            player_eval: Some(player_eval),
            dealer_eval: Some(dealer_eval),
        })
    }
}

/// High card: one card each, raw rank decides. Single cards never reach
/// the evaluator.
#[derive(Clone, Copy, Debug, Default)]
pub struct HighCard;

impl SoloRound for HighCard {
    fn game_type(&self) -> GameType {
        GameType::HighCard
    }

    fn play(&self, deck: &mut Deck, wager: Bones) -> Result<RoundOutcome, SoloError> {
        ensure_wager(wager)?;
        let player = deck.deal(1)?;
        let dealer = deck.deal(1)?;
        let player_rank = player[0].0;
        let dealer_rank = dealer[0].0;

        let (won, payout) = match player_rank.cmp(&dealer_rank) {
            Ordering::Greater => (true, wager * 2),
            Ordering::Less => (false, 0),
            Ordering::Equal => (false, wager),
        };

        Ok(RoundOutcome {
            round_id: Uuid::new_v4(),
            game_type: self.game_type(),
            won,
            score: i64::from(player_rank) - i64::from(dealer_rank),
            wager,
            payout,
            player,
            dealer,
            player_eval: None,
            dealer_eval: None,
        })
    }
}

/// Pair-plus: a single 5-card hand, paid from the pay table when it makes
/// Pair or better.
#[derive(Clone, Copy, Debug, Default)]
pub struct PairPlus;

impl SoloRound for PairPlus {
    fn game_type(&self) -> GameType {
        GameType::PairPlus
    }

    fn play(&self, deck: &mut Deck, wager: Bones) -> Result<RoundOutcome, SoloError> {
        ensure_wager(wager)?;
        let player = deck.deal(HAND_SIZE)?;
        let player_eval = evaluate(&player);

        let won = player_eval.category >= HandCategory::Pair;
        let payout = wager * payout_multiplier(player_eval.category);

        Ok(RoundOutcome {
            round_id: Uuid::new_v4(),
            game_type: self.game_type(),
            won,
            score: i64::from(player_eval.category.score()),
            wager,
            payout,
            player,
            dealer: Vec::new(),
            player_eval: Some(player_eval),
            dealer_eval: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardError};
    use crate::cards::Suit::{Clubs, Diamonds, Hearts, Spades};

    // First HAND_SIZE cards go to the player, the next to the dealer.
    fn stacked(cards: Vec<Card>) -> Deck {
        Deck::from(cards)
    }

    #[test]
    fn test_five_card_win_pays_double() {
        let mut deck = stacked(vec![
            // Player: king-high straight flush
            Card(9, Hearts),
            Card(10, Hearts),
            Card(11, Hearts),
            Card(12, Hearts),
            Card(13, Hearts),
            // Dealer: junk
            Card(2, Clubs),
            Card(5, Diamonds),
            Card(7, Spades),
            Card(9, Clubs),
            Card(12, Diamonds),
        ]);
        let outcome = FiveCard.play(&mut deck, 10).unwrap();
        assert!(outcome.won);
        assert_eq!(outcome.payout, 20);
        assert_eq!(outcome.net(), 10);
        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.player_eval.as_ref().unwrap().label(), "STRAIGHT FLUSH");
        assert_eq!(outcome.dealer_eval.as_ref().unwrap().label(), "HIGH CARD");
    }

    #[test]
    fn test_five_card_loss_pays_nothing() {
        let mut deck = stacked(vec![
            Card(2, Clubs),
            Card(5, Diamonds),
            Card(7, Spades),
            Card(9, Clubs),
            Card(12, Diamonds),
            Card(9, Hearts),
            Card(10, Hearts),
            Card(11, Hearts),
            Card(12, Hearts),
            Card(13, Hearts),
        ]);
        let outcome = FiveCard.play(&mut deck, 10).unwrap();
        assert!(!outcome.won);
        assert_eq!(outcome.payout, 0);
        assert_eq!(outcome.net(), -10);
        assert_eq!(outcome.score, -1);
    }

    #[test]
    fn test_five_card_push_returns_wager() {
        // Identical rank multisets on both sides.
        let mut deck = stacked(vec![
            Card(14, Spades),
            Card(14, Diamonds),
            Card(13, Clubs),
            Card(13, Diamonds),
            Card(2, Hearts),
            Card(14, Hearts),
            Card(14, Clubs),
            Card(13, Spades),
            Card(13, Hearts),
            Card(2, Diamonds),
        ]);
        let outcome = FiveCard.play(&mut deck, 25).unwrap();
        assert!(!outcome.won);
        assert!(outcome.is_push());
        assert_eq!(outcome.payout, 25);
        assert_eq!(outcome.net(), 0);
        assert_eq!(outcome.score, 0);
    }

    #[test]
    fn test_high_card_compares_raw_ranks() {
        let mut deck = stacked(vec![Card(14, Spades), Card(2, Hearts)]);
        let outcome = HighCard.play(&mut deck, 10).unwrap();
        assert!(outcome.won);
        assert_eq!(outcome.payout, 20);
        assert_eq!(outcome.score, 12);
        assert!(outcome.player_eval.is_none());
    }

    #[test]
    fn test_high_card_tie_returns_wager() {
        let mut deck = stacked(vec![Card(8, Spades), Card(8, Hearts)]);
        let outcome = HighCard.play(&mut deck, 10).unwrap();
        assert!(!outcome.won);
        assert!(outcome.is_push());
        assert_eq!(outcome.payout, 10);
        assert_eq!(outcome.score, 0);
    }

    #[test]
    fn test_pair_plus_pays_from_the_table() {
        let mut deck = stacked(vec![
            Card(3, Clubs),
            Card(3, Diamonds),
            Card(3, Hearts),
            Card(3, Spades),
            Card(7, Diamonds),
        ]);
        let outcome = PairPlus.play(&mut deck, 5).unwrap();
        assert!(outcome.won);
        assert_eq!(outcome.payout, 60);
        assert_eq!(outcome.score, 7);
        assert!(outcome.dealer.is_empty());
    }

    #[test]
    fn test_pair_plus_wheel_pays_as_straight() {
        let mut deck = stacked(vec![
            Card(5, Hearts),
            Card(4, Spades),
            Card(3, Diamonds),
            Card(2, Clubs),
            Card(14, Hearts),
        ]);
        let outcome = PairPlus.play(&mut deck, 4).unwrap();
        assert!(outcome.won);
        assert_eq!(outcome.payout, 20);
    }

    #[test]
    fn test_pair_plus_high_card_loses_wager() {
        let mut deck = stacked(vec![
            Card(2, Clubs),
            Card(5, Diamonds),
            Card(7, Spades),
            Card(9, Clubs),
            Card(12, Diamonds),
        ]);
        let outcome = PairPlus.play(&mut deck, 5).unwrap();
        assert!(!outcome.won);
        assert_eq!(outcome.payout, 0);
        assert_eq!(outcome.net(), -5);
    }

    #[test]
    fn test_rounds_reject_non_positive_wagers() {
        let mut deck = Deck::new();
        assert!(matches!(
            FiveCard.play(&mut deck, 0),
            Err(SoloError::InvalidWager(0))
        ));
        assert!(matches!(
            PairPlus.play(&mut deck, -3),
            Err(SoloError::InvalidWager(-3))
        ));
        // Nothing dealt on rejection.
        assert_eq!(deck.remaining(), 52);
    }

    #[test]
    fn test_short_deck_surfaces_insufficient_cards() {
        let mut deck = stacked(vec![Card(2, Clubs), Card(3, Clubs)]);
        let err = FiveCard.play(&mut deck, 10).unwrap_err();
        assert!(matches!(
            err,
            SoloError::Cards(CardError::InsufficientCards {
                requested: 5,
                remaining: 2,
            })
        ));
    }

    #[test]
    fn test_round_dispatch_reports_game_types() {
        assert_eq!(Round::from(GameType::FiveCard).game_type(), GameType::FiveCard);
        assert_eq!(Round::from(GameType::HighCard).game_type(), GameType::HighCard);
        assert_eq!(Round::from(GameType::PairPlus).game_type(), GameType::PairPlus);
    }
}
