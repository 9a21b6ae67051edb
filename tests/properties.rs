//! Property suites for the card core.

use proptest::prelude::*;
use proptest::sample::subsequence;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::cmp::Ordering;

use bones_club::cards::{Card, DECK_SIZE, Deck, compare_hands, evaluate};

fn full_deck() -> Vec<Card> {
    Deck::new().cards().to_vec()
}

fn hand() -> impl Strategy<Value = Vec<Card>> {
    subsequence(full_deck(), 5)
}

proptest! {
    #[test]
    fn shuffle_preserves_the_card_multiset(seed in any::<u64>()) {
        let mut deck = Deck::new();
        deck.shuffle_with(&mut StdRng::seed_from_u64(seed));
        let mut cards = deck.cards().to_vec();
        cards.sort();
        let mut reference = full_deck();
        reference.sort();
        prop_assert_eq!(cards, reference);
    }

    #[test]
    fn every_hand_maps_to_exactly_one_category(hand in hand()) {
        let eval = evaluate(&hand);
        prop_assert!(eval.category.score() <= 8);
        prop_assert!(!eval.tiebreaks.is_empty());
        // Straights carry the high card only; everything else all 5 ranks.
        prop_assert!(eval.tiebreaks.len() == 1 || eval.tiebreaks.len() == 5);
    }

    #[test]
    fn evaluation_ignores_input_order(hand in hand(), seed in any::<u64>()) {
        let mut permuted = hand.clone();
        permuted.shuffle(&mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(evaluate(&hand), evaluate(&permuted));
    }

    #[test]
    fn comparison_is_antisymmetric(a in hand(), b in hand()) {
        prop_assert_eq!(compare_hands(&a, &b), compare_hands(&b, &a).reverse());
    }

    #[test]
    fn comparison_is_reflexive(a in hand()) {
        prop_assert_eq!(compare_hands(&a, &a), Ordering::Equal);
    }

    #[test]
    fn comparison_is_transitive(a in hand(), b in hand(), c in hand()) {
        if compare_hands(&a, &b) == Ordering::Greater
            && compare_hands(&b, &c) == Ordering::Greater
        {
            prop_assert_eq!(compare_hands(&a, &c), Ordering::Greater);
        }
    }

    #[test]
    fn dealing_never_exceeds_the_deck(n in 0usize..=60) {
        let mut deck = Deck::new();
        let result = deck.deal(n);
        if n <= DECK_SIZE {
            prop_assert_eq!(result.unwrap().len(), n);
            prop_assert_eq!(deck.remaining(), DECK_SIZE - n);
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(deck.remaining(), DECK_SIZE);
        }
    }
}
