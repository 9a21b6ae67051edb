use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use bones_club::cards::{Card, Deck, Suit, compare_hands, evaluate};

/// Benchmark evaluation of a straight flush (straight + flush both hit)
fn bench_evaluate_straight_flush(c: &mut Criterion) {
    let hand = [
        Card(10, Suit::Hearts),
        Card(11, Suit::Hearts),
        Card(12, Suit::Hearts),
        Card(13, Suit::Hearts),
        Card(14, Suit::Hearts),
    ];
    c.bench_function("evaluate_straight_flush", |b| b.iter(|| evaluate(&hand)));
}

/// Benchmark evaluation of a two-pair hand (multiplicity path)
fn bench_evaluate_two_pair(c: &mut Criterion) {
    let hand = [
        Card(2, Suit::Clubs),
        Card(2, Suit::Diamonds),
        Card(5, Suit::Hearts),
        Card(9, Suit::Spades),
        Card(9, Suit::Diamonds),
    ];
    c.bench_function("evaluate_two_pair", |b| b.iter(|| evaluate(&hand)));
}

/// Benchmark comparison of two hands that tie on category
fn bench_compare_close_hands(c: &mut Criterion) {
    let a = [
        Card(14, Suit::Spades),
        Card(14, Suit::Diamonds),
        Card(13, Suit::Clubs),
        Card(13, Suit::Diamonds),
        Card(2, Suit::Hearts),
    ];
    let b_hand = [
        Card(14, Suit::Hearts),
        Card(14, Suit::Clubs),
        Card(13, Suit::Spades),
        Card(13, Suit::Hearts),
        Card(3, Suit::Diamonds),
    ];
    c.bench_function("compare_close_two_pairs", |b| {
        b.iter(|| compare_hands(&a, &b_hand))
    });
}

/// Benchmark a full five-card round: build, shuffle, deal twice, evaluate
fn bench_shuffle_and_deal_round(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    c.bench_function("shuffle_and_deal_round", |b| {
        b.iter(|| {
            let mut deck = Deck::new();
            deck.shuffle_with(&mut rng);
            let player = deck.deal(5).unwrap();
            let dealer = deck.deal(5).unwrap();
            (evaluate(&player), evaluate(&dealer))
        })
    });
}

criterion_group!(
    card_core,
    bench_evaluate_straight_flush,
    bench_evaluate_two_pair,
    bench_compare_close_hands,
    bench_shuffle_and_deal_round,
);

criterion_main!(card_core);
