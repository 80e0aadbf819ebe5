//! Deck behaviour across full draw cycles.

mod common;

use std::collections::{HashMap, HashSet};

use common::{cards, deck, init_logging};
use flipdeck::{Card, Deck};
use proptest::prelude::*;

fn draw_cycle(deck: &mut Deck) -> Vec<Card> {
    std::iter::from_fn(|| deck.draw()).collect()
}

fn ids(cards: &[Card]) -> HashSet<String> {
    cards.iter().map(|card| card.id().to_string()).collect()
}

proptest! {
    #[test]
    fn every_card_drawn_exactly_once(n in 0usize..40, seed in any::<u64>()) {
        let mut deck = deck(n, seed);
        let drawn = draw_cycle(&mut deck);

        prop_assert_eq!(drawn.len(), n);
        prop_assert_eq!(ids(&drawn), ids(&cards(n)));
        prop_assert_eq!(deck.draw(), None);
        prop_assert!(deck.is_exhausted());
    }

    #[test]
    fn counters_track_position(n in 1usize..30, draws in 0usize..40, seed in any::<u64>()) {
        let mut deck = deck(n, seed);
        for _ in 0..draws {
            deck.draw();
            prop_assert_eq!(deck.remaining(), n - deck.position());
            prop_assert_eq!(deck.is_exhausted(), deck.position() == n);
        }
        prop_assert_eq!(deck.position(), draws.min(n));
    }

    #[test]
    fn reset_starts_a_full_new_cycle(n in 1usize..30, before in 0usize..30, seed in any::<u64>()) {
        let mut deck = deck(n, seed);
        for _ in 0..before {
            deck.draw();
        }
        deck.reset();
        prop_assert_eq!(deck.position(), 0);

        let drawn = draw_cycle(&mut deck);
        prop_assert_eq!(drawn.len(), n);
        prop_assert_eq!(ids(&drawn), ids(&cards(n)));
    }
}

#[test]
fn shuffle_has_no_positional_bias() {
    init_logging();
    const N: usize = 4;
    const ROUNDS: usize = 8000;

    let mut deck = deck(N, 2024);
    let mut first: HashMap<String, usize> = HashMap::new();
    let mut last: HashMap<String, usize> = HashMap::new();
    for _ in 0..ROUNDS {
        deck.reset();
        let order = deck.order();
        *first.entry(order[0].id().to_string()).or_default() += 1;
        *last.entry(order[N - 1].id().to_string()).or_default() += 1;
    }

    // expected 2000 per card, sigma is about 39
    let expected = ROUNDS / N;
    for counts in [&first, &last] {
        assert_eq!(counts.len(), N);
        for (card, &count) in counts {
            assert!(
                count.abs_diff(expected) < 250,
                "{card} landed {count} times, expected about {expected}"
            );
        }
    }
}

#[test]
fn orders_vary_between_resets() {
    let mut deck = deck(10, 77);
    let mut seen = HashSet::new();
    for _ in 0..20 {
        deck.reset();
        seen.insert(deck.order().to_vec());
    }
    assert!(seen.len() > 1);
}

#[test]
fn same_seed_same_order() {
    let a = deck(12, 5);
    let b = deck(12, 5);
    assert_eq!(a.order(), b.order());
}
