use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::card::Card;

/// A single physical deck: a shuffled order of cards and a draw cursor.
///
/// `position` counts the cards drawn in the current cycle. The deck never
/// reshuffles on its own; once exhausted every `draw` returns `None` until
/// `reset` is called.
#[derive(Debug, Clone)]
pub struct Deck<R = StdRng> {
    order: Vec<Card>,
    position: usize,
    rng: R,
}

impl Deck<StdRng> {
    /// Builds a deck seeded from OS entropy.
    pub fn new<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self::with_rng(cards, StdRng::from_entropy())
    }

    /// Builds a reproducible deck; the same seed yields the same orders.
    pub fn seeded<I: IntoIterator<Item = Card>>(cards: I, seed: u64) -> Self {
        Self::with_rng(cards, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Deck<R> {
    /// Duplicate identifiers are collapsed to their first occurrence.
    pub fn with_rng<I: IntoIterator<Item = Card>>(cards: I, rng: R) -> Self {
        let mut seen = HashSet::new();
        let order = cards
            .into_iter()
            .filter(|card| seen.insert(card.id().clone()))
            .collect();
        let mut deck = Self {
            order,
            position: 0,
            rng,
        };
        deck.order.shuffle(&mut deck.rng);
        deck
    }

    pub fn draw(&mut self) -> Option<Card> {
        let card = self.order.get(self.position)?.clone();
        self.position += 1;
        Some(card)
    }

    /// Reshuffles the full card set and rewinds the cursor.
    pub fn reset(&mut self) {
        self.order.shuffle(&mut self.rng);
        self.position = 0;
    }
}

impl<R> Deck<R> {
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.order.len() - self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.position == self.order.len()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The current cycle's order, drawn cards included.
    pub fn order(&self) -> &[Card] {
        &self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| Card::new(format!("card-{i}"), format!("/img/{i}.png")))
            .collect()
    }

    #[test]
    fn fresh_deck_starts_at_zero() {
        let deck = Deck::seeded(cards(5), 1);
        assert_eq!(deck.position(), 0);
        assert_eq!(deck.remaining(), 5);
        assert!(!deck.is_exhausted());
    }

    #[test]
    fn draw_advances_cursor_until_exhausted() {
        let mut deck = Deck::seeded(cards(3), 7);
        for drawn in 1..=3 {
            assert!(deck.draw().is_some());
            assert_eq!(deck.position(), drawn);
            assert_eq!(deck.remaining(), 3 - drawn);
        }
        assert!(deck.is_exhausted());
        assert_eq!(deck.draw(), None);
        assert_eq!(deck.position(), 3);
    }

    #[test]
    fn draw_follows_order() {
        let mut deck = Deck::seeded(cards(4), 42);
        let expected = deck.order().to_vec();
        let drawn: Vec<Card> = std::iter::from_fn(|| deck.draw()).collect();
        assert_eq!(drawn, expected);
    }

    #[test]
    fn reset_rewinds_mid_cycle() {
        let mut deck = Deck::seeded(cards(4), 3);
        deck.draw();
        deck.draw();
        deck.reset();
        assert_eq!(deck.position(), 0);
        assert_eq!(deck.remaining(), 4);
    }

    #[test]
    fn empty_deck_is_exhausted_immediately() {
        let mut deck = Deck::seeded(Vec::new(), 0);
        assert!(deck.is_exhausted());
        assert_eq!(deck.remaining(), 0);
        assert_eq!(deck.draw(), None);
        deck.reset();
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn duplicate_ids_are_collapsed() {
        let mut input = cards(3);
        input.push(Card::new("card-1", "/img/other.png"));
        let deck = Deck::seeded(input, 9);
        assert_eq!(deck.len(), 3);
    }
}
