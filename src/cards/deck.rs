//! The deck: a finite, ordered card supply.
//!
//! A fresh deck holds the 52 standard cards plus two jokers. Cards are
//! consumed by drawing from the top and never return for the rest of the
//! game session. Exhaustion is a normal terminal state - `draw` returns
//! `None` and `draw_multiple` returns short, neither is an error.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

use super::card::{Card, CardId, Rank, Suit};

/// An ordered supply of cards, drawn from the top.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Create an unshuffled deck: 52 standard cards plus two jokers.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(54);
        let mut next_id = 0u32;

        for suit in Suit::STANDARD {
            for rank in Rank::STANDARD {
                cards.push(Card::new(CardId::new(next_id), suit, rank));
                next_id += 1;
            }
        }

        for _ in 0..2 {
            cards.push(Card::new(CardId::new(next_id), Suit::Joker, Rank::Joker));
            next_id += 1;
        }

        Self { cards }
    }

    /// Shuffle the deck in place (Fisher-Yates via the game RNG).
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Draw the top card, or `None` if the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw up to `count` cards. Returns fewer (possibly zero) once the
    /// deck runs out; callers check the length, not an error.
    pub fn draw_multiple(&mut self, count: usize) -> Vec<Card> {
        let take = count.min(self.cards.len());
        self.cards.split_off(self.cards.len() - take)
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Has every card been drawn?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
