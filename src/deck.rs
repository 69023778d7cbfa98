//! The 52-card deck a ride draws from.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered deck of unique cards, consumed from the top.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck {
    /// Remaining cards; the top of the deck is the end of the vector.
    cards: Vec<Card>,
}

impl Deck {
    /// Builds all 52 suit/value combinations and shuffles them.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a deck that yields `draws` in the given order.
    ///
    /// Intended for stacking a deck in tests and replays; uniqueness is not
    /// checked.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the top card without drawing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Returns a freshly built, fully shuffled deck.
pub fn new_shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Deck {
    Deck::shuffled(rng)
}
