//! Single-deck construction, shuffling, and drawing.

extern crate alloc;

use alloc::vec::Vec;

use rand::RngCore;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered deck of cards, drawn from the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled standard 52-card deck.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a standard deck and shuffles it with `rng`.
    #[must_use]
    pub fn shuffled<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle(rng);
        deck
    }

    /// Creates a stacked deck where `draws[0]` is the first card drawn.
    ///
    /// The deck is not validated: it may hold fewer than 52 cards or repeat
    /// cards. Replays and tests use it to fix the deal.
    ///
    /// ```
    /// use starjack::{Card, Deck, Rank, Suit};
    ///
    /// let mut deck = Deck::from_draw_order(&[
    ///     Card::new(Suit::Spades, Rank::Ace),
    ///     Card::new(Suit::Hearts, Rank::King),
    /// ]);
    /// assert_eq!(deck.draw().map(|c| c.rank), Some(Rank::Ace));
    /// assert_eq!(deck.draw().map(|c| c.rank), Some(Rank::King));
    /// assert!(deck.draw().is_none());
    /// ```
    #[must_use]
    pub fn from_draw_order(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Shuffles the remaining cards in place (Fisher–Yates).
    pub fn shuffle<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draws the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the number of undrawn cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the undrawn cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
