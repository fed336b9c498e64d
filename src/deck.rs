//! The deck of cards dealt at the start of a match.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered deck. The front of the deck is the next card drawn.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards remaining in the deck.
    cards: VecDeque<Card>,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full, shuffled 52-card deck with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new(42);
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            cards: VecDeque::with_capacity(DECK_SIZE),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.reset();
        deck
    }

    /// Creates a deck holding exactly `cards`, in the given order.
    ///
    /// The deck is not shuffled, which makes matches played from it fully
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns an error if there are more than [`DECK_SIZE`] cards or any card
    /// appears twice.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() > DECK_SIZE {
            return Err(DeckError::TooManyCards(cards.len()));
        }
        for (i, card) in cards.iter().enumerate() {
            if cards[..i].contains(card) {
                return Err(DeckError::DuplicateCard(*card));
            }
        }

        Ok(Self {
            cards: cards.into(),
            rng: ChaCha8Rng::seed_from_u64(0),
        })
    }

    /// Regenerates the full 52-card set and shuffles it.
    pub fn reset(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push_back(Card::new(rank, suit));
            }
        }
        self.shuffle();
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle(&mut self) {
        self.cards.make_contiguous().shuffle(&mut self.rng);
    }

    /// Removes and returns the front card, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
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

    /// Iterates over the remaining cards, front first.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }
}
