//! Player representation.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::string::String;

use crate::card::{self, Card};

/// Who controls a player.
///
/// Both kinds play identically; the kind is only shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerKind {
    /// A human at the terminal.
    #[default]
    Human,
    /// A computer opponent.
    Ai,
}

/// A player in a match.
#[derive(Debug, Clone)]
pub struct Player {
    /// Display name.
    name: String,
    /// Who controls this player.
    kind: PlayerKind,
    /// Cards in hand; the front is played next.
    hand: VecDeque<Card>,
    /// Rounds won so far.
    score: u32,
}

impl Player {
    /// Creates a player with an empty hand and no points.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            hand: VecDeque::new(),
            score: 0,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns who controls the player.
    #[must_use]
    pub const fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Returns the number of rounds won.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    pub(crate) const fn award_point(&mut self) {
        self.score += 1;
    }

    /// Removes and returns the front card of the hand, or `None` if the hand
    /// is empty.
    pub fn play_card(&mut self) -> Option<Card> {
        self.hand.pop_front()
    }

    /// Appends a card to the back of the hand.
    pub fn receive_card(&mut self, card: Card) {
        self.hand.push_back(card);
    }

    /// Iterates over the hand, next card first.
    pub fn hand(&self) -> impl Iterator<Item = &Card> + '_ {
        self.hand.iter()
    }

    /// Returns the number of cards in hand.
    #[must_use]
    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the player still holds cards.
    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.hand.is_empty()
    }

    /// Returns the highest-ranked card in hand.
    #[must_use]
    pub fn highest_card(&self) -> Option<Card> {
        card::highest(&self.hand)
    }
}
