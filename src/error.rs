//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;
use crate::game::Seat;

/// Errors that can occur when building a deck from explicit cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// More cards than a standard deck holds.
    #[error("deck holds {0} cards, at most 52 allowed")]
    TooManyCards(usize),
    /// The same card appears twice.
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Cards have already been dealt.
    #[error("invalid game state for dealing")]
    InvalidState,
}

/// Reasons a round could not be completed.
///
/// None of these are fatal: they tell the caller to stop playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Cards have not been dealt yet.
    #[error("invalid game state for playing a round")]
    InvalidState,
    /// A player had no card to play when the round started.
    #[error("{0} has no cards left")]
    HandEmpty(Seat),
    /// A player ran out of cards in the middle of a war.
    #[error("war aborted: {0} ran out of cards")]
    WarAborted(Seat),
}
