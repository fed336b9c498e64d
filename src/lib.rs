//! A War card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages a whole match: dealing
//! the deck, resolving rounds and wars, keeping score, and deciding the
//! winner.
//!
//! # Example
//!
//! ```
//! use warrs::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let result = game.play().expect("fresh game can be dealt");
//! assert_eq!(game.state(), GameState::GameOver);
//! assert!(result.rounds > 0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, CardList, DECK_SIZE, Rank, Suit, highest};
pub use deck::Deck;
pub use error::{DealError, DeckError, RoundError};
pub use game::{Game, GameState, Seat, WAR_BURN, WAR_STAKE};
pub use options::GameOptions;
pub use player::{Player, PlayerKind};
pub use result::{DealSummary, MatchOutcome, MatchResult, RoundOutcome, Score, WarBattle};
