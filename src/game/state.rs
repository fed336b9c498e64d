//! Game state types.

use core::fmt;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the deck to be dealt.
    Dealing,
    /// Both players hold cards; rounds can be played.
    InProgress,
    /// At least one hand is empty; the match is decided.
    GameOver,
}

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The player dealt the first card.
    Player1,
    /// The other player.
    Player2,
}

impl Seat {
    /// Both seats, in dealing order.
    pub const ALL: [Self; 2] = [Self::Player1, Self::Player2];

    /// Returns the other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player1 => Self::Player2,
            Self::Player2 => Self::Player1,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player1 => f.write_str("player 1"),
            Self::Player2 => f.write_str("player 2"),
        }
    }
}
