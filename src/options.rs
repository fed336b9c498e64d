//! Game configuration options.

extern crate alloc;

use alloc::string::String;

use crate::player::PlayerKind;

/// Configuration options for a match.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use warrs::{GameOptions, PlayerKind};
///
/// let options = GameOptions::default()
///     .with_player1_name("Alice")
///     .with_player2_name("Computer")
///     .with_player2_kind(PlayerKind::Ai);
/// assert_eq!(options.player1_name, "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Name of the player dealt the first card.
    pub player1_name: String,
    /// Who controls player 1.
    pub player1_kind: PlayerKind,
    /// Name of the second player.
    pub player2_name: String,
    /// Who controls player 2.
    pub player2_kind: PlayerKind,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            player1_name: String::from("Player 1"),
            player1_kind: PlayerKind::Human,
            player2_name: String::from("Player 2"),
            player2_kind: PlayerKind::Ai,
        }
    }
}

impl GameOptions {
    /// Sets the name of player 1.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_player1_name("Maurane");
    /// assert_eq!(options.player1_name, "Maurane");
    /// ```
    #[must_use]
    pub fn with_player1_name(mut self, name: impl Into<String>) -> Self {
        self.player1_name = name.into();
        self
    }

    /// Sets the name of player 2.
    #[must_use]
    pub fn with_player2_name(mut self, name: impl Into<String>) -> Self {
        self.player2_name = name.into();
        self
    }

    /// Sets who controls player 1.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{GameOptions, PlayerKind};
    ///
    /// let options = GameOptions::default().with_player1_kind(PlayerKind::Ai);
    /// assert_eq!(options.player1_kind, PlayerKind::Ai);
    /// ```
    #[must_use]
    pub const fn with_player1_kind(mut self, kind: PlayerKind) -> Self {
        self.player1_kind = kind;
        self
    }

    /// Sets who controls player 2.
    #[must_use]
    pub const fn with_player2_kind(mut self, kind: PlayerKind) -> Self {
        self.player2_kind = kind;
        self
    }
}
