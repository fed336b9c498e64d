//! Round and match result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::{Seat, WAR_BURN};

/// Points held by each player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    /// Rounds won by player 1.
    pub player1: u32,
    /// Rounds won by player 2.
    pub player2: u32,
}

impl Score {
    /// Returns the points held by `seat`.
    #[must_use]
    pub const fn of(&self, seat: Seat) -> u32 {
        match seat {
            Seat::Player1 => self.player1,
            Seat::Player2 => self.player2,
        }
    }
}

/// Number of cards dealt to each player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealSummary {
    /// Cards dealt to player 1.
    pub player1: usize,
    /// Cards dealt to player 2.
    pub player2: usize,
}

/// One iteration of a war: three burned cards and a decider per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarBattle {
    /// Cards player 1 burned face down.
    pub player1_burned: [Card; WAR_BURN],
    /// Cards player 2 burned face down.
    pub player2_burned: [Card; WAR_BURN],
    /// Player 1's face-up decider.
    pub player1_card: Card,
    /// Player 2's face-up decider.
    pub player2_card: Card,
}

/// Result of a completed round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Round number, starting at 1.
    pub round: u32,
    /// Card player 1 opened the round with.
    pub player1_card: Card,
    /// Card player 2 opened the round with.
    pub player2_card: Card,
    /// Wars fought to break ties, in order. Empty if the opening cards
    /// differed.
    pub wars: Vec<WarBattle>,
    /// Player who could not afford a war and lost by default.
    pub forfeit: Option<Seat>,
    /// Winner of the round.
    pub winner: Seat,
    /// Score after the round.
    pub score: Score,
}

impl RoundOutcome {
    /// Returns whether the round went to war.
    #[must_use]
    pub fn went_to_war(&self) -> bool {
        !self.wars.is_empty() || self.forfeit.is_some()
    }
}

/// Final verdict of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// One player scored more rounds.
    Winner(Seat),
    /// Both players scored the same.
    Draw,
}

/// Result of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    /// Final score.
    pub score: Score,
    /// Number of rounds started, including one abandoned mid-war.
    pub rounds: u32,
    /// Winner, or draw.
    pub outcome: MatchOutcome,
}
