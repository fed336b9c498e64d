//! Round resolution.

use alloc::vec::Vec;
use core::cmp::Ordering;

use super::war::WarResolution;
use super::{Game, GameState, Seat};
use crate::error::RoundError;
use crate::result::RoundOutcome;

impl Game {
    /// Plays one round.
    ///
    /// Both players reveal their front card; the higher rank wins the round
    /// and one point. Equal ranks go to war, whose winner takes the round.
    ///
    /// # Errors
    ///
    /// Returns an error when no round could be completed:
    /// - [`RoundError::InvalidState`] before the cards are dealt.
    /// - [`RoundError::HandEmpty`] if a player had no card to play. The
    ///   round counter is left untouched.
    /// - [`RoundError::WarAborted`] if a war could not be finished. Cards
    ///   already revealed are lost and no point is scored.
    pub fn play_round(&mut self) -> Result<RoundOutcome, RoundError> {
        if self.state == GameState::Dealing {
            return Err(RoundError::InvalidState);
        }
        if let Some(seat) = self.empty_hand() {
            self.state = GameState::GameOver;
            return Err(RoundError::HandEmpty(seat));
        }

        self.round += 1;

        let player1_card = self
            .player1
            .play_card()
            .ok_or(RoundError::HandEmpty(Seat::Player1))?;
        let player2_card = self
            .player2
            .play_card()
            .ok_or(RoundError::HandEmpty(Seat::Player2))?;

        log::debug!(
            "round {}: {} plays {player1_card}, {} plays {player2_card}",
            self.round,
            self.player1.name(),
            self.player2.name()
        );

        let resolution = match player1_card.compare(&player2_card) {
            Ordering::Greater => WarResolution {
                winner: Seat::Player1,
                forfeit: None,
                battles: Vec::new(),
            },
            Ordering::Less => WarResolution {
                winner: Seat::Player2,
                forfeit: None,
                battles: Vec::new(),
            },
            Ordering::Equal => match self.resolve_war() {
                Ok(resolution) => resolution,
                Err(err) => {
                    log::debug!("round {} abandoned: {err}", self.round);
                    self.update_state();
                    return Err(err);
                }
            },
        };

        self.player_mut(resolution.winner).award_point();
        self.update_state();

        let score = self.score();
        log::debug!(
            "round {} won by {} ({}-{})",
            self.round,
            self.player(resolution.winner).name(),
            score.player1,
            score.player2
        );

        Ok(RoundOutcome {
            round: self.round,
            player1_card,
            player2_card,
            wars: resolution.battles,
            forfeit: resolution.forfeit,
            winner: resolution.winner,
            score,
        })
    }
}
