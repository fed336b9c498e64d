//! Dealing the deck out to both players.

use super::{Game, GameState};
use crate::error::DealError;
use crate::result::DealSummary;

impl Game {
    /// Deals the whole deck, alternating between the players.
    ///
    /// Player 1 receives the first card, so it never holds fewer cards than
    /// player 2. A full deck gives each player 26 cards. The deck is empty
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the cards have already been dealt.
    pub fn deal(&mut self) -> Result<DealSummary, DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        let mut to_player1 = true;
        while let Some(card) = self.deck.draw() {
            if to_player1 {
                self.player1.receive_card(card);
            } else {
                self.player2.receive_card(card);
            }
            to_player1 = !to_player1;
        }

        let summary = DealSummary {
            player1: self.player1.hand_len(),
            player2: self.player2.hand_len(),
        };
        log::debug!(
            "dealt {} cards to {} and {} to {}",
            summary.player1,
            self.player1.name(),
            summary.player2,
            self.player2.name()
        );

        self.update_state();
        Ok(summary)
    }
}
