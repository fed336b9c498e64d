//! War resolution: breaking a tie between two equal cards.

use alloc::vec::Vec;
use core::cmp::Ordering;

use super::{Game, Seat};
use crate::card::Card;
use crate::error::RoundError;
use crate::player::Player;
use crate::result::WarBattle;

/// Cards each player burns face down before revealing a decider.
pub const WAR_BURN: usize = 3;

/// Cards a player needs in hand to take part in a war.
pub const WAR_STAKE: usize = WAR_BURN + 1;

/// How a war ended.
#[derive(Debug)]
pub(super) struct WarResolution {
    pub(super) winner: Seat,
    /// Player who lacked the stake and lost without revealing a decider.
    pub(super) forfeit: Option<Seat>,
    pub(super) battles: Vec<WarBattle>,
}

impl Game {
    /// Fights wars until one decider beats the other.
    ///
    /// A player holding fewer than [`WAR_STAKE`] cards loses immediately;
    /// player 1 is checked first. Running out of cards while burning or
    /// revealing aborts the war.
    pub(super) fn resolve_war(&mut self) -> Result<WarResolution, RoundError> {
        let mut battles = Vec::new();

        loop {
            if let Some(seat) = Seat::ALL
                .into_iter()
                .find(|&seat| self.player(seat).hand_len() < WAR_STAKE)
            {
                log::debug!(
                    "{} has {} cards and cannot go to war",
                    self.player(seat).name(),
                    self.player(seat).hand_len()
                );
                return Ok(WarResolution {
                    winner: seat.opponent(),
                    forfeit: Some(seat),
                    battles,
                });
            }

            let player1_burned = burn(&mut self.player1, Seat::Player1)?;
            let player2_burned = burn(&mut self.player2, Seat::Player2)?;

            let player1_card = self
                .player1
                .play_card()
                .ok_or(RoundError::WarAborted(Seat::Player1))?;
            let player2_card = self
                .player2
                .play_card()
                .ok_or(RoundError::WarAborted(Seat::Player2))?;

            log::debug!(
                "war {}: {} reveals {player1_card}, {} reveals {player2_card}",
                battles.len() + 1,
                self.player1.name(),
                self.player2.name()
            );

            battles.push(WarBattle {
                player1_burned,
                player2_burned,
                player1_card,
                player2_card,
            });

            let winner = match player1_card.compare(&player2_card) {
                Ordering::Greater => Seat::Player1,
                Ordering::Less => Seat::Player2,
                Ordering::Equal => continue,
            };

            return Ok(WarResolution {
                winner,
                forfeit: None,
                battles,
            });
        }
    }
}

/// Takes the burn cards off the front of `player`'s hand.
fn burn(player: &mut Player, seat: Seat) -> Result<[Card; WAR_BURN], RoundError> {
    let mut next = || player.play_card().ok_or(RoundError::WarAborted(seat));
    Ok([next()?, next()?, next()?])
}
