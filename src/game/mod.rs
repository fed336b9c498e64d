//! Game engine and state management.

use crate::deck::Deck;
use crate::error::DealError;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::{MatchOutcome, MatchResult, Score};

mod deal;
mod round;
pub mod state;
mod war;

pub use state::{GameState, Seat};
pub use war::{WAR_BURN, WAR_STAKE};

/// A War game engine that manages the players, the deck, and round flow.
///
/// The game owns the deck and both players for the whole match. Use
/// [`GameOptions`] to name the players.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards not yet dealt.
    deck: Deck,
    /// Player dealt the first card.
    player1: Player,
    /// Player dealt the second card.
    player2: Player,
    /// Current game state.
    state: GameState,
    /// Number of rounds started so far.
    round: u32,
}

impl Game {
    /// Creates a new game whose deck is shuffled with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Dealing);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_deck(options, Deck::new(seed))
    }

    /// Creates a new game that will deal from `deck` as is.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Card, Deck, Game, GameOptions, Rank, Suit};
    ///
    /// let deck = Deck::from_cards(vec![
    ///     Card::new(Rank::Two, Suit::Hearts),
    ///     Card::new(Rank::Three, Suit::Hearts),
    /// ])
    /// .unwrap();
    /// let game = Game::with_deck(GameOptions::default(), deck);
    /// assert_eq!(game.deck().len(), 2);
    /// ```
    #[must_use]
    pub fn with_deck(options: GameOptions, deck: Deck) -> Self {
        let GameOptions {
            player1_name,
            player1_kind,
            player2_name,
            player2_kind,
        } = options;

        Self {
            deck,
            player1: Player::new(player1_name, player1_kind),
            player2: Player::new(player2_name, player2_kind),
            state: GameState::Dealing,
            round: 0,
        }
    }

    /// Plays a whole match: deals, then plays rounds until a hand runs out.
    ///
    /// # Errors
    ///
    /// Returns an error if the cards have already been dealt.
    pub fn play(&mut self) -> Result<MatchResult, DealError> {
        self.deal()?;

        while self.player1.has_cards() && self.player2.has_cards() {
            if let Err(err) = self.play_round() {
                log::debug!("stopping play: {err}");
                break;
            }
        }

        let result = self.result();
        log::info!(
            "match over after {} rounds: {:?} ({}-{})",
            result.rounds,
            result.outcome,
            result.score.player1,
            result.score.player2
        );
        Ok(result)
    }

    /// Returns the match result for the current scores.
    ///
    /// The result is final once the state is [`GameState::GameOver`].
    #[must_use]
    pub fn result(&self) -> MatchResult {
        let score = self.score();
        let outcome = match score.player1.cmp(&score.player2) {
            core::cmp::Ordering::Greater => MatchOutcome::Winner(Seat::Player1),
            core::cmp::Ordering::Less => MatchOutcome::Winner(Seat::Player2),
            core::cmp::Ordering::Equal => MatchOutcome::Draw,
        };

        MatchResult {
            score,
            rounds: self.round,
            outcome,
        }
    }

    /// Returns the current score.
    #[must_use]
    pub const fn score(&self) -> Score {
        Score {
            player1: self.player1.score(),
            player2: self.player2.score(),
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the number of rounds started so far.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.round
    }

    /// Returns the player in `seat`.
    #[must_use]
    pub const fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::Player1 => &self.player1,
            Seat::Player2 => &self.player2,
        }
    }

    /// Returns the player in `seat` mutably, e.g. to hand it extra cards.
    pub const fn player_mut(&mut self, seat: Seat) -> &mut Player {
        match seat {
            Seat::Player1 => &mut self.player1,
            Seat::Player2 => &mut self.player2,
        }
    }

    /// Returns the undealt cards.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the first seat whose hand is empty.
    fn empty_hand(&self) -> Option<Seat> {
        Seat::ALL
            .into_iter()
            .find(|&seat| !self.player(seat).has_cards())
    }

    /// Moves to [`GameState::GameOver`] once a hand has run out.
    fn update_state(&mut self) {
        self.state = if self.empty_hand().is_some() {
            GameState::GameOver
        } else {
            GameState::InProgress
        };
    }
}
