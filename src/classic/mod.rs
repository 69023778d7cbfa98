//! Classic multiplayer sessions: one shared deck, independent stacks.

use alloc::string::String;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::SessionError;
use crate::options::GameOptions;
use crate::rules::Round;

mod play;
mod player;

pub use player::Player;

/// Phase of a classic game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionPhase {
    /// Players set bets and round-one guesses.
    Betting,
    /// Bets are locked and rounds are being drawn.
    Playing,
    /// Every player has lost, cleared, or cashed out.
    GameOver,
}

/// A classic session: a roster of players riding one shared deck.
///
/// Every player bets and guesses independently; a single draw resolves the
/// round for all of them.
#[derive(Debug, Clone)]
pub struct Session {
    /// Game options.
    options: GameOptions,
    /// Players by name.
    players: HashMap<String, Player>,
    /// Roster order.
    order: Vec<String>,
    /// Players still riding this game, in roster order.
    active: Vec<String>,
    /// Current phase.
    phase: SessionPhase,
    /// Current round.
    round: Round,
    /// Cards drawn this game.
    drawn: Vec<Card>,
    /// Remaining cards.
    deck: Deck,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Session {
    /// Creates an empty session with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use ridebus::{GameOptions, Session, SessionPhase};
    ///
    /// let mut session = Session::new(GameOptions::default(), 7);
    /// session.add_player_or_loan("ada", 100);
    /// assert_eq!(session.phase(), SessionPhase::Betting);
    /// assert_eq!(session.player("ada").map(|p| p.chips), Some(100));
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);

        Self {
            options,
            players: HashMap::new(),
            order: Vec::new(),
            active: Vec::new(),
            phase: SessionPhase::Betting,
            round: Round::One,
            drawn: Vec::new(),
            deck,
            rng,
        }
    }

    /// Starts a new game with a reshuffled deck.
    ///
    /// Chip balances carry over; choices and eliminations are cleared. The
    /// active set is every player with a bet.
    ///
    /// # Errors
    ///
    /// Returns an error while a game is being played.
    pub fn start_new_game(&mut self) -> Result<(), SessionError> {
        if self.phase == SessionPhase::Playing {
            return Err(SessionError::InvalidState);
        }

        self.phase = SessionPhase::Betting;
        self.round = Round::One;
        self.drawn.clear();
        self.deck = Deck::shuffled(&mut self.rng);

        for player in self.players.values_mut() {
            player.choice = None;
            player.eliminated = false;
        }
        self.active = self.bettors();

        tracing::info!(bettors = self.active.len(), "classic game started");
        Ok(())
    }

    /// Clears the roster and starts over.
    pub fn reset_roster(&mut self) {
        self.players.clear();
        self.order.clear();
        self.active.clear();
        self.phase = SessionPhase::Betting;
        self.round = Round::One;
        self.drawn.clear();
        self.deck = Deck::shuffled(&mut self.rng);
        tracing::info!("roster reset");
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Returns the current round.
    #[must_use]
    pub const fn round(&self) -> Round {
        self.round
    }

    /// Returns the named player.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.get(name)
    }

    /// Returns every player in roster order.
    pub fn players(&self) -> impl Iterator<Item = (&str, &Player)> {
        self.order
            .iter()
            .filter_map(|name| self.players.get(name).map(|p| (name.as_str(), p)))
    }

    /// Returns the names of players still riding this game.
    #[must_use]
    pub fn active_players(&self) -> &[String] {
        &self.active
    }

    /// Returns the cards drawn this game.
    #[must_use]
    pub fn drawn_cards(&self) -> &[Card] {
        &self.drawn
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the next card to be drawn without drawing it.
    #[must_use]
    pub fn next_card(&self) -> Option<&Card> {
        self.deck.peek()
    }

    /// Replaces the remaining deck.
    pub fn replace_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }

    /// Players with a bet who have not been eliminated, in roster order.
    fn bettors(&self) -> Vec<String> {
        self.players()
            .filter(|(_, player)| player.last_bet > 0 && !player.eliminated)
            .map(|(name, _)| String::from(name))
            .collect()
    }

    /// Ends the game: bets reset, choices cleared, balances kept.
    fn end_game(&mut self) {
        self.phase = SessionPhase::GameOver;
        self.active.clear();
        for player in self.players.values_mut() {
            player.choice = None;
            player.last_bet = 0;
        }
        tracing::info!("classic game over");
    }
}
