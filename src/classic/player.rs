use alloc::string::String;
use alloc::vec::Vec;

use crate::error::SessionError;
use crate::rules::Guess;

use super::{Session, SessionPhase};

/// A classic-mode player.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    /// Chips on hand (a locked bet is already deducted).
    pub chips: usize,
    /// Bet for the current game; never above `chips` before it is locked.
    pub last_bet: usize,
    /// Guess for the current round.
    pub choice: Option<Guess>,
    /// Bet used in the last game, for "use last bet".
    pub historical_bet: usize,
    /// Outstanding loans.
    pub debt: usize,
    /// Whether the player lost a round this game.
    pub eliminated: bool,
}

impl Session {
    /// Adds a player, or lends chips to an existing one.
    ///
    /// A new player starts with `amount` chips. An existing player receives
    /// `amount` chips as a loan, which is added to their debt.
    ///
    /// Returns the player's chips afterwards.
    pub fn add_player_or_loan(&mut self, name: &str, amount: usize) -> usize {
        if let Some(player) = self.players.get_mut(name) {
            player.chips += amount;
            player.debt += amount;
            tracing::info!(name, amount, debt = player.debt, "loan granted");
            return player.chips;
        }

        self.players.insert(
            String::from(name),
            Player {
                chips: amount,
                ..Player::default()
            },
        );
        self.order.push(String::from(name));
        tracing::info!(name, chips = amount, "player added");
        amount
    }

    /// Repays as much debt as the player's chips allow.
    ///
    /// Returns the amount repaid.
    ///
    /// # Errors
    ///
    /// Returns an error if the player cannot be found, has no debt, or has
    /// no chips.
    pub fn pay_debt(&mut self, name: &str) -> Result<usize, SessionError> {
        let player = self
            .players
            .get_mut(name)
            .ok_or(SessionError::PlayerNotFound)?;

        if player.debt == 0 {
            return Err(SessionError::NoDebt);
        }

        if player.chips == 0 {
            return Err(SessionError::InsufficientChips);
        }

        let payment = player.chips.min(player.debt);
        player.chips -= payment;
        player.debt -= payment;
        tracing::info!(name, payment, debt = player.debt, "debt repaid");
        Ok(payment)
    }

    /// Sets a player's bet for the next game.
    ///
    /// A bet of zero sits the player out.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is not taking bets, the player cannot
    /// be found, or the bet exceeds their chips.
    pub fn set_bet(&mut self, name: &str, amount: usize) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Betting {
            return Err(SessionError::InvalidState);
        }

        let player = self
            .players
            .get_mut(name)
            .ok_or(SessionError::PlayerNotFound)?;

        if amount > player.chips {
            return Err(SessionError::InsufficientChips);
        }

        player.last_bet = amount;
        if amount == 0 {
            player.choice = None;
        }
        self.active = self.bettors();
        Ok(())
    }

    /// Re-places the bet the player used in their last game.
    ///
    /// Returns the bet placed.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is not taking bets, the player cannot
    /// be found, has no previous bet, or cannot cover it.
    pub fn use_last_bet(&mut self, name: &str) -> Result<usize, SessionError> {
        let player = self.players.get(name).ok_or(SessionError::PlayerNotFound)?;
        let bet = player.historical_bet;
        if bet == 0 {
            return Err(SessionError::InvalidState);
        }

        self.set_bet(name, bet)?;
        Ok(bet)
    }

    /// Records a player's guess for the current round.
    ///
    /// Before the first draw any player with a bet may guess; afterwards only
    /// players still riding may.
    ///
    /// # Errors
    ///
    /// Returns an error if the player cannot be found, is not taking part in
    /// this round, or the guess belongs to another round.
    pub fn set_choice(&mut self, name: &str, guess: Guess) -> Result<(), SessionError> {
        let player = self.players.get(name).ok_or(SessionError::PlayerNotFound)?;

        let eligible = match self.phase {
            SessionPhase::Betting => player.last_bet > 0 && !player.eliminated,
            SessionPhase::Playing => self.active.iter().any(|active| active == name),
            SessionPhase::GameOver => false,
        };
        if !eligible {
            return Err(SessionError::InvalidState);
        }

        if !guess.fits(self.round) {
            return Err(SessionError::InvalidChoice);
        }

        if let Some(player) = self.players.get_mut(name) {
            player.choice = Some(guess);
        }
        Ok(())
    }

    /// Lists players with outstanding debt, in roster order.
    #[must_use]
    pub fn debtors(&self) -> Vec<(&str, usize)> {
        self.players()
            .filter(|(_, player)| player.debt > 0)
            .map(|(name, player)| (name, player.debt))
            .collect()
    }
}
