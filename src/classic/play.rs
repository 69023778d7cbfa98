use alloc::string::String;
use alloc::vec::Vec;

use crate::error::SessionError;
use crate::payout::payout;
use crate::result::{PlayerRoundResult, RoundReport};
use crate::rules::{self, Round};

use super::{Session, SessionPhase};

impl Session {
    /// Draws one card and resolves the round for every active player.
    ///
    /// The first draw of a game locks every bettor's bet. Losers are
    /// eliminated; round-five winners are paid and leave the game. If the
    /// deck runs out mid-game every active player loses and the report has
    /// no card.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, nobody has bet, an active player
    /// has no choice or cannot cover their bet, or the deck is empty before
    /// bets are locked.
    pub fn draw(&mut self) -> Result<RoundReport, SessionError> {
        match self.phase {
            SessionPhase::Betting => self.lock_bets()?,
            SessionPhase::Playing => self.ensure_choices(&self.active)?,
            SessionPhase::GameOver => return Err(SessionError::InvalidState),
        }

        let round = self.round;
        let card = self.deck.draw();
        match card {
            Some(card) => self.drawn.push(card),
            None => tracing::warn!("deck exhausted mid-game"),
        }

        let multiplier = self.options.multipliers.get(round);
        let rounding = self.options.payout_rounding;
        let mut results = Vec::with_capacity(self.active.len());
        let mut still_active = Vec::with_capacity(self.active.len());

        for name in &self.active {
            let Some(player) = self.players.get_mut(name) else {
                continue;
            };
            let won = card.is_some()
                && player
                    .choice
                    .and_then(|guess| rules::evaluate(round, guess, &self.drawn))
                    .unwrap_or(false);
            player.choice = None;

            let mut paid = 0;
            if !won {
                player.eliminated = true;
                player.last_bet = 0;
                tracing::debug!(name = name.as_str(), round = round.number(), "eliminated");
            } else if round.is_last() {
                paid = payout(player.last_bet, multiplier, rounding);
                player.chips += paid;
                player.last_bet = 0;
                tracing::info!(name = name.as_str(), payout = paid, "cleared all rounds");
            } else {
                still_active.push(name.clone());
            }

            results.push(PlayerRoundResult {
                name: name.clone(),
                won,
                payout: paid,
            });
        }

        self.active = still_active;
        tracing::debug!(
            round = round.number(),
            ?card,
            active = self.active.len(),
            "classic round drawn"
        );

        let game_over = match round.next() {
            Some(next) if !self.active.is_empty() => {
                self.round = next;
                false
            }
            _ => {
                self.end_game();
                true
            }
        };

        Ok(RoundReport {
            card,
            round,
            players: results,
            game_over,
        })
    }

    /// Pays the named player at the multiplier of the last round won and
    /// removes them from the game.
    ///
    /// Returns the chips paid.
    ///
    /// # Errors
    ///
    /// Returns an error if the player cannot be found, is not riding, or
    /// has not won a round yet.
    pub fn cash_out(&mut self, name: &str) -> Result<usize, SessionError> {
        let amount = self.cash_out_value(name)?;

        let player = self
            .players
            .get_mut(name)
            .ok_or(SessionError::PlayerNotFound)?;
        player.chips += amount;
        player.last_bet = 0;
        player.historical_bet = 0;
        player.choice = None;
        self.active.retain(|active| active != name);

        tracing::info!(name, payout = amount, round = self.round.number(), "cashed out");

        if self.active.is_empty() {
            self.end_game();
        }
        Ok(amount)
    }

    /// Returns what the named player would receive by cashing out now.
    ///
    /// # Errors
    ///
    /// Returns an error if the player cannot be found, is not riding, or
    /// has not won a round yet.
    pub fn cash_out_value(&self, name: &str) -> Result<usize, SessionError> {
        let player = self.players.get(name).ok_or(SessionError::PlayerNotFound)?;

        if self.phase != SessionPhase::Playing || !self.active.iter().any(|active| active == name) {
            return Err(SessionError::InvalidState);
        }
        let last_won = self.round.previous().ok_or(SessionError::InvalidState)?;

        Ok(payout(
            player.last_bet,
            self.options.multipliers.get(last_won),
            self.options.payout_rounding,
        ))
    }

    /// Validates the bettors and locks their bets for the game.
    fn lock_bets(&mut self) -> Result<(), SessionError> {
        let bettors = self.bettors();
        if bettors.is_empty() {
            return Err(SessionError::NoActivePlayers);
        }
        self.ensure_choices(&bettors)?;

        for name in &bettors {
            let player = self.players.get(name).ok_or(SessionError::PlayerNotFound)?;
            if player.chips < player.last_bet {
                return Err(SessionError::InsufficientChips);
            }
        }

        if self.deck.is_empty() {
            return Err(SessionError::DeckExhausted);
        }

        for name in &bettors {
            if let Some(player) = self.players.get_mut(name) {
                player.historical_bet = player.last_bet;
                player.chips -= player.last_bet;
            }
        }

        tracing::info!(players = bettors.len(), "bets locked");
        self.active = bettors;
        self.phase = SessionPhase::Playing;
        self.round = Round::One;
        Ok(())
    }

    fn ensure_choices(&self, names: &[String]) -> Result<(), SessionError> {
        let missing = names.iter().any(|name| {
            self.players
                .get(name)
                .is_none_or(|player| player.choice.is_none())
        });
        if missing {
            return Err(SessionError::MissingChoices);
        }
        Ok(())
    }
}
