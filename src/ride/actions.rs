use crate::error::RideError;
use crate::payout::payout;
use crate::result::{DrawResult, RideOutcome};
use crate::rules::{self, Guess};

use super::{Phase, Ride};

impl Ride {
    /// Sets the bet for this ride.
    ///
    /// A bet of zero is accepted but blocks choosing and drawing.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is already locked or the ride is not
    /// waiting for a guess, or if the amount exceeds the available chips.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), RideError> {
        if self.phase != Phase::Betting || self.bet_locked {
            return Err(RideError::InvalidState);
        }

        if amount > self.chips {
            return Err(RideError::InsufficientChips);
        }

        self.bet = amount;
        Ok(())
    }

    /// Records the guess for the current round.
    ///
    /// # Errors
    ///
    /// Returns an error if the ride is not waiting for a guess, the bet is
    /// zero, or the guess belongs to another round.
    pub fn place_choice(&mut self, guess: Guess) -> Result<(), RideError> {
        if self.phase != Phase::Betting || self.bet == 0 {
            return Err(RideError::InvalidState);
        }

        if !guess.fits(self.round) {
            return Err(RideError::InvalidChoice);
        }

        self.choice = Some(guess);
        Ok(())
    }

    /// Draws the next card and resolves the current round.
    ///
    /// The first draw deducts the bet and locks it for the whole ride.
    ///
    /// # Errors
    ///
    /// Returns an error if the ride is not waiting for a draw, no bet or
    /// guess is set, the chips cannot cover an unlocked bet, or the deck is
    /// empty. Nothing is mutated on error.
    pub fn draw(&mut self) -> Result<DrawResult, RideError> {
        if self.phase != Phase::Betting || self.bet == 0 {
            return Err(RideError::InvalidState);
        }
        let guess = self.choice.ok_or(RideError::InvalidState)?;

        if !self.bet_locked && self.chips < self.bet {
            return Err(RideError::InsufficientChips);
        }

        if self.deck.is_empty() {
            return Err(RideError::DeckExhausted);
        }

        if !self.bet_locked {
            self.chips -= self.bet;
            self.bet_locked = true;
            tracing::debug!(bet = self.bet, chips = self.chips, "bet locked for ride");
        }

        self.phase = Phase::Playing;
        let round = self.round;
        let Some(card) = self.deck.draw() else {
            return Err(RideError::DeckExhausted);
        };
        self.drawn.push(card);

        let won = rules::evaluate(round, guess, &self.drawn).unwrap_or(false);
        tracing::debug!(round = round.number(), %card, won, "round drawn");

        let outcome = if !won {
            let outcome = RideOutcome::Lost { round };
            self.resolve(outcome);
            Some(outcome)
        } else if let Some(next) = round.next() {
            self.round = next;
            self.phase = Phase::Betting;
            self.choice = None;
            None
        } else {
            let amount = payout(self.bet, self.multipliers.get(round), self.rounding);
            self.chips += amount;
            let outcome = RideOutcome::Cleared { payout: amount };
            self.resolve(outcome);
            Some(outcome)
        };

        Ok(DrawResult {
            card,
            round,
            won,
            outcome,
        })
    }

    /// Ends the ride and pays the multiplier of the last round won.
    ///
    /// # Errors
    ///
    /// Returns an error unless the ride is waiting for a guess past round one.
    pub fn cash_out(&mut self) -> Result<RideOutcome, RideError> {
        let amount = self.cash_out_value().ok_or(RideError::InvalidState)?;
        let Some(last_won) = self.round.previous() else {
            return Err(RideError::InvalidState);
        };

        self.chips += amount;
        let outcome = RideOutcome::CashedOut {
            round: last_won,
            payout: amount,
        };
        self.resolve(outcome);
        Ok(outcome)
    }

    /// Abandons the ride as a loss of the current round.
    ///
    /// An unlocked bet is deducted first, so the bet is forfeited exactly as
    /// if the round had been drawn and lost.
    ///
    /// # Errors
    ///
    /// Returns an error if the ride has already ended.
    pub fn forfeit(&mut self) -> Result<RideOutcome, RideError> {
        if self.phase == Phase::Resolved {
            return Err(RideError::InvalidState);
        }

        if !self.bet_locked {
            self.chips -= self.bet.min(self.chips);
            self.bet_locked = true;
        }

        let outcome = RideOutcome::Lost { round: self.round };
        tracing::warn!(round = self.round.number(), "ride forfeited");
        self.resolve(outcome);
        Ok(outcome)
    }
}
