use core::time::Duration;

use crate::error::{CampaignError, RideError};
use crate::result::{CampaignDraw, RideConclusion, RideOutcome, RunEnd};
use crate::rules::Guess;

use super::{Campaign, CampaignStatus, PendingTransition};

impl Campaign {
    /// Sets the bet for the current ride.
    ///
    /// The bet's share of the chips is remembered and seeds the opening bet
    /// of every later ride and attempt.
    ///
    /// # Errors
    ///
    /// Returns an error if no ride is accepting commands, the bet is already
    /// locked, or the amount exceeds the chips.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), CampaignError> {
        self.ensure_riding()?;
        let chips = self.ride.chips();
        self.ride.place_bet(amount)?;

        if chips > 0 {
            #[expect(
                clippy::cast_precision_loss,
                reason = "f64 has sufficient precision for chip amounts"
            )]
            let fraction = amount as f64 / chips as f64;
            self.bet_fraction = fraction;
        }
        Ok(())
    }

    /// Records the guess for the current round.
    ///
    /// # Errors
    ///
    /// Returns an error if no ride is accepting commands, the bet is zero,
    /// or the guess belongs to another round.
    pub fn set_choice(&mut self, guess: Guess) -> Result<(), CampaignError> {
        self.ensure_riding()?;
        self.ride.place_choice(guess)?;
        Ok(())
    }

    /// Draws the next card and applies the result to the run.
    ///
    /// If the deck is unexpectedly empty the ride is forfeited as a loss and
    /// concluded normally; `draw` is then `None` in the result.
    ///
    /// # Errors
    ///
    /// Returns an error if no ride is accepting commands or the ride rejects
    /// the draw.
    pub fn draw(&mut self) -> Result<CampaignDraw, CampaignError> {
        self.ensure_riding()?;
        let delay = self.transition_delay();

        match self.ride.draw() {
            Ok(draw) => {
                let conclusion = match draw.outcome {
                    Some(outcome) => self.conclude_ride(outcome, delay),
                    None => RideConclusion::Continuing,
                };
                Ok(CampaignDraw {
                    draw: Some(draw),
                    conclusion,
                })
            }
            Err(RideError::DeckExhausted) => {
                tracing::warn!("deck exhausted mid-ride");
                let outcome = self.ride.forfeit()?;
                Ok(CampaignDraw {
                    draw: None,
                    conclusion: self.conclude_ride(outcome, delay),
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Cashes out the current ride at the multiplier of the last round won.
    ///
    /// The next ride (if any) is pending with no delay.
    ///
    /// # Errors
    ///
    /// Returns an error if no ride is accepting commands or the ride is still
    /// in round one.
    pub fn cash_out(&mut self) -> Result<RideConclusion, CampaignError> {
        self.ensure_riding()?;
        let outcome = self.ride.cash_out()?;
        Ok(self.conclude_ride(outcome, Duration::ZERO))
    }

    /// Applies a concluded ride to the run.
    ///
    /// A lost ride that leaves no chips is a bust and ends the run without
    /// consuming an attempt. Any other conclusion consumes exactly one
    /// attempt; the quota is only checked once attempts run out.
    fn conclude_ride(&mut self, outcome: RideOutcome, delay: Duration) -> RideConclusion {
        let chips = self.ride.chips();

        if matches!(outcome, RideOutcome::Lost { .. }) && chips == 0 {
            tracing::warn!("busted");
            return self.end_run(RunEnd::Busted);
        }

        self.run.attempts_left = self.run.attempts_left.saturating_sub(1);
        tracing::debug!(
            attempts_left = self.run.attempts_left,
            chips,
            "attempt consumed"
        );

        if self.run.attempts_left > 0 {
            self.status = CampaignStatus::RideConcluded(PendingTransition { delay });
            RideConclusion::NextRidePending
        } else if chips >= self.run.quota {
            let banked = self.process_successful_quota_completion();
            RideConclusion::QuotaMet { banked }
        } else {
            self.end_run(RunEnd::QuotaFailed)
        }
    }
}
