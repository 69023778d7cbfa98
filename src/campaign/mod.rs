//! Single-player campaign runs: quotas, attempts, profit, and upgrades.

use core::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::CampaignError;
use crate::options::{GameOptions, RoundingMode};
use crate::payout::{MultiplierTable, round_amount};
use crate::result::{RideConclusion, RunEnd, RunReport};
use crate::ride::Ride;
use crate::snapshot::Snapshot;

mod play;
mod quota;
pub mod shop;

pub use shop::{ShopLedger, UpgradeId, UpgradeListing, Upgrades};

/// Run-level bookkeeping that persists across quota levels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CampaignRunState {
    /// Whether a run is in progress.
    pub active: bool,
    /// Chips needed at the end of the current level.
    pub quota: usize,
    /// Banked profit available to the shop.
    pub profit: usize,
    /// Quota levels cleared so far.
    pub quotas_cleared: u32,
    /// Attempts left at the current level.
    pub attempts_left: u8,
    /// Upgrades bought this run.
    pub upgrades: Upgrades,
}

/// A deferred transition the host must trigger after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingTransition {
    /// How long the host should wait before calling
    /// [`Campaign::start_new_ride_sequence`].
    pub delay: Duration,
}

/// Where a campaign currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CampaignStatus {
    /// No run has been started.
    Idle,
    /// A ride is accepting commands.
    Riding,
    /// A ride concluded and the next one is waiting on the host's timer.
    RideConcluded(PendingTransition),
    /// The quota was met and the shop is open.
    Shop,
    /// The run is over.
    RunOver(RunReport),
}

/// A campaign run manager.
///
/// Owns the run state, the chip stack (through the current [`Ride`]), and the
/// random source used to shuffle each ride's deck.
#[derive(Debug, Clone)]
pub struct Campaign {
    /// Game options.
    options: GameOptions,
    /// Run bookkeeping.
    run: CampaignRunState,
    /// Current status.
    status: CampaignStatus,
    /// The ride in play (or the last one played).
    ride: Ride,
    /// Base multipliers plus purchased bonuses.
    multipliers: MultiplierTable,
    /// Share of chips the player last chose to bet.
    bet_fraction: f64,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Campaign {
    /// Creates a campaign with the given seed. Call
    /// [`start_new_run`](Self::start_new_run) to begin playing.
    ///
    /// # Example
    ///
    /// ```
    /// use ridebus::{Campaign, CampaignStatus, GameOptions};
    ///
    /// let mut campaign = Campaign::new(GameOptions::default(), 42);
    /// campaign.start_new_run();
    /// assert_eq!(campaign.status(), CampaignStatus::Riding);
    /// assert_eq!(campaign.chips(), 1000);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let multipliers = options.multipliers;
        let bet_fraction = options.initial_bet_fraction;
        let rounding = options.payout_rounding;

        Self {
            options,
            run: CampaignRunState::default(),
            status: CampaignStatus::Idle,
            ride: Ride::start(0, 0, Deck::from_draws(&[]), multipliers, rounding),
            multipliers,
            bet_fraction,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Starts a fresh run, discarding any previous one.
    pub fn start_new_run(&mut self) {
        self.run = CampaignRunState {
            active: true,
            quota: self.options.initial_quota,
            profit: 0,
            quotas_cleared: 0,
            attempts_left: self.options.attempts_per_quota,
            upgrades: Upgrades::default(),
        };
        self.multipliers = self
            .options
            .multipliers
            .with_bonuses(&self.run.upgrades.multiplier_bonuses);
        self.bet_fraction = self.options.initial_bet_fraction;

        tracing::info!(
            quota = self.run.quota,
            attempts = self.run.attempts_left,
            "campaign run started"
        );
        self.start_attempt_for_quota();
    }

    /// Starts the next ride with the chips left by the previous one.
    ///
    /// This is the callback for a [`PendingTransition`].
    ///
    /// # Errors
    ///
    /// Returns an error unless a ride has concluded and the next one is
    /// pending.
    pub fn start_new_ride_sequence(&mut self) -> Result<(), CampaignError> {
        match self.status {
            CampaignStatus::RideConcluded(_) => {}
            CampaignStatus::RunOver(_) => return Err(CampaignError::RunOver),
            _ => return Err(CampaignError::InvalidState),
        }

        let chips = self.ride.chips();
        self.begin_ride(chips);
        tracing::debug!(
            chips,
            attempts_left = self.run.attempts_left,
            "new ride sequence"
        );
        Ok(())
    }

    /// Leaves the run and resets it, returning the final report.
    ///
    /// # Errors
    ///
    /// Returns an error if no run has been started.
    pub fn exit_run(&mut self) -> Result<RunReport, CampaignError> {
        let report = match self.status {
            CampaignStatus::Idle => return Err(CampaignError::InvalidState),
            CampaignStatus::RunOver(report) => report,
            _ => self.report(RunEnd::Exited),
        };

        self.run = CampaignRunState::default();
        self.status = CampaignStatus::Idle;
        self.ride = Ride::start(
            0,
            0,
            Deck::from_draws(&[]),
            self.multipliers,
            self.options.payout_rounding,
        );
        tracing::info!(?report, "campaign run exited");
        Ok(report)
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the run state.
    #[must_use]
    pub const fn run(&self) -> &CampaignRunState {
        &self.run
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> CampaignStatus {
        self.status
    }

    /// Returns the current (or last) ride.
    #[must_use]
    pub const fn ride(&self) -> &Ride {
        &self.ride
    }

    /// Replaces the remaining deck of the current ride.
    pub fn replace_deck(&mut self, deck: Deck) {
        self.ride.replace_deck(deck);
    }

    /// Returns the player's chips.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.ride.chips()
    }

    /// Returns the multipliers in effect, including purchased bonuses.
    #[must_use]
    pub const fn multipliers(&self) -> &MultiplierTable {
        &self.multipliers
    }

    /// Returns the share of chips carried into the next ride's opening bet.
    #[must_use]
    pub const fn bet_fraction(&self) -> f64 {
        self.bet_fraction
    }

    /// Returns the renderer snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            status: self.status,
            phase: self.ride.phase(),
            round: self.ride.round(),
            chips: self.ride.chips(),
            bet: self.ride.bet(),
            bet_locked: self.ride.is_bet_locked(),
            choice: self.ride.choice(),
            quota: self.run.quota,
            attempts_left: self.run.attempts_left,
            profit: self.run.profit,
            quotas_cleared: self.run.quotas_cleared,
            drawn_cards: self.ride.drawn_cards().to_vec(),
            deck_count: self.ride.cards_remaining(),
            cash_out_value: self.ride.cash_out_value(),
        }
    }

    /// Resets the chips to the starting capital plus bonus and starts a ride.
    fn start_attempt_for_quota(&mut self) {
        let chips = self.options.starting_capital + self.run.upgrades.starting_chips_bonus;
        self.begin_ride(chips);
        tracing::debug!(chips, quota = self.run.quota, "quota attempt started");
    }

    fn begin_ride(&mut self, chips: usize) {
        let bet = self.seeded_bet(chips);
        self.ride = Ride::start_shuffled(
            chips,
            bet,
            self.multipliers,
            self.options.payout_rounding,
            &mut self.rng,
        );
        self.status = CampaignStatus::Riding;
    }

    /// Opening bet: the player's last bet share of `chips`, at least one chip.
    fn seeded_bet(&self, chips: usize) -> usize {
        if chips == 0 {
            return 0;
        }
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for chip amounts"
        )]
        let amount = chips as f64 * self.bet_fraction.max(0.0);
        round_amount(amount, RoundingMode::Nearest).clamp(1, chips)
    }

    fn report(&self, end: RunEnd) -> RunReport {
        RunReport {
            end,
            profit: self.run.profit,
            quotas_cleared: self.run.quotas_cleared,
        }
    }

    fn end_run(&mut self, end: RunEnd) -> RideConclusion {
        let report = self.report(end);
        self.run.active = false;
        self.status = CampaignStatus::RunOver(report);
        tracing::info!(
            ?end,
            profit = report.profit,
            quotas_cleared = report.quotas_cleared,
            "campaign run over"
        );
        RideConclusion::RunOver(report)
    }

    fn ensure_riding(&self) -> Result<(), CampaignError> {
        match self.status {
            CampaignStatus::Riding => Ok(()),
            CampaignStatus::RunOver(_) => Err(CampaignError::RunOver),
            _ => Err(CampaignError::InvalidState),
        }
    }

    const fn transition_delay(&self) -> Duration {
        self.options.ride_transition_delay
    }
}
