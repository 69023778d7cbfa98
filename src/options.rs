//! Game configuration options.

use core::time::Duration;

use crate::payout::MultiplierTable;

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Shop pricing for permanent campaign upgrades.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShopPrices {
    /// Profit spent per extra starting chip.
    pub starting_chips_cost: usize,
    /// Profit spent per multiplier step.
    pub multiplier_cost: usize,
    /// Multiplier bonus gained per `multiplier_cost` spent.
    pub multiplier_step: f64,
}

impl Default for ShopPrices {
    fn default() -> Self {
        Self {
            starting_chips_cost: 100,
            multiplier_cost: 200,
            multiplier_step: 0.1,
        }
    }
}

/// Configuration options shared by classic sessions and campaign runs.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use ridebus::GameOptions;
///
/// let options = GameOptions::default()
///     .with_attempts_per_quota(3)
///     .with_starting_capital(500)
///     .with_initial_quota(800);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Attempts (concluded rides) allowed per quota level.
    pub attempts_per_quota: u8,
    /// Chips every quota attempt starts with, before upgrades.
    pub starting_capital: usize,
    /// Quota of the first level of a run.
    pub initial_quota: usize,
    /// Factor the quota grows by after each cleared level (result is floored).
    pub quota_increase_factor: f64,
    /// Base payout multipliers per round.
    pub multipliers: MultiplierTable,
    /// Rounding mode applied to every payout.
    pub payout_rounding: RoundingMode,
    /// Pause between a drawn ride result and the next ride.
    pub ride_transition_delay: Duration,
    /// Fraction of chips bet on the first ride, before the player edits a bet.
    pub initial_bet_fraction: f64,
    /// Shop pricing.
    pub shop_prices: ShopPrices,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            attempts_per_quota: 5,
            starting_capital: 1000,
            initial_quota: 1500,
            quota_increase_factor: 1.2,
            multipliers: MultiplierTable::BASE,
            payout_rounding: RoundingMode::Up,
            ride_transition_delay: Duration::from_secs(2),
            initial_bet_fraction: 0.1,
            shop_prices: ShopPrices::default(),
        }
    }
}

impl GameOptions {
    /// Sets the number of attempts per quota level.
    ///
    /// # Example
    ///
    /// ```
    /// use ridebus::GameOptions;
    ///
    /// let options = GameOptions::default().with_attempts_per_quota(3);
    /// assert_eq!(options.attempts_per_quota, 3);
    /// ```
    #[must_use]
    pub const fn with_attempts_per_quota(mut self, attempts: u8) -> Self {
        self.attempts_per_quota = attempts;
        self
    }

    /// Sets the starting capital of each quota attempt.
    ///
    /// # Example
    ///
    /// ```
    /// use ridebus::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_capital(250);
    /// assert_eq!(options.starting_capital, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_capital(mut self, chips: usize) -> Self {
        self.starting_capital = chips;
        self
    }

    /// Sets the quota of the first level.
    ///
    /// # Example
    ///
    /// ```
    /// use ridebus::GameOptions;
    ///
    /// let options = GameOptions::default().with_initial_quota(2000);
    /// assert_eq!(options.initial_quota, 2000);
    /// ```
    #[must_use]
    pub const fn with_initial_quota(mut self, quota: usize) -> Self {
        self.initial_quota = quota;
        self
    }

    /// Sets the quota growth factor.
    ///
    /// # Example
    ///
    /// ```
    /// use ridebus::GameOptions;
    ///
    /// let options = GameOptions::default().with_quota_increase_factor(1.5);
    /// assert_eq!(options.quota_increase_factor, 1.5);
    /// ```
    #[must_use]
    pub const fn with_quota_increase_factor(mut self, factor: f64) -> Self {
        self.quota_increase_factor = factor;
        self
    }

    /// Sets the base multiplier table.
    ///
    /// # Example
    ///
    /// ```
    /// use ridebus::{GameOptions, MultiplierTable, Round};
    ///
    /// let options = GameOptions::default()
    ///     .with_multipliers(MultiplierTable::new([1.5, 2.0, 3.0, 10.0, 25.0]));
    /// assert_eq!(options.multipliers.get(Round::Five), 25.0);
    /// ```
    #[must_use]
    pub const fn with_multipliers(mut self, multipliers: MultiplierTable) -> Self {
        self.multipliers = multipliers;
        self
    }

    /// Sets the payout rounding mode.
    ///
    /// # Example
    ///
    /// ```
    /// use ridebus::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_payout_rounding(RoundingMode::Down);
    /// assert_eq!(options.payout_rounding, RoundingMode::Down);
    /// ```
    #[must_use]
    pub const fn with_payout_rounding(mut self, mode: RoundingMode) -> Self {
        self.payout_rounding = mode;
        self
    }

    /// Sets the pause between a drawn ride result and the next ride.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use ridebus::GameOptions;
    ///
    /// let options = GameOptions::default().with_ride_transition_delay(Duration::ZERO);
    /// assert_eq!(options.ride_transition_delay, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn with_ride_transition_delay(mut self, delay: Duration) -> Self {
        self.ride_transition_delay = delay;
        self
    }

    /// Sets the fraction of chips bet before the player edits a bet.
    ///
    /// # Example
    ///
    /// ```
    /// use ridebus::GameOptions;
    ///
    /// let options = GameOptions::default().with_initial_bet_fraction(0.25);
    /// assert_eq!(options.initial_bet_fraction, 0.25);
    /// ```
    #[must_use]
    pub const fn with_initial_bet_fraction(mut self, fraction: f64) -> Self {
        self.initial_bet_fraction = fraction;
        self
    }

    /// Sets the shop pricing.
    ///
    /// # Example
    ///
    /// ```
    /// use ridebus::{GameOptions, ShopPrices};
    ///
    /// let prices = ShopPrices { starting_chips_cost: 50, ..ShopPrices::default() };
    /// let options = GameOptions::default().with_shop_prices(prices);
    /// assert_eq!(options.shop_prices.starting_chips_cost, 50);
    /// ```
    #[must_use]
    pub const fn with_shop_prices(mut self, prices: ShopPrices) -> Self {
        self.shop_prices = prices;
        self
    }
}
