//! Round multipliers and payout arithmetic.

use crate::options::RoundingMode;
use crate::rules::Round;

/// Per-round payout multipliers, indexed by [`Round`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiplierTable([f64; 5]);

impl MultiplierTable {
    /// The base table: 2x, 3x, 4x, 20x, 50x.
    pub const BASE: Self = Self([2.0, 3.0, 4.0, 20.0, 50.0]);

    /// Creates a table from round one through round five.
    #[must_use]
    pub const fn new(multipliers: [f64; 5]) -> Self {
        Self(multipliers)
    }

    /// Returns the multiplier for `round`.
    #[must_use]
    pub const fn get(&self, round: Round) -> f64 {
        self.0[round.index()]
    }

    /// Returns a table with each round's bonus added on top of this one.
    #[must_use]
    pub fn with_bonuses(&self, bonuses: &[f64; 5]) -> Self {
        let mut table = self.0;
        for (multiplier, bonus) in table.iter_mut().zip(bonuses) {
            *multiplier += bonus.max(0.0);
        }
        Self(table)
    }
}

impl Default for MultiplierTable {
    fn default() -> Self {
        Self::BASE
    }
}

// Float noise such as 2.1 * 100 = 210.00000000000003, or a multiplier of
// 2.3000000000000003 built from three 0.1 bonuses, grows with the amount.
// The tolerance scales with it so every bet size rounds the same way.
const ROUNDING_EPSILON: f64 = 1e-9;
const ROUNDING_RELATIVE: f64 = 1e-12;

fn rounding_tolerance(amount: f64) -> f64 {
    let magnitude = if amount < 0.0 { -amount } else { amount };
    (magnitude * ROUNDING_RELATIVE).max(ROUNDING_EPSILON)
}

#[cfg(feature = "std")]
pub(crate) fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    let tolerance = rounding_tolerance(amount);
    match mode {
        RoundingMode::Up => (amount - tolerance).ceil() as usize,
        RoundingMode::Down => (amount + tolerance).floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub(crate) fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    let tolerance = rounding_tolerance(amount);
    match mode {
        RoundingMode::Up => libm::ceil(amount - tolerance) as usize,
        RoundingMode::Down => libm::floor(amount + tolerance) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// Returns the chips paid out for `bet` at `multiplier`, rounded with `mode`.
///
/// Every payout path (full clear, cash-out, classic round five) goes through
/// this function.
#[must_use]
pub fn payout(bet: usize, multiplier: f64, mode: RoundingMode) -> usize {
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for chip amounts"
    )]
    let amount = bet as f64 * multiplier;
    round_amount(amount, mode)
}
