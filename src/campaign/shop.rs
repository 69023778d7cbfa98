//! The upgrade shop opened between quota levels.

use alloc::format;
use alloc::vec::Vec;

use crate::error::ShopError;
use crate::options::ShopPrices;
use crate::result::Purchase;
use crate::rules::Round;

/// A purchasable upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpgradeId {
    /// Extra chips at the start of every quota attempt.
    StartingChips,
    /// Extra payout multiplier for one round.
    Multiplier(Round),
}

impl UpgradeId {
    /// Every upgrade, starting chips first.
    pub const ALL: [Self; 6] = [
        Self::StartingChips,
        Self::Multiplier(Round::One),
        Self::Multiplier(Round::Two),
        Self::Multiplier(Round::Three),
        Self::Multiplier(Round::Four),
        Self::Multiplier(Round::Five),
    ];

    /// Returns the profit spent per unit of this upgrade.
    #[must_use]
    pub const fn cost_per_unit(self, prices: &ShopPrices) -> usize {
        match self {
            Self::StartingChips => prices.starting_chips_cost,
            Self::Multiplier(_) => prices.multiplier_cost,
        }
    }
}

/// Permanent bonuses bought during a run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Upgrades {
    /// Chips added to the starting capital of every quota attempt.
    pub starting_chips_bonus: usize,
    /// Multiplier bonus per round, round one first.
    pub multiplier_bonuses: [f64; 5],
}

impl Upgrades {
    /// Returns the multiplier bonus for `round`.
    #[must_use]
    pub const fn multiplier_bonus(&self, round: Round) -> f64 {
        self.multiplier_bonuses[round.index()]
    }

    /// Returns the current bonus of `id`.
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for chip bonuses"
    )]
    #[must_use]
    pub fn bonus(&self, id: UpgradeId) -> f64 {
        match id {
            UpgradeId::StartingChips => self.starting_chips_bonus as f64,
            UpgradeId::Multiplier(round) => self.multiplier_bonus(round),
        }
    }
}

/// One row of the shop listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpgradeListing {
    /// The upgrade.
    pub id: UpgradeId,
    /// Profit spent per unit.
    pub cost_per_unit: usize,
    /// Bonus bought so far.
    pub current_bonus: f64,
}

/// Converts banked profit into permanent upgrades.
///
/// The ledger only ever touches the run's profit and upgrades. Spending is
/// immediate and cannot be refunded.
#[derive(Debug)]
pub struct ShopLedger<'a> {
    profit: &'a mut usize,
    upgrades: &'a mut Upgrades,
    prices: &'a ShopPrices,
}

impl<'a> ShopLedger<'a> {
    /// Opens a ledger over a run's profit and upgrades.
    pub fn new(
        profit: &'a mut usize,
        upgrades: &'a mut Upgrades,
        prices: &'a ShopPrices,
    ) -> Self {
        Self {
            profit,
            upgrades,
            prices,
        }
    }

    /// Returns the profit available to spend.
    #[must_use]
    pub const fn profit(&self) -> usize {
        *self.profit
    }

    /// Lists every upgrade with its price and current bonus.
    #[must_use]
    pub fn list_upgrades(&self) -> Vec<UpgradeListing> {
        UpgradeId::ALL
            .into_iter()
            .map(|id| UpgradeListing {
                id,
                cost_per_unit: id.cost_per_unit(self.prices),
                current_bonus: self.upgrades.bonus(id),
            })
            .collect()
    }

    /// Spends `amount` of profit on `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero, is not a whole number of
    /// units, or exceeds the available profit.
    pub fn purchase(&mut self, id: UpgradeId, amount: usize) -> Result<Purchase, ShopError> {
        let cost = id.cost_per_unit(self.prices);
        if amount == 0 || cost == 0 {
            return Err(ShopError::InvalidAmount);
        }

        if amount % cost != 0 {
            return Err(ShopError::NotMultipleOfCost);
        }

        if amount > *self.profit {
            return Err(ShopError::InsufficientProfit);
        }

        *self.profit -= amount;
        let units = amount / cost;

        let purchase = match id {
            UpgradeId::StartingChips => {
                self.upgrades.starting_chips_bonus += units;
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "f64 has sufficient precision for chip bonuses"
                )]
                let bonus_delta = units as f64;
                Purchase {
                    bonus_delta,
                    description: format!("Increased starting chips by {units}."),
                }
            }
            UpgradeId::Multiplier(round) => {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "f64 has sufficient precision for upgrade units"
                )]
                let bonus_delta = units as f64 * self.prices.multiplier_step;
                self.upgrades.multiplier_bonuses[round.index()] += bonus_delta;
                Purchase {
                    bonus_delta,
                    description: format!(
                        "Increased round {} multiplier by {bonus_delta:.1}x.",
                        round.number()
                    ),
                }
            }
        };

        tracing::info!(?id, amount, profit = *self.profit, "upgrade purchased");
        Ok(purchase)
    }
}
