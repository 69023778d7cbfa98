use crate::error::{CampaignError, ShopError};
use crate::options::RoundingMode;
use crate::payout::round_amount;
use crate::result::Purchase;

use super::shop::{ShopLedger, UpgradeId};
use super::{Campaign, CampaignStatus};

impl Campaign {
    /// Ends the quota level early with the current chips.
    ///
    /// Does not consume an attempt. Returns the profit banked.
    ///
    /// # Errors
    ///
    /// Returns an error if no ride is accepting commands or the chips are
    /// below the quota.
    pub fn complete_quota(&mut self) -> Result<usize, CampaignError> {
        self.ensure_riding()?;

        if self.ride.chips() < self.run.quota {
            return Err(CampaignError::QuotaNotMet);
        }

        tracing::info!(
            chips = self.ride.chips(),
            quota = self.run.quota,
            "quota completed early"
        );
        Ok(self.process_successful_quota_completion())
    }

    /// Banks the surplus over the quota and opens the shop.
    pub(super) fn process_successful_quota_completion(&mut self) -> usize {
        let chips = self.ride.chips();
        let banked = chips.saturating_sub(self.run.quota);
        self.run.profit += banked;
        self.run.quotas_cleared += 1;
        self.status = CampaignStatus::Shop;

        tracing::info!(
            chips,
            quota = self.run.quota,
            banked,
            profit = self.run.profit,
            "quota met"
        );
        banked
    }

    /// Returns a ledger over the run's profit and upgrades.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::ShopClosed`] unless the shop is open.
    pub fn shop(&mut self) -> Result<ShopLedger<'_>, CampaignError> {
        if self.status != CampaignStatus::Shop {
            return Err(ShopError::ShopClosed.into());
        }

        Ok(ShopLedger::new(
            &mut self.run.profit,
            &mut self.run.upgrades,
            &self.options.shop_prices,
        ))
    }

    /// Spends `amount` of banked profit on an upgrade.
    ///
    /// # Errors
    ///
    /// Returns an error if the shop is closed or the ledger rejects the
    /// purchase.
    pub fn purchase(&mut self, id: UpgradeId, amount: usize) -> Result<Purchase, CampaignError> {
        Ok(self.shop()?.purchase(id, amount)?)
    }

    /// Closes the shop and starts the next, harder quota level.
    ///
    /// # Errors
    ///
    /// Returns an error unless the shop is open.
    pub fn close_shop(&mut self) -> Result<(), CampaignError> {
        if self.status != CampaignStatus::Shop {
            return Err(CampaignError::InvalidState);
        }

        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for quota amounts"
        )]
        let grown = self.run.quota as f64 * self.options.quota_increase_factor;
        self.run.quota = round_amount(grown, RoundingMode::Down);
        self.run.attempts_left = self.options.attempts_per_quota;
        self.multipliers = self
            .options
            .multipliers
            .with_bonuses(&self.run.upgrades.multiplier_bonuses);

        tracing::info!(
            quota = self.run.quota,
            attempts = self.run.attempts_left,
            "next quota level"
        );
        self.start_attempt_for_quota();
        Ok(())
    }
}
