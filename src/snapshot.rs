//! Read-only state handed to a renderer after every command.

use alloc::vec::Vec;

use crate::campaign::CampaignStatus;
use crate::card::Card;
use crate::ride::Phase;
use crate::rules::{Guess, Round};

/// Everything a renderer needs to draw a campaign.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Campaign status.
    pub status: CampaignStatus,
    /// Ride phase.
    pub phase: Phase,
    /// Ride round.
    pub round: Round,
    /// Chips available (excluding a locked bet).
    pub chips: usize,
    /// Current bet.
    pub bet: usize,
    /// Whether the bet is locked for the ride.
    pub bet_locked: bool,
    /// Guess for the current round.
    pub choice: Option<Guess>,
    /// Current quota.
    pub quota: usize,
    /// Attempts left at this quota level.
    pub attempts_left: u8,
    /// Banked profit.
    pub profit: usize,
    /// Quota levels cleared.
    pub quotas_cleared: u32,
    /// Cards drawn this ride.
    pub drawn_cards: Vec<Card>,
    /// Cards left in the deck.
    pub deck_count: usize,
    /// Payout of a cash-out right now, if allowed.
    pub cash_out_value: Option<usize>,
}
