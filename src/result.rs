//! Result types reported by draws, cash-outs, and runs.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::rules::Round;

/// How a ride ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RideOutcome {
    /// All five rounds won.
    Cleared {
        /// Chips paid out at the round-five multiplier.
        payout: usize,
    },
    /// A round was lost; the locked bet is forfeited.
    Lost {
        /// The round that was lost.
        round: Round,
    },
    /// The player cashed out after winning `round`.
    CashedOut {
        /// The last round won.
        round: Round,
        /// Chips paid out at that round's multiplier.
        payout: usize,
    },
}

impl RideOutcome {
    /// Returns the chips paid back to the player.
    #[must_use]
    pub const fn payout(&self) -> usize {
        match self {
            Self::Cleared { payout } | Self::CashedOut { payout, .. } => *payout,
            Self::Lost { .. } => 0,
        }
    }
}

/// Result of a single draw within a ride.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawResult {
    /// The card drawn.
    pub card: Card,
    /// The round the card was drawn for.
    pub round: Round,
    /// Whether the guess was correct.
    pub won: bool,
    /// Set when this draw ended the ride.
    pub outcome: Option<RideOutcome>,
}

/// Result for one player after a classic draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRoundResult {
    /// The player's name.
    pub name: String,
    /// Whether the player's guess was correct.
    pub won: bool,
    /// Chips paid to the player (non-zero only on a round-five win).
    pub payout: usize,
}

/// Result of a shared classic draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// The card drawn; `None` when the deck ran out.
    pub card: Option<Card>,
    /// The round the card was drawn for.
    pub round: Round,
    /// Results for every player active before the draw.
    pub players: Vec<PlayerRoundResult>,
    /// Whether the draw ended the game.
    pub game_over: bool,
}

/// Why a campaign run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunEnd {
    /// Chips reached zero after a lost round.
    Busted,
    /// Attempts ran out with chips below the quota.
    QuotaFailed,
    /// The player left the run.
    Exited,
}

/// Terminal report of a campaign run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunReport {
    /// Why the run ended.
    pub end: RunEnd,
    /// Banked profit at the end of the run.
    pub profit: usize,
    /// Quota levels cleared.
    pub quotas_cleared: u32,
}

/// What the campaign did after a ride concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RideConclusion {
    /// The ride continues to the next round.
    Continuing,
    /// An attempt was consumed; the next ride waits on the scheduler.
    NextRidePending,
    /// The quota level was met; the shop is open.
    QuotaMet {
        /// Profit banked from this level.
        banked: usize,
    },
    /// The run ended.
    RunOver(RunReport),
}

/// Result of a campaign draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampaignDraw {
    /// The underlying ride draw; `None` when the deck ran out.
    pub draw: Option<DrawResult>,
    /// What the run did next.
    pub conclusion: RideConclusion,
}

/// Result of a shop purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    /// Bonus gained (chips or multiplier).
    pub bonus_delta: f64,
    /// Human-readable summary.
    pub description: String,
}
