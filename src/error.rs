//! Error types for game operations.
//!
//! Every command validates before it mutates, so an error always means the
//! command was a no-op.

use thiserror::Error;

/// Errors that can occur while playing a single ride.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RideError {
    /// Invalid ride phase or round for this command.
    #[error("invalid ride state for this command")]
    InvalidState,
    /// The guess does not belong to the current round.
    #[error("guess does not belong to the current round")]
    InvalidChoice,
    /// The bet exceeds the available chips.
    #[error("insufficient chips")]
    InsufficientChips,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    DeckExhausted,
}

/// Errors that can occur during a classic session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Invalid session phase for this command.
    #[error("invalid session state for this command")]
    InvalidState,
    /// The guess does not belong to the current round.
    #[error("guess does not belong to the current round")]
    InvalidChoice,
    /// The bet exceeds the player's chips.
    #[error("insufficient chips")]
    InsufficientChips,
    /// No player has placed a bet.
    #[error("no players have placed bets")]
    NoActivePlayers,
    /// At least one active player has not chosen for this round.
    #[error("not every active player has made a choice")]
    MissingChoices,
    /// The player has no debt to repay.
    #[error("player has no debt")]
    NoDebt,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    DeckExhausted,
}

/// Errors that can occur when buying upgrades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShopError {
    /// The shop is only open between quota levels.
    #[error("the shop is closed")]
    ShopClosed,
    /// Amount is zero.
    #[error("amount must be positive")]
    InvalidAmount,
    /// Amount is not a whole number of units.
    #[error("amount must be a multiple of the unit cost")]
    NotMultipleOfCost,
    /// Amount exceeds banked profit.
    #[error("insufficient profit")]
    InsufficientProfit,
}

/// Errors that can occur during a campaign run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CampaignError {
    /// Invalid run status for this command.
    #[error("invalid campaign state for this command")]
    InvalidState,
    /// The run is over.
    #[error("the campaign run is over")]
    RunOver,
    /// Chips are below the quota.
    #[error("chips are below the quota")]
    QuotaNotMet,
    /// The current ride rejected the command.
    #[error(transparent)]
    Ride(#[from] RideError),
    /// The shop rejected the purchase.
    #[error(transparent)]
    Shop(#[from] ShopError),
}
