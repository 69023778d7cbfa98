//! Ride phase types.

/// Phase of a ride.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Waiting for a bet, a choice, and a draw (or a cash-out).
    Betting,
    /// A card is being drawn and evaluated.
    Playing,
    /// The ride has ended; see [`RideOutcome`](crate::RideOutcome).
    Resolved,
}
