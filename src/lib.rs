//! A "Ride the Bus" card game engine with optional `no_std` support.
//!
//! The crate provides three layers:
//!
//! - [`rules`]: pure round evaluation (color, higher/lower, inside/outside,
//!   suit, rank) and [`payout`] arithmetic.
//! - [`Ride`]: one five-round ride against a shuffled deck, staked by a
//!   single locked bet.
//! - [`Session`] and [`Campaign`]: a multiplayer classic table with loans,
//!   and a single-player campaign of escalating quotas with an upgrade shop.
//!
//! # Example
//!
//! ```
//! use ridebus::{Campaign, Color, GameOptions, Guess};
//!
//! let mut campaign = Campaign::new(GameOptions::default(), 42);
//! campaign.start_new_run();
//! campaign.place_bet(100)?;
//! campaign.set_choice(Guess::Color(Color::Red))?;
//! let result = campaign.draw()?;
//! assert!(result.draw.is_some());
//! # Ok::<(), ridebus::CampaignError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod campaign;
pub mod card;
pub mod classic;
pub mod deck;
pub mod error;
pub mod options;
pub mod payout;
pub mod result;
pub mod ride;
pub mod rules;
pub mod snapshot;

// Re-export main types
pub use campaign::{
    Campaign, CampaignRunState, CampaignStatus, PendingTransition, ShopLedger, UpgradeId,
    UpgradeListing, Upgrades,
};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use classic::{Player, Session, SessionPhase};
pub use deck::{Deck, new_shuffled_deck};
pub use error::{CampaignError, RideError, SessionError, ShopError};
pub use options::{GameOptions, RoundingMode, ShopPrices};
pub use payout::{MultiplierTable, payout};
pub use result::{
    CampaignDraw, DrawResult, PlayerRoundResult, Purchase, RideConclusion, RideOutcome,
    RoundReport, RunEnd, RunReport,
};
pub use ride::{Phase, Ride};
pub use rules::{
    Color, Direction, Guess, Round, Span, card_numeric_value, evaluate, round1_wins, round2_wins,
    round3_wins, round4_wins, round5_wins,
};
pub use snapshot::Snapshot;
