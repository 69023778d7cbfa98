//! The round sequencer: a single five-round ride against one shuffled deck.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::options::RoundingMode;
use crate::payout::{MultiplierTable, payout};
use crate::result::RideOutcome;
use crate::rules::{Guess, Round};

mod actions;
pub mod state;

pub use state::Phase;

/// One ride: up to five guesses against a single deck, staked by one bet.
///
/// The bet is deducted from the chips on the first draw and is then locked
/// for the rest of the ride. Winning round five pays the round-five
/// multiplier; cashing out after round one pays the multiplier of the last
/// round won; losing any round forfeits the bet.
#[derive(Debug, Clone)]
pub struct Ride {
    /// Remaining cards.
    deck: Deck,
    /// Multipliers used for payouts.
    multipliers: MultiplierTable,
    /// Rounding applied to payouts.
    rounding: RoundingMode,
    /// Chips available to the player (excluding a locked bet).
    chips: usize,
    /// Current bet.
    bet: usize,
    /// Whether the bet has been deducted and frozen.
    bet_locked: bool,
    /// Current round.
    round: Round,
    /// Current phase.
    phase: Phase,
    /// Guess for the current round.
    choice: Option<Guess>,
    /// Cards drawn so far, in order.
    drawn: Vec<Card>,
    /// How the ride ended, once resolved.
    outcome: Option<RideOutcome>,
}

impl Ride {
    /// Starts a ride with `chips` against `deck`.
    ///
    /// The opening bet is `bet_hint` clamped to the available chips.
    #[must_use]
    pub fn start(
        chips: usize,
        bet_hint: usize,
        deck: Deck,
        multipliers: MultiplierTable,
        rounding: RoundingMode,
    ) -> Self {
        let bet = bet_hint.min(chips);
        tracing::debug!(chips, bet, cards = deck.len(), "ride started");

        Self {
            deck,
            multipliers,
            rounding,
            chips,
            bet,
            bet_locked: false,
            round: Round::One,
            phase: Phase::Betting,
            choice: None,
            drawn: Vec::new(),
            outcome: None,
        }
    }

    /// Starts a ride against a freshly shuffled deck.
    #[must_use]
    pub fn start_shuffled<R: Rng + ?Sized>(
        chips: usize,
        bet_hint: usize,
        multipliers: MultiplierTable,
        rounding: RoundingMode,
        rng: &mut R,
    ) -> Self {
        Self::start(chips, bet_hint, Deck::shuffled(rng), multipliers, rounding)
    }

    /// Returns the chips available to the player.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.chips
    }

    /// Returns the current bet.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns whether the bet has been locked in by the first draw.
    #[must_use]
    pub const fn is_bet_locked(&self) -> bool {
        self.bet_locked
    }

    /// Returns the current round.
    #[must_use]
    pub const fn round(&self) -> Round {
        self.round
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the guess for the current round, if any.
    #[must_use]
    pub const fn choice(&self) -> Option<Guess> {
        self.choice
    }

    /// Returns the cards drawn so far.
    #[must_use]
    pub fn drawn_cards(&self) -> &[Card] {
        &self.drawn
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the next card to be drawn without drawing it.
    #[must_use]
    pub fn next_card(&self) -> Option<&Card> {
        self.deck.peek()
    }

    /// Replaces the remaining deck.
    pub fn replace_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }

    /// Returns the multipliers this ride pays with.
    #[must_use]
    pub const fn multipliers(&self) -> &MultiplierTable {
        &self.multipliers
    }

    /// Returns how the ride ended, if it has.
    #[must_use]
    pub const fn outcome(&self) -> Option<RideOutcome> {
        self.outcome
    }

    /// Returns whether the ride has ended.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.phase == Phase::Resolved
    }

    /// Returns the chips a cash-out would pay right now.
    ///
    /// Returns `None` when cashing out is not allowed (round one, or the ride
    /// is not waiting for a guess).
    #[must_use]
    pub fn cash_out_value(&self) -> Option<usize> {
        if self.phase != Phase::Betting || !self.bet_locked {
            return None;
        }
        let last_won = self.round.previous()?;
        Some(payout(
            self.bet,
            self.multipliers.get(last_won),
            self.rounding,
        ))
    }

    fn resolve(&mut self, outcome: RideOutcome) {
        self.phase = Phase::Resolved;
        self.choice = None;
        self.outcome = Some(outcome);
        tracing::info!(?outcome, chips = self.chips, bet = self.bet, "ride resolved");
    }
}
