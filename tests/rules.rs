//! Card, deck, rules, and payout tests.

#![allow(clippy::float_cmp)]

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ridebus::{
    Card, Color, DECK_SIZE, Deck, Direction, GameOptions, Guess, MultiplierTable, Rank, Round,
    RoundingMode, ShopLedger, ShopPrices, Span, Suit, UpgradeId, Upgrades, card_numeric_value,
    evaluate, new_shuffled_deck, payout, round1_wins, round2_wins, round3_wins, round4_wins,
    round5_wins,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

#[test]
fn shuffled_deck_holds_every_card_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let deck = new_shuffled_deck(&mut rng);
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(unique.contains(&card(suit, rank)));
        }
    }
}

#[test]
fn same_seed_shuffles_the_same_order() {
    let first = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(11));
    let second = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(11));
    let other = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(12));
    assert_eq!(first.cards(), second.cards());
    assert_ne!(first.cards(), other.cards());
}

#[test]
fn stacked_deck_draws_in_order() {
    let mut deck = Deck::from_draws(&[
        card(Suit::Hearts, Rank::Two),
        card(Suit::Spades, Rank::King),
    ]);
    assert_eq!(deck.peek(), Some(&card(Suit::Hearts, Rank::Two)));
    assert_eq!(deck.draw(), Some(card(Suit::Hearts, Rank::Two)));
    assert_eq!(deck.draw(), Some(card(Suit::Spades, Rank::King)));
    assert_eq!(deck.draw(), None);
    assert!(deck.is_empty());
}

#[test]
fn card_values_and_display() {
    assert_eq!(card_numeric_value(Rank::Two), 2);
    assert_eq!(card_numeric_value(Rank::Ten), 10);
    assert_eq!(card_numeric_value(Rank::Jack), 11);
    assert_eq!(card_numeric_value(Rank::Ace), 14);
    assert!(Rank::Ace > Rank::King);

    assert_eq!(card(Suit::Hearts, Rank::Ten).to_string(), "10♥");
    assert_eq!(card(Suit::Spades, Rank::Ace).to_string(), "A♠");
    assert_eq!(Suit::from_symbol("♦"), Some(Suit::Diamonds));
    assert_eq!(Rank::from_symbol("Q"), Some(Rank::Queen));
    assert_eq!(Rank::from_value(15), None);
}

#[test]
fn round_one_matches_colour() {
    assert!(round1_wins(Color::Red, &card(Suit::Hearts, Rank::Five)));
    assert!(round1_wins(Color::Red, &card(Suit::Diamonds, Rank::Five)));
    assert!(round1_wins(Color::Black, &card(Suit::Clubs, Rank::Five)));
    assert!(!round1_wins(Color::Black, &card(Suit::Diamonds, Rank::Five)));
}

#[test]
fn round_two_ties_go_to_higher() {
    for rank in Rank::ALL {
        let value = card_numeric_value(rank);
        assert!(round2_wins(Direction::Higher, value, value), "{rank:?}");
        assert!(!round2_wins(Direction::Lower, value, value), "{rank:?}");
    }
    assert!(round2_wins(Direction::Higher, 10, 9));
    assert!(round2_wins(Direction::Lower, 8, 9));
    assert!(!round2_wins(Direction::Higher, 8, 9));
}

#[test]
fn round_three_bounds_are_inclusive() {
    assert!(round3_wins(Span::Inside, 5, 5, 9));
    assert!(round3_wins(Span::Inside, 9, 9, 5));
    assert!(round3_wins(Span::Inside, 7, 9, 5));
    assert!(!round3_wins(Span::Inside, 10, 5, 9));
    assert!(round3_wins(Span::Outside, 10, 5, 9));
    assert!(!round3_wins(Span::Outside, 5, 5, 9));
    assert!(round3_wins(Span::Inside, 6, 6, 6));
}

#[test]
fn rounds_four_and_five_match_exactly() {
    let queen = card(Suit::Clubs, Rank::Queen);
    assert!(round4_wins(Suit::Clubs, &queen));
    assert!(!round4_wins(Suit::Spades, &queen));
    assert!(round5_wins(Rank::Queen, &queen));
    assert!(!round5_wins(Rank::King, &queen));
}

#[test]
fn evaluate_uses_earlier_cards() {
    let drawn = [
        card(Suit::Hearts, Rank::Five),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Clubs, Rank::Ten),
    ];

    assert_eq!(
        evaluate(Round::One, Guess::Color(Color::Red), &drawn[..1]),
        Some(true)
    );
    assert_eq!(
        evaluate(Round::Two, Guess::Direction(Direction::Higher), &drawn[..2]),
        Some(true)
    );
    assert_eq!(
        evaluate(Round::Three, Guess::Span(Span::Outside), &drawn),
        Some(true)
    );
    assert_eq!(
        evaluate(Round::Three, Guess::Span(Span::Inside), &drawn),
        Some(false)
    );
    assert_eq!(
        evaluate(Round::Two, Guess::Color(Color::Red), &drawn[..2]),
        None
    );
    assert_eq!(
        evaluate(Round::Three, Guess::Span(Span::Inside), &drawn[..1]),
        None
    );
    assert_eq!(evaluate(Round::One, Guess::Color(Color::Red), &[]), None);
}

#[test]
fn guess_options_per_round() {
    assert_eq!(Guess::options_for(Round::One).len(), 2);
    assert_eq!(Guess::options_for(Round::Four).len(), 4);
    let ranks = Guess::options_for(Round::Five);
    assert_eq!(ranks.len(), 13);
    assert_eq!(ranks[0], Guess::Rank(Rank::Two));
    assert_eq!(ranks[12], Guess::Rank(Rank::Ace));

    for round in Round::ALL {
        assert!(Guess::options_for(round).iter().all(|g| g.fits(round)));
    }
    assert!(!Guess::Suit(Suit::Hearts).fits(Round::Three));
}

#[test]
fn round_navigation() {
    assert_eq!(Round::One.next(), Some(Round::Two));
    assert_eq!(Round::Five.next(), None);
    assert_eq!(Round::One.previous(), None);
    assert_eq!(Round::Three.previous(), Some(Round::Two));
    assert!(Round::Five.is_last());
    assert_eq!(Round::from_number(4), Some(Round::Four));
    assert_eq!(Round::from_number(6), None);
}

#[test]
fn payout_rounding_modes() {
    assert_eq!(payout(50, 3.0, RoundingMode::Up), 150);
    assert_eq!(payout(15, 2.5, RoundingMode::Up), 38);
    assert_eq!(payout(15, 2.5, RoundingMode::Down), 37);
    assert_eq!(payout(33, 2.1, RoundingMode::Nearest), 69);
    assert_eq!(payout(100, 2.1, RoundingMode::Up), 210);
    assert_eq!(payout(0, 50.0, RoundingMode::Up), 0);
}

#[test]
fn multiplier_table_bonuses() {
    let table = MultiplierTable::default();
    assert_eq!(table, MultiplierTable::BASE);
    assert_eq!(table.get(Round::Four), 20.0);

    let boosted = table.with_bonuses(&[0.5, 0.0, -1.0, 0.0, 5.0]);
    assert_eq!(boosted.get(Round::One), 2.5);
    assert_eq!(boosted.get(Round::Three), 4.0);
    assert_eq!(boosted.get(Round::Five), 55.0);
}

#[test]
fn stacked_tenth_bonuses_round_the_same_at_any_bet() {
    let mut profit = 600;
    let mut upgrades = Upgrades::default();
    let prices = ShopPrices::default();
    for _ in 0..3 {
        ShopLedger::new(&mut profit, &mut upgrades, &prices)
            .purchase(UpgradeId::Multiplier(Round::One), 200)
            .unwrap();
    }
    assert_eq!(profit, 0);

    let table = MultiplierTable::BASE.with_bonuses(&upgrades.multiplier_bonuses);
    let multiplier = table.get(Round::One);
    assert_eq!(payout(100, multiplier, RoundingMode::Up), 230);
    assert_eq!(payout(1_000_000_000, multiplier, RoundingMode::Up), 2_300_000_000);
    assert_eq!(payout(1_000_000_000, multiplier, RoundingMode::Down), 2_300_000_000);
    assert_eq!(payout(1_000_000_001, 2.5, RoundingMode::Up), 2_500_000_003);
    assert_eq!(payout(1_000_000_001, 2.5, RoundingMode::Down), 2_500_000_002);
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_attempts_per_quota(3)
        .with_starting_capital(500)
        .with_initial_quota(800)
        .with_quota_increase_factor(1.5)
        .with_payout_rounding(RoundingMode::Down)
        .with_ride_transition_delay(core::time::Duration::from_millis(250))
        .with_initial_bet_fraction(0.2)
        .with_shop_prices(ShopPrices {
            starting_chips_cost: 50,
            multiplier_cost: 100,
            multiplier_step: 0.5,
        });

    assert_eq!(options.attempts_per_quota, 3);
    assert_eq!(options.starting_capital, 500);
    assert_eq!(options.initial_quota, 800);
    assert_eq!(options.quota_increase_factor, 1.5);
    assert_eq!(options.payout_rounding, RoundingMode::Down);
    assert_eq!(
        options.ride_transition_delay,
        core::time::Duration::from_millis(250)
    );
    assert_eq!(options.initial_bet_fraction, 0.2);
    assert_eq!(options.shop_prices.multiplier_step, 0.5);
}

#[test]
fn default_options() {
    let options = GameOptions::default();
    assert_eq!(options.attempts_per_quota, 5);
    assert_eq!(options.starting_capital, 1000);
    assert_eq!(options.initial_quota, 1500);
    assert_eq!(options.quota_increase_factor, 1.2);
    assert_eq!(options.multipliers, MultiplierTable::BASE);
    assert_eq!(options.payout_rounding, RoundingMode::Up);
    assert_eq!(options.ride_transition_delay, core::time::Duration::from_secs(2));
}
