//! Campaign run tests.

#![allow(clippy::float_cmp)]

use core::time::Duration;

use ridebus::{
    Campaign, CampaignError, CampaignStatus, Card, Color, Deck, Direction, GameOptions, Guess,
    PendingTransition, Phase, Rank, RideConclusion, RideError, RideOutcome, Round, RunEnd,
    RunReport, ShopError, Span, Suit, UpgradeId,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn winning_deck() -> Deck {
    Deck::from_draws(&[
        card(Suit::Hearts, Rank::Five),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Clubs, Rank::Seven),
        card(Suit::Clubs, Rank::King),
        card(Suit::Diamonds, Rank::King),
    ])
}

const WINNING_GUESSES: [Guess; 5] = [
    Guess::Color(Color::Red),
    Guess::Direction(Direction::Higher),
    Guess::Span(Span::Inside),
    Guess::Suit(Suit::Clubs),
    Guess::Rank(Rank::King),
];

fn started(options: GameOptions) -> Campaign {
    let mut campaign = Campaign::new(options, 9);
    campaign.start_new_run();
    campaign.replace_deck(winning_deck());
    campaign
}

fn guess_and_draw(campaign: &mut Campaign, guess: Guess) -> RideConclusion {
    campaign.set_choice(guess).unwrap();
    campaign.draw().unwrap().conclusion
}

fn lose_round_one(campaign: &mut Campaign) -> RideConclusion {
    guess_and_draw(campaign, Guess::Color(Color::Black))
}

fn clear_ride(campaign: &mut Campaign) -> RideConclusion {
    let mut conclusion = RideConclusion::Continuing;
    for guess in WINNING_GUESSES {
        conclusion = guess_and_draw(campaign, guess);
    }
    conclusion
}

#[test]
fn new_run_starts_at_capital_and_quota() {
    let campaign = started(GameOptions::default());
    let run = campaign.run();

    assert!(run.active);
    assert_eq!(run.quota, 1500);
    assert_eq!(run.profit, 0);
    assert_eq!(run.attempts_left, 5);
    assert_eq!(campaign.status(), CampaignStatus::Riding);
    assert_eq!(campaign.chips(), 1000);
    assert_eq!(campaign.ride().bet(), 100);
}

#[test]
fn lost_ride_consumes_an_attempt_and_keeps_chips() {
    let mut campaign = started(GameOptions::default());
    campaign.place_bet(100).unwrap();

    assert_eq!(
        guess_and_draw(&mut campaign, Guess::Color(Color::Red)),
        RideConclusion::Continuing
    );
    assert_eq!(
        guess_and_draw(&mut campaign, Guess::Direction(Direction::Lower)),
        RideConclusion::NextRidePending
    );

    assert_eq!(campaign.chips(), 900);
    assert_eq!(campaign.run().attempts_left, 4);
    assert_eq!(
        campaign.status(),
        CampaignStatus::RideConcluded(PendingTransition {
            delay: Duration::from_secs(2)
        })
    );
    assert_eq!(campaign.draw(), Err(CampaignError::InvalidState));

    campaign.start_new_ride_sequence().unwrap();
    assert_eq!(campaign.status(), CampaignStatus::Riding);
    assert_eq!(campaign.chips(), 900);
    assert_eq!(campaign.ride().bet(), 90);
    assert_eq!(campaign.ride().round(), Round::One);
    assert!(!campaign.ride().is_bet_locked());
}

#[test]
fn cash_out_pays_and_schedules_immediately() {
    let mut campaign = started(GameOptions::default());
    campaign.place_bet(50).unwrap();
    guess_and_draw(&mut campaign, Guess::Color(Color::Red));
    guess_and_draw(&mut campaign, Guess::Direction(Direction::Higher));

    assert_eq!(campaign.snapshot().cash_out_value, Some(150));
    assert_eq!(campaign.cash_out(), Ok(RideConclusion::NextRidePending));
    assert_eq!(campaign.chips(), 1100);
    assert_eq!(
        campaign.status(),
        CampaignStatus::RideConcluded(PendingTransition {
            delay: Duration::ZERO
        })
    );

    campaign.start_new_ride_sequence().unwrap();
    assert_eq!(campaign.ride().bet(), 55);
}

#[test]
fn cash_out_in_round_one_is_rejected() {
    let mut campaign = started(GameOptions::default());
    assert_eq!(
        campaign.cash_out(),
        Err(CampaignError::Ride(RideError::InvalidState))
    );
    assert_eq!(campaign.run().attempts_left, 5);
}

#[test]
fn bust_ends_the_run_without_consuming_an_attempt() {
    let options = GameOptions::default().with_starting_capital(100);
    let mut campaign = started(options);
    campaign.place_bet(100).unwrap();

    let conclusion = lose_round_one(&mut campaign);
    let report = RunReport {
        end: RunEnd::Busted,
        profit: 0,
        quotas_cleared: 0,
    };
    assert_eq!(conclusion, RideConclusion::RunOver(report));
    assert_eq!(campaign.status(), CampaignStatus::RunOver(report));
    assert_eq!(campaign.run().attempts_left, 5);
    assert!(!campaign.run().active);
    assert_eq!(campaign.draw(), Err(CampaignError::RunOver));
    assert_eq!(campaign.start_new_ride_sequence(), Err(CampaignError::RunOver));
}

#[test]
fn bust_takes_precedence_on_the_last_attempt() {
    let options = GameOptions::default()
        .with_starting_capital(100)
        .with_attempts_per_quota(1);
    let mut campaign = started(options);
    campaign.place_bet(100).unwrap();

    assert!(matches!(
        lose_round_one(&mut campaign),
        RideConclusion::RunOver(RunReport {
            end: RunEnd::Busted,
            ..
        })
    ));
}

#[test]
fn quota_failed_when_attempts_run_out_short() {
    let options = GameOptions::default().with_attempts_per_quota(1);
    let mut campaign = started(options);

    assert!(matches!(
        lose_round_one(&mut campaign),
        RideConclusion::RunOver(RunReport {
            end: RunEnd::QuotaFailed,
            ..
        })
    ));
    assert_eq!(campaign.chips(), 900);
    assert_eq!(campaign.run().attempts_left, 0);
}

#[test]
fn quota_met_on_last_attempt_opens_the_shop() {
    let options = GameOptions::default().with_attempts_per_quota(1);
    let mut campaign = started(options);

    assert_eq!(
        clear_ride(&mut campaign),
        RideConclusion::QuotaMet { banked: 4400 }
    );
    assert_eq!(campaign.chips(), 5900);
    assert_eq!(campaign.status(), CampaignStatus::Shop);
    assert_eq!(campaign.run().profit, 4400);
    assert_eq!(campaign.run().quotas_cleared, 1);
}

#[test]
fn complete_quota_banks_the_surplus() {
    let mut campaign = started(GameOptions::default().with_starting_capital(1800));
    assert_eq!(campaign.complete_quota(), Ok(300));
    assert_eq!(campaign.run().profit, 300);
    assert_eq!(campaign.run().attempts_left, 5);
    assert_eq!(campaign.status(), CampaignStatus::Shop);

    let mut short = started(GameOptions::default().with_starting_capital(1400));
    assert_eq!(short.complete_quota(), Err(CampaignError::QuotaNotMet));
    assert_eq!(short.status(), CampaignStatus::Riding);
}

#[test]
fn shop_purchases_and_next_level() {
    let options = GameOptions::default().with_attempts_per_quota(1);
    let mut campaign = started(options);
    assert_eq!(
        campaign.purchase(UpgradeId::StartingChips, 100),
        Err(CampaignError::Shop(ShopError::ShopClosed))
    );
    clear_ride(&mut campaign);

    assert_eq!(
        campaign.purchase(UpgradeId::StartingChips, 0),
        Err(CampaignError::Shop(ShopError::InvalidAmount))
    );
    assert_eq!(
        campaign.purchase(UpgradeId::StartingChips, 150),
        Err(CampaignError::Shop(ShopError::NotMultipleOfCost))
    );
    assert_eq!(
        campaign.purchase(UpgradeId::Multiplier(Round::One), 5000),
        Err(CampaignError::Shop(ShopError::InsufficientProfit))
    );

    let chips = campaign.purchase(UpgradeId::StartingChips, 2000).unwrap();
    assert_eq!(chips.bonus_delta, 20.0);
    assert_eq!(chips.description, "Increased starting chips by 20.");

    let mult = campaign
        .purchase(UpgradeId::Multiplier(Round::One), 1000)
        .unwrap();
    assert!((mult.bonus_delta - 0.5).abs() < 1e-9);
    assert_eq!(mult.description, "Increased round 1 multiplier by 0.5x.");

    {
        let shop = campaign.shop().unwrap();
        assert_eq!(shop.profit(), 1400);
        let listing = shop.list_upgrades();
        assert_eq!(listing.len(), 6);
        assert_eq!(listing[0].id, UpgradeId::StartingChips);
        assert_eq!(listing[0].cost_per_unit, 100);
        assert_eq!(listing[0].current_bonus, 20.0);
        assert_eq!(listing[1].cost_per_unit, 200);
    }

    campaign.close_shop().unwrap();
    assert_eq!(campaign.status(), CampaignStatus::Riding);
    assert_eq!(campaign.run().quota, 1800);
    assert_eq!(campaign.run().attempts_left, 1);
    assert_eq!(campaign.run().profit, 1400);
    assert_eq!(campaign.chips(), 1020);
    assert!((campaign.multipliers().get(Round::One) - 2.5).abs() < 1e-9);
    assert_eq!(campaign.multipliers().get(Round::Two), 3.0);
    assert_eq!(campaign.close_shop(), Err(CampaignError::InvalidState));

    campaign.replace_deck(winning_deck());
    campaign.place_bet(100).unwrap();
    assert_eq!(
        guess_and_draw(&mut campaign, Guess::Color(Color::Red)),
        RideConclusion::Continuing
    );
    assert_eq!(campaign.ride().cash_out_value(), Some(250));
    assert_eq!(
        campaign.cash_out(),
        Ok(RideConclusion::RunOver(RunReport {
            end: RunEnd::QuotaFailed,
            profit: 1400,
            quotas_cleared: 1,
        }))
    );
    assert_eq!(
        campaign.ride().outcome(),
        Some(RideOutcome::CashedOut {
            round: Round::One,
            payout: 250,
        })
    );
    assert_eq!(campaign.chips(), 1170);
}

#[test]
fn empty_deck_forfeits_the_ride() {
    let mut campaign = started(GameOptions::default());
    campaign.replace_deck(Deck::from_draws(&[]));
    campaign.set_choice(Guess::Color(Color::Red)).unwrap();

    let result = campaign.draw().unwrap();
    assert_eq!(result.draw, None);
    assert_eq!(result.conclusion, RideConclusion::NextRidePending);
    assert_eq!(campaign.chips(), 900);
    assert_eq!(campaign.run().attempts_left, 4);
}

#[test]
fn exit_run_reports_and_resets() {
    let mut campaign = Campaign::new(GameOptions::default(), 9);
    assert_eq!(campaign.exit_run(), Err(CampaignError::InvalidState));

    campaign.start_new_run();
    let report = campaign.exit_run().unwrap();
    assert_eq!(report.end, RunEnd::Exited);
    assert_eq!(campaign.status(), CampaignStatus::Idle);
    assert!(!campaign.run().active);
    assert_eq!(campaign.place_bet(10), Err(CampaignError::InvalidState));
}

#[test]
fn snapshot_reflects_the_ride() {
    let mut campaign = started(GameOptions::default());
    guess_and_draw(&mut campaign, Guess::Color(Color::Red));
    campaign.set_choice(Guess::Direction(Direction::Higher)).unwrap();

    let snapshot = campaign.snapshot();
    assert_eq!(snapshot.status, CampaignStatus::Riding);
    assert_eq!(snapshot.phase, Phase::Betting);
    assert_eq!(snapshot.round, Round::Two);
    assert_eq!(snapshot.chips, 900);
    assert_eq!(snapshot.bet, 100);
    assert!(snapshot.bet_locked);
    assert_eq!(snapshot.choice, Some(Guess::Direction(Direction::Higher)));
    assert_eq!(snapshot.quota, 1500);
    assert_eq!(snapshot.attempts_left, 5);
    assert_eq!(snapshot.drawn_cards, vec![card(Suit::Hearts, Rank::Five)]);
    assert_eq!(snapshot.deck_count, 4);
    assert_eq!(snapshot.cash_out_value, Some(200));
}

#[test]
fn bet_share_carries_into_the_next_attempt() {
    let mut campaign = started(GameOptions::default());
    campaign.place_bet(250).unwrap();
    assert_eq!(campaign.bet_fraction(), 0.25);
    assert_eq!(
        campaign.place_bet(2000),
        Err(CampaignError::Ride(RideError::InsufficientChips))
    );
    assert_eq!(campaign.bet_fraction(), 0.25);

    lose_round_one(&mut campaign);
    campaign.start_new_ride_sequence().unwrap();
    assert_eq!(campaign.chips(), 750);
    assert_eq!(campaign.ride().bet(), 188);
}

#[test]
fn each_concluded_ride_consumes_one_attempt() {
    let mut campaign = started(GameOptions::default());
    for guess in &WINNING_GUESSES[..4] {
        assert_eq!(
            guess_and_draw(&mut campaign, *guess),
            RideConclusion::Continuing
        );
        assert_eq!(campaign.run().attempts_left, 5);
        assert_eq!(campaign.ride().bet(), 100);
    }
    assert_eq!(
        guess_and_draw(&mut campaign, Guess::Rank(Rank::Queen)),
        RideConclusion::NextRidePending
    );
    assert_eq!(campaign.run().attempts_left, 4);
    assert_eq!(campaign.chips(), 900);

    campaign.start_new_ride_sequence().unwrap();
    campaign.replace_deck(winning_deck());
    assert_eq!(clear_ride(&mut campaign), RideConclusion::NextRidePending);
    assert_eq!(campaign.run().attempts_left, 3);
    assert_eq!(campaign.chips(), 900 - 90 + 90 * 50);

    campaign.start_new_ride_sequence().unwrap();
    campaign.replace_deck(winning_deck());
    guess_and_draw(&mut campaign, Guess::Color(Color::Red));
    guess_and_draw(&mut campaign, Guess::Direction(Direction::Higher));
    assert_eq!(campaign.run().attempts_left, 3);
    campaign.cash_out().unwrap();
    assert_eq!(campaign.run().attempts_left, 2);
}
