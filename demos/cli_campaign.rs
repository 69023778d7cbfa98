//! CLI campaign example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use ridebus::{
    Campaign, CampaignStatus, GameOptions, Guess, RideConclusion, Snapshot, UpgradeId,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Ride the Bus campaign (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut campaign = Campaign::new(GameOptions::default(), seed);
    campaign.start_new_run();

    loop {
        match campaign.status() {
            CampaignStatus::Riding => {
                if !play_turn(&mut campaign) {
                    if let Ok(report) = campaign.exit_run() {
                        println!("Left the run: {report:?}");
                    }
                    return;
                }
            }
            CampaignStatus::RideConcluded(pending) => {
                thread::sleep(pending.delay);
                if let Err(err) = campaign.start_new_ride_sequence() {
                    println!("Transition error: {err:?}");
                    return;
                }
                println!("\n--- New ride ---");
            }
            CampaignStatus::Shop => visit_shop(&mut campaign),
            CampaignStatus::RunOver(report) => {
                println!(
                    "Run over ({:?}). Quotas cleared: {}, profit: {}",
                    report.end, report.quotas_cleared, report.profit
                );
                return;
            }
            CampaignStatus::Idle => return,
        }
    }
}

/// Plays one command of the current ride. Returns `false` to quit.
fn play_turn(campaign: &mut Campaign) -> bool {
    let snapshot = campaign.snapshot();
    print_status(&snapshot);

    if !snapshot.bet_locked {
        let prompt = format!("Bet (0-{}, enter keeps {}): ", snapshot.chips, snapshot.bet);
        let input = prompt_line(&prompt);
        if input == "q" || input == "quit" {
            return false;
        }
        if !input.is_empty() {
            match input.parse::<usize>() {
                Ok(amount) => {
                    if let Err(err) = campaign.place_bet(amount) {
                        println!("Bet error: {err:?}");
                        return true;
                    }
                }
                Err(_) => {
                    println!("Please enter a number.");
                    return true;
                }
            }
        }
    }

    let options = Guess::options_for(snapshot.round);
    let mut menu: Vec<String> = options
        .iter()
        .enumerate()
        .map(|(index, guess)| format!("[{}]{}", index + 1, guess_label(*guess)))
        .collect();
    if let Some(value) = snapshot.cash_out_value {
        menu.push(format!("[c]ash out for {value}"));
    }
    if snapshot.chips >= snapshot.quota {
        menu.push(String::from("[k] complete quota"));
    }
    println!("{}", menu.join(" "));

    let input = prompt_line("Choice: ");
    match input.as_str() {
        "q" | "quit" => return false,
        "c" => {
            match campaign.cash_out() {
                Ok(conclusion) => report_conclusion(conclusion),
                Err(err) => println!("Cash out error: {err:?}"),
            }
            return true;
        }
        "k" => {
            match campaign.complete_quota() {
                Ok(banked) => println!("Quota complete. Banked {banked}."),
                Err(err) => println!("Quota error: {err:?}"),
            }
            return true;
        }
        _ => {}
    }

    let Some(guess) = input
        .parse::<usize>()
        .ok()
        .and_then(|index| index.checked_sub(1))
        .and_then(|index| options.get(index))
    else {
        println!("Unknown choice.");
        return true;
    };

    if let Err(err) = campaign.set_choice(*guess) {
        println!("Choice error: {err:?}");
        return true;
    }

    match campaign.draw() {
        Ok(result) => {
            if let Some(draw) = result.draw {
                let verdict = if draw.won { "correct" } else { "wrong" };
                println!("Drew {} ... {verdict}!", draw.card);
            } else {
                println!("The deck ran out. Ride forfeited.");
            }
            report_conclusion(result.conclusion);
        }
        Err(err) => println!("Draw error: {err:?}"),
    }
    true
}

fn visit_shop(campaign: &mut Campaign) {
    let Ok(shop) = campaign.shop() else {
        return;
    };
    println!("\nShop (profit {})", shop.profit());
    for (index, listing) in shop.list_upgrades().iter().enumerate() {
        println!(
            "  [{}] {} | {} per unit | bonus {:.1}",
            index + 1,
            upgrade_label(listing.id),
            listing.cost_per_unit,
            listing.current_bonus
        );
    }

    let input = prompt_line("Item and amount (e.g. '1 200'), enter to continue: ");
    if input.is_empty() || input == "q" {
        if let Err(err) = campaign.close_shop() {
            println!("Shop error: {err:?}");
        }
        return;
    }

    let mut parts = input.split_whitespace().map(str::parse::<usize>);
    let (Some(Ok(item)), Some(Ok(amount))) = (parts.next(), parts.next()) else {
        println!("Please enter an item number and an amount.");
        return;
    };
    let Some(id) = item.checked_sub(1).and_then(|i| UpgradeId::ALL.get(i)) else {
        println!("Unknown item.");
        return;
    };

    match campaign.purchase(*id, amount) {
        Ok(purchase) => println!("{}", purchase.description),
        Err(err) => println!("Purchase error: {err:?}"),
    }
}

fn report_conclusion(conclusion: RideConclusion) {
    match conclusion {
        RideConclusion::Continuing => {}
        RideConclusion::NextRidePending => println!("Ride over."),
        RideConclusion::QuotaMet { banked } => println!("Quota met! Banked {banked}."),
        RideConclusion::RunOver(report) => println!("Run over: {:?}", report.end),
    }
}

fn print_status(snapshot: &Snapshot) {
    let drawn: Vec<String> = snapshot
        .drawn_cards
        .iter()
        .map(ToString::to_string)
        .collect();
    println!(
        "\nRound {} | chips {} | bet {}{} | quota {} | attempts {} | profit {}",
        snapshot.round.number(),
        snapshot.chips,
        snapshot.bet,
        if snapshot.bet_locked { " (locked)" } else { "" },
        snapshot.quota,
        snapshot.attempts_left,
        snapshot.profit
    );
    println!("Cards: {} | deck {}", drawn.join(" "), snapshot.deck_count);
}

fn guess_label(guess: Guess) -> String {
    match guess {
        Guess::Color(color) => format!("{color:?}").to_lowercase(),
        Guess::Direction(direction) => format!("{direction:?}").to_lowercase(),
        Guess::Span(span) => format!("{span:?}").to_lowercase(),
        Guess::Suit(suit) => String::from(suit.symbol()),
        Guess::Rank(rank) => String::from(rank.symbol()),
    }
}

fn upgrade_label(id: UpgradeId) -> String {
    match id {
        UpgradeId::StartingChips => String::from("Starting chips"),
        UpgradeId::Multiplier(round) => format!("Round {} multiplier", round.number()),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return String::from("q"),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}
