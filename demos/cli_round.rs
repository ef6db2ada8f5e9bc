//! Terminal blackjack table over the round engine.
//!
//! Set `RUST_LOG=starjack=debug` to watch the engine's own log output.

#![allow(clippy::missing_docs_in_private_items)]

use core::time::Duration;
use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use starjack::{
    Card, DealerStep, Ledger, ResourceKind, RoundEngine, RoundOptions, Settlement, Suit, Wager,
    Wallet,
};
use tracing_subscriber::EnvFilter;

const DEALER_PACE: Duration = Duration::from_millis(600);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    println!("Blackjack terminal (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let wallet = Ledger::new()
        .with_balance(ResourceKind::Iron, 500)
        .with_balance(ResourceKind::Gold, 100)
        .with_balance(ResourceKind::Platinum, 20);
    let mut engine = RoundEngine::new(RoundOptions::default(), wallet, seed);

    loop {
        print_wallet(engine.wallet());

        let Some(kind) = prompt_resource() else {
            break;
        };
        let balance = engine.wallet().balance(kind);
        if balance == 0 {
            println!("You have no {kind} left.");
            continue;
        }

        let Some(amount) = prompt_u64(&format!("Wager (1-{balance} {kind}, 0 to quit): ")) else {
            break;
        };
        if amount == 0 {
            println!("Goodbye.");
            break;
        }

        match engine.start_round(Wager::new(kind, amount)) {
            Ok(Some(settlement)) => {
                print_table(&engine);
                println!("Natural on the deal.");
                print_settlement(&settlement);
                engine.clear_round();
                continue;
            }
            Ok(None) => {}
            Err(err) => {
                println!("Wager error: {err}");
                continue;
            }
        }

        while engine.phase() == starjack::RoundPhase::PlayerTurn {
            print_table(&engine);
            println!("{}", format_actions(&engine));

            let result = match prompt_line("Action: ").as_str() {
                "h" | "hit" => engine.hit().map(|card| println!("You draw {}", format_card(&card))),
                "s" | "stand" => engine.begin_dealer_turn(),
                "d" | "double" => engine.double_down().map(|_| ()),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        while engine.phase() == starjack::RoundPhase::DealerTurn {
            print_table(&engine);
            thread::sleep(DEALER_PACE);
            match engine.dealer_step() {
                Ok(DealerStep::Drew(card)) => println!("Dealer draws {}", format_card(&card)),
                Ok(DealerStep::Settled(_)) => {}
                Err(err) => println!("Dealer error: {err}"),
            }
        }

        print_table(&engine);
        if let Some(settlement) = engine.settlement() {
            print_settlement(&settlement);
        }

        engine.clear_round();
    }

    let stats = engine.stats();
    println!(
        "Rounds {} | wins {} | blackjacks {} | pushes {} | losses {} | busts {}",
        stats.rounds, stats.wins, stats.blackjacks, stats.pushes, stats.losses, stats.busts
    );
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_u64(prompt: &str) -> Option<u64> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<u64>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn prompt_resource() -> Option<ResourceKind> {
    loop {
        match prompt_line("Resource ([i]ron, [g]old, [p]latinum): ").as_str() {
            "i" | "iron" => return Some(ResourceKind::Iron),
            "g" | "gold" => return Some(ResourceKind::Gold),
            "p" | "platinum" => return Some(ResourceKind::Platinum),
            "q" | "quit" | "" => return None,
            _ => println!("Unknown resource."),
        }
    }
}

fn print_wallet(wallet: &Ledger) {
    let balances = ResourceKind::ALL
        .iter()
        .map(|&kind| format!("{kind} {}", wallet.balance(kind)))
        .collect::<Vec<_>>()
        .join(" | ");
    println!("\nWallet: {balances}");
}

fn print_table(engine: &RoundEngine<Ledger>) {
    let dealer = engine.dealer_hand();
    let mut dealer_view = format_cards(engine.dealer_cards(false));
    if !dealer.is_hole_revealed() && !dealer.is_empty() {
        dealer_view.push_str(" ??");
    }
    println!(
        "\nDealer: {dealer_view} (value {})",
        engine.visible_dealer_score()
    );

    let wager = engine
        .current_wager()
        .map(|w| format!("{} {}", w.amount, w.kind))
        .unwrap_or_default();
    println!(
        "You:    {} (value {}) | wager {wager}",
        format_cards(engine.player_cards()),
        engine.player_score()
    );
}

fn print_settlement(settlement: &Settlement) {
    println!(
        "Result: {} | paid {} {} (net {})",
        settlement.outcome,
        settlement.credit,
        settlement.wager.kind,
        settlement.net()
    );
}

fn format_actions(engine: &RoundEngine<Ledger>) -> String {
    let wager = engine.current_wager();
    let can_double = engine.options().double_down
        && engine.player_cards().len() == 2
        && wager.is_some_and(|w| engine.wallet().balance(w.kind) >= w.amount);

    let parts = [
        format_action("hit", "h", true),
        format_action("stand", "s", true),
        format_action("double", "d", can_double),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
