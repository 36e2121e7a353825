//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use twentyone::{Color, DealerCard, Phase, RoundSnapshot, Table, TableOptions, Verdict};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let started = Instant::now();
    let mut table = Table::new(TableOptions::default(), seed);

    loop {
        if table.poll(started.elapsed()).is_some() {
            println!("Table cleared.");
        }

        let snapshot = table.snapshot();
        println!("{}", format_actions(&snapshot));
        let action = prompt_line("Action: ");
        let now = started.elapsed();

        let result = match (snapshot.phase, action.as_str()) {
            (_, "q" | "quit") => {
                println!("Goodbye.");
                return;
            }
            (Phase::NotStarted, "d" | "deal") => table.deal(now),
            (Phase::PlayerTurn, "h" | "hit") => table.hit(now),
            (Phase::PlayerTurn, "s" | "stand") => table.stand(now),
            (Phase::Resolved, "r" | "restart") => Ok(table.restart()),
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        match result {
            Ok(snapshot) => print_table(&snapshot),
            Err(err) => println!("Round error: {err}"),
        }
    }
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

fn print_table(snapshot: &RoundSnapshot) {
    if snapshot.phase == Phase::NotStarted {
        return;
    }

    let dealer_value = snapshot
        .dealer_score
        .unwrap_or(snapshot.dealer_visible_score);
    println!("\nDealer: {} (value {dealer_value})", format_dealer(&snapshot.dealer));

    let player = snapshot
        .player
        .iter()
        .map(|card| format_card(&card.to_string(), card.color()))
        .collect::<Vec<_>>()
        .join(" ");
    println!("You:    {player} (value {})", snapshot.player_score);

    if let Some(outcome) = snapshot.outcome {
        let code = match outcome.verdict() {
            Verdict::Win => "32",
            Verdict::Lose => "31",
            Verdict::Push => "33",
        };
        println!("\n{}", colorize(outcome.message(), code));
    }
    println!();
}

fn format_actions(snapshot: &RoundSnapshot) -> String {
    let phase = snapshot.phase;
    let parts = [
        format_action("deal", "d", phase == Phase::NotStarted),
        format_action("hit", "h", phase == Phase::PlayerTurn),
        format_action("stand", "s", phase == Phase::PlayerTurn),
        format_action("restart", "r", phase == Phase::Resolved),
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

fn format_dealer(cards: &[DealerCard]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards
        .iter()
        .map(|dealer_card| {
            if dealer_card.hidden {
                "??".to_string()
            } else {
                format_card(&dealer_card.card.to_string(), dealer_card.card.color())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(text: &str, color: Color) -> String {
    match color {
        Color::Red => colorize(text, "31"),
        Color::Black => text.to_string(),
    }
}
