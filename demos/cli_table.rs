//! CLI blackjack table.

extern crate alloc;

use alloc::sync::Arc;
use core::time::Duration;
use std::io::{self, Write};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{
    Card, DealerHand, DealerLoop, Engine, Hand, Notification, RoundState, Suit, TableOptions,
};

fn main() {
    println!("Blackjack table (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = TableOptions::default().with_dealer_delay(Duration::from_millis(600));
    let engine = Arc::new(Engine::new(options, seed));
    let notes = engine.subscribe();

    let dealer = match DealerLoop::spawn(Arc::clone(&engine)) {
        Ok(dealer) => dealer,
        Err(err) => {
            println!("Could not start the dealer: {err}");
            return;
        }
    };

    loop {
        print_table(&engine);
        println!("{}", format_actions(engine.state()));

        match prompt_line("Action: ").as_str() {
            "d" | "deal" => {
                engine.start_game();
            }
            "h" | "hit" => {
                if engine.hit().is_none() {
                    println!("You can only hit during your turn.");
                }
            }
            "s" | "stay" => {
                if !engine.stay() {
                    println!("You can only stay during your turn.");
                }
            }
            "r" | "reset" => engine.reset(),
            "q" | "quit" => break,
            _ => println!("Unknown action."),
        }

        settle(&engine, &notes);
    }

    dealer.stop();
    println!("{}", engine.statistics());
}

/// Prints notifications until the dealer has nothing left to do.
fn settle(engine: &Engine, notes: &Receiver<Notification>) {
    let quiet = engine.options().dealer_delay * 2;
    loop {
        match notes.recv_timeout(quiet) {
            Ok(Notification::Log(text)) => println!("{text}"),
            Ok(Notification::ResetLog) => println!("\n----------------"),
            Ok(Notification::Repaint) => {}
            Err(RecvTimeoutError::Timeout) if engine.state() == RoundState::DealerTurn => {}
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => break,
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_table(engine: &Engine) {
    println!("\nDeck: {} cards remaining", engine.cards_remaining());

    let dealer = engine.dealer_hand();
    println!(
        "Dealer: {} (showing {})",
        format_dealer(&dealer),
        dealer.visible_value()
    );

    let player = engine.player_hand();
    println!("Player: {} (value {})", format_hand(&player), player.value());
    println!("State: {}\n", engine.state());
}

fn format_actions(state: RoundState) -> String {
    let in_turn = state == RoundState::PlayerTurn;
    let parts = [
        format_action("deal", "d", state == RoundState::Start),
        format_action("hit", "h", in_turn),
        format_action("stay", "s", in_turn),
        format_action("reset", "r", true),
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

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }
    dealer
        .cards()
        .iter()
        .map(|card| {
            if card.is_face_down() {
                "??".to_string()
            } else {
                format_card(card)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit() {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
