//! CLI Oh Hell score sheet example.
//!
//! Usage: `cargo run --example cli_score_sheet [NAMES_FILE]`
//!
//! `NAMES_FILE` is an optional list of suggested names, one per line.
//! Set `RUST_LOG=debug` to see the engine's log output.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use ohhell::names::{eq_ignore_case, parse_name_list};
use ohhell::{Game, GameOptions, MAX_PLAYERS, MIN_PLAYERS, RoundResult};

fn main() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_owned());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("Oh Hell score sheet (type 'quit' to quit)");

    let suggestions = std::env::args()
        .nth(1)
        .and_then(|path| std::fs::read_to_string(path).ok())
        .map(|text| parse_name_list(&text))
        .unwrap_or_default();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default().with_random_first_dealer(true), seed);

    loop {
        game.reset();
        if !seat_players(&game, &suggestions) {
            return;
        }

        let Some(max_cards) = prompt_number("Most cards per hand (1-10): ") else {
            return;
        };
        game.start_game_with_max_cards(u8::try_from(max_cards.clamp(1, 10)).unwrap_or(10));

        if !play_rounds(&game) {
            return;
        }

        print_standings(&game);
        match game.winner() {
            Some(winner) => println!("{} wins with {} points!", winner.name(), winner.total_score()),
            None => println!("Game over."),
        }

        if !matches!(prompt_line("New game? (y/n): ").as_str(), "y" | "yes") {
            println!("Goodbye.");
            return;
        }
    }
}

/// Fills the roster. Returns `false` if the user quit.
fn seat_players(game: &Game, suggestions: &[String]) -> bool {
    if !suggestions.is_empty() {
        println!("Known players: {}", suggestions.join(", "));
    }
    println!("Enter {MIN_PLAYERS}-{MAX_PLAYERS} names, blank line to start.");

    while game.player_count() < MAX_PLAYERS {
        let seat = game.player_count() + 1;
        let input = prompt_raw(&format!("Seat {seat}: "));
        match input.as_str() {
            "quit" => return false,
            "" if game.player_count() >= MIN_PLAYERS => break,
            "" => println!("At least {MIN_PLAYERS} players are needed."),
            name => {
                // Names are unique ignoring case; the suggested spelling wins.
                let name = suggestions
                    .iter()
                    .find(|s| eq_ignore_case(s, name))
                    .map_or(name, String::as_str);
                let taken = game.players().iter().any(|p| eq_ignore_case(p.name(), name));
                if taken || game.add_player(name).is_err() {
                    println!("Name already used: {name}");
                }
            }
        }
    }

    true
}

/// Plays every round. Returns `false` if the user quit.
fn play_rounds(game: &Game) -> bool {
    while let Some(round) = game.current_round() {
        let dealer = game.dealer().unwrap_or_default();
        println!(
            "\nRound {} of {}: {} card(s), {dealer} deals",
            round.number(),
            game.round_count(),
            round.cards_dealt()
        );

        for score in round.scores() {
            let name = score.player_name();
            loop {
                if name == dealer {
                    if let Some(forbidden) = game.forbidden_dealer_bid() {
                        println!("(a bid of {forbidden} would make the round even)");
                    }
                }
                let Some(bid) = prompt_number(&format!("{name} bids: ")) else {
                    return false;
                };
                match game.set_bid(name, bid) {
                    Ok(()) => break,
                    Err(err) => println!("Bid error: {err}"),
                }
            }
        }
        println!("Total bids: {} of {}", game.total_bids(), round.cards_dealt());

        while !game.can_advance_to_next_round() {
            for score in round.scores() {
                let name = score.player_name();
                let Some(tricks) = prompt_number(&format!("{name} took: ")) else {
                    return false;
                };
                if let Err(err) = game.set_tricks(name, tricks) {
                    println!("Tricks error: {err}");
                }
            }
        }

        match game.advance_to_next_round() {
            Ok(result) => print_round(&result),
            Err(err) => println!("Round error: {err}"),
        }
    }

    true
}

fn print_round(result: &RoundResult) {
    for player in &result.players {
        let mark = if player.made_bid() { "made" } else { "missed" };
        let total = player
            .total
            .map_or_else(|| "-".to_owned(), |total| total.to_string());
        println!(
            "  {:<12} bid {:>2} took {:>2} {:<6} +{:<3} total {}",
            player.name, player.bid, player.tricks, mark, player.score, total
        );
    }
}

fn print_standings(game: &Game) {
    println!("\nFinal standings:");
    for (place, player) in game.standings().iter().enumerate() {
        println!("{:>2}. {:<12} {}", place + 1, player.name(), player.total_score());
    }
}

fn prompt_raw(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => "quit".to_owned(),
        Ok(_) => input.trim().to_owned(),
    }
}

fn prompt_line(prompt: &str) -> String {
    prompt_raw(prompt).to_lowercase()
}

fn prompt_number(prompt: &str) -> Option<u32> {
    loop {
        let input = prompt_line(prompt);
        if input == "quit" {
            return None;
        }
        match input.parse::<u32>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}
