#![cfg(feature = "std")]

//! Interactive session: the main menu and a human-vs-computer game loop.

use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use rand::rngs::SmallRng;

use crate::config::{COMPUTER_NAME, DEFAULT_HISTORY_FILE, DEFAULT_TURN_DELAY_MS, HUMAN_NAME};
use crate::game::{Game, GameError, Phase};
use crate::history::HistoryStore;
use crate::player::{CliPlayer, ComputerPlayer, Side};
use crate::ui;

/// Runtime options of an interactive session.
#[derive(Debug, Clone)]
pub struct Settings {
    pub history_file: PathBuf,
    /// Pause after each move so the result can be read.
    pub turn_delay: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            history_file: PathBuf::from(DEFAULT_HISTORY_FILE),
            turn_delay: Duration::from_millis(DEFAULT_TURN_DELAY_MS),
        }
    }
}

/// Main menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    NewGame,
    ViewStats,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::NewGame),
            "2" => Some(MenuChoice::ViewStats),
            "3" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Human (reading standard input) against the computer, human first.
pub fn new_game() -> Game {
    Game::new(
        Side::new(HUMAN_NAME, Box::new(CliPlayer::stdin(HUMAN_NAME))),
        Side::new(COMPUTER_NAME, Box::new(ComputerPlayer::new())),
    )
}

/// Play `game` from setup to the end, showing side 0's screen each turn,
/// then append it to the history store.
///
/// A failure to save is reported and otherwise ignored.
pub fn run_game(game: &mut Game, rng: &mut SmallRng, settings: &Settings) -> Result<(), GameError> {
    println!("Placing {} ships...", possessive(game.side(0).name()));
    println!("Placing {} ships...", possessive(game.side(1).name()));
    game.setup(rng)?;

    while game.phase() == Phase::Playing {
        ui::print_player_view(game.side(0));
        let report = game.step(rng)?;
        let shooter = game.side(report.shooter).name();
        println!(
            "{}",
            ui::shot_message(shooter, report.shooter == 0, report.coord, report.outcome)
        );
        if report.game_over {
            println!("\n{} wins!", shooter);
            break;
        }
        if report.outcome.is_hit() {
            println!("{} gets another turn!", shooter);
        }
        thread::sleep(settings.turn_delay);
    }

    let store = HistoryStore::new(&settings.history_file);
    match store.append(game.history()) {
        Ok(()) => println!("Game saved to history."),
        Err(e) => {
            log::warn!("could not save game: {:#}", e);
            println!("Error saving game: {:#}", e);
        }
    }
    Ok(())
}

/// Print stats for every recorded game.
pub fn show_stats(settings: &Settings) {
    match HistoryStore::new(&settings.history_file).stats() {
        Ok(stats) => ui::print_stats(stats.as_deref()),
        Err(e) => println!("Error reading history: {:#}", e),
    }
}

/// Menu loop. Returns when the user exits or standard input ends.
pub fn run_menu(rng: &mut SmallRng, settings: &Settings) {
    loop {
        println!("\n--- Battleship Menu ---");
        println!("1. New Game");
        println!("2. View Game Stats");
        println!("3. Exit");
        print!("Choose an option: ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                log::warn!("failed to read menu choice: {}", e);
                break;
            }
        }

        match MenuChoice::parse(&line) {
            Some(MenuChoice::NewGame) => {
                let mut game = new_game();
                if let Err(e) = run_game(&mut game, rng, settings) {
                    println!("Game ended with an error: {}", e);
                }
            }
            Some(MenuChoice::ViewStats) => show_stats(settings),
            Some(MenuChoice::Exit) => {
                println!("Goodbye!");
                break;
            }
            None => println!("Invalid option. Try again."),
        }
    }
}

fn possessive(name: &str) -> String {
    if name == HUMAN_NAME {
        "your".to_string()
    } else {
        name.to_lowercase()
    }
}
