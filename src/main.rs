use std::path::PathBuf;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::console::{self, Settings};
use seabattle::{init_logging, DEFAULT_HISTORY_FILE, DEFAULT_TURN_DELAY_MS};

#[derive(Parser)]
#[command(author, version, about = "Battleship against the computer", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value = DEFAULT_HISTORY_FILE, help = "Where finished games are appended")]
    history_file: PathBuf,
    #[arg(long, default_value_t = DEFAULT_TURN_DELAY_MS, help = "Pause after each move, in milliseconds")]
    turn_delay_ms: u64,
}

impl Default for Cli {
    fn default() -> Self {
        Cli {
            seed: None,
            history_file: PathBuf::from(DEFAULT_HISTORY_FILE),
            turn_delay_ms: DEFAULT_TURN_DELAY_MS,
        }
    }
}

fn main() {
    init_logging();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return;
        }
        Err(e) => {
            let _ = e.print();
            log::warn!("ignoring command line, using defaults");
            Cli::default()
        }
    };

    let mut rng = match cli.seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };
    let settings = Settings {
        history_file: cli.history_file,
        turn_delay: Duration::from_millis(cli.turn_delay_ms),
    };

    console::run_menu(&mut rng, &settings);
}
