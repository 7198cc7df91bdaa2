//! Computer-vs-computer game for smoke testing: `sim <seed1> <seed2>`.
//!
//! `seed1` drives fleet placement, `seed2` the shots. Prints a JSON summary.

use rand::{rngs::SmallRng, SeedableRng};
use seabattle::prelude::*;
use serde_json::json;

fn main() -> anyhow::Result<()> {
    seabattle::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut setup_rng = SmallRng::seed_from_u64(seed1);
    let mut play_rng = SmallRng::seed_from_u64(seed2);

    let mut game = Game::new(
        Side::new("player1", Box::new(ComputerPlayer::new())),
        Side::new("player2", Box::new(ComputerPlayer::new())),
    );
    game.setup(&mut setup_rng)?;
    let winner = game.play_out(&mut play_rng)?.name().to_string();

    let stats = game.history().stats();
    let result = json!({
        "winner": winner,
        "moves": stats.total_moves,
        "hits": stats.hits,
        "hit_rate": stats.hit_rate(),
        "history": game.history(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
