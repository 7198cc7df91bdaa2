#![cfg(feature = "std")]

//! Console rendering of boards, moves and history stats.

use std::fmt::Write;

use crate::common::ShotOutcome;
use crate::coord::Coord;
use crate::history::{iso, GameStats};
use crate::player::Side;

/// Own board with ships shown, then the enemy view with ships concealed.
pub fn render_player_view(side: &Side) -> String {
    format!(
        "Your Board:\n{}\nEnemy Board:\n{}",
        side.board().snapshot(),
        side.view().snapshot()
    )
}

/// Display the per-turn screen for `side`.
pub fn print_player_view(side: &Side) {
    println!("{}", "\n".repeat(5));
    print!("{}", render_player_view(side));
}

/// Announcement for a resolved shot.
pub fn shot_message(shooter: &str, human: bool, coord: Coord, outcome: ShotOutcome) -> String {
    if human {
        format!("Result of your shot: {}", outcome)
    } else {
        format!("{} fires at {}: {}", shooter, coord, outcome)
    }
}

/// Listing of every recorded game with its hit rate.
pub fn render_stats(stats: &[GameStats]) -> String {
    let mut out = String::new();
    for (i, game) in stats.iter().enumerate() {
        let end = game
            .end_time
            .map(iso)
            .unwrap_or_else(|| "None".to_string());
        let winner = game.winner.as_deref().unwrap_or("None");
        let _ = writeln!(out, "\nGame {}:", i + 1);
        let _ = writeln!(out, "  Start: {}", iso(game.start_time));
        let _ = writeln!(out, "  End: {}", end);
        let _ = writeln!(out, "  Winner: {}", winner);
        let _ = writeln!(
            out,
            "  Moves: {}, Hit Rate: {:.1}%",
            game.total_moves,
            game.hit_rate()
        );
    }
    out
}

pub fn print_stats(stats: Option<&[GameStats]>) {
    match stats {
        Some(stats) => print!("{}", render_stats(stats)),
        None => println!("No history found."),
    }
}
