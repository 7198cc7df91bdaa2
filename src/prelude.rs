//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, Cell, ComputerPlayer, Coord, Orientation, Player, Ship, ShipKind, ShotOutcome, Side,
};

#[cfg(feature = "std")]
pub use crate::{CliPlayer, Game, GameHistory, HistoryStore, Phase};
