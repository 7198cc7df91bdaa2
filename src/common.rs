//! Common types for Battleship: shot outcomes and the errors raised by boards
//! and players.

use alloc::string::String;
use core::fmt;

use crate::coord::Coord;

/// Outcome of a shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Struck a ship that still has unhit segments.
    Hit,
    /// Open water.
    Miss,
    /// Struck the last unhit segment of a ship.
    Sunk,
}

impl ShotOutcome {
    /// Hit and Sunk both count as hits and grant another turn.
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ShotOutcome::Hit => "Hit",
            ShotOutcome::Miss => "Miss",
            ShotOutcome::Sunk => "Sunk",
        };
        f.write_str(s)
    }
}

/// A resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub coord: Coord,
    pub outcome: ShotOutcome,
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A ship segment or a shot lies off the board.
    OutOfBounds(Coord),
    /// Ship placement overlaps another ship.
    ShipOverlaps(Coord),
    /// Ship placement touches another ship, orthogonally or diagonally.
    ShipTooClose(Coord),
    /// Random placement failed to find a legal position.
    UnableToPlaceShip,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds(c) => {
                write!(f, "Cell ({}, {}) is outside the board", c.row, c.col)
            }
            BoardError::ShipOverlaps(c) => write!(f, "Ship overlaps another ship at {}", c),
            BoardError::ShipTooClose(c) => write!(f, "Ship touches another ship at {}", c),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors a player can run into while choosing or firing a shot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    /// Every cell of the opponent board has already been targeted.
    NoTargetsLeft,
    /// The move input stream ended.
    InputClosed,
    /// Reading the move input failed.
    Io(String),
    /// The chosen target was rejected by the opponent board.
    Board(BoardError),
}

impl From<BoardError> for PlayerError {
    fn from(err: BoardError) -> Self {
        PlayerError::Board(err)
    }
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerError::NoTargetsLeft => write!(f, "No untargeted cells left"),
            PlayerError::InputClosed => write!(f, "Input closed"),
            PlayerError::Io(e) => write!(f, "Input error: {}", e),
            PlayerError::Board(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlayerError {}
