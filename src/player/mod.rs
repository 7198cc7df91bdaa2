//! Player trait and implementations
//!
//! - [`ComputerPlayer`]: uniform random, never fires at the same cell twice
//! - [`CliPlayer`]: interactive player reading moves from a text stream
//! - [`Side`]: a named player together with its own board and its view of
//!   the opponent's board

use alloc::boxed::Box;
use alloc::string::String;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, PlayerError, Shot, ShotOutcome};
use crate::config::{FLEET, MAX_FLEET_ATTEMPTS};
use crate::coord::Coord;

/// Move-selection strategy.
pub trait Player {
    /// Choose the next cell to fire at. `view` is what this player has
    /// learned about the opponent board so far.
    fn select_target(&mut self, rng: &mut SmallRng, view: &Board) -> Result<Coord, PlayerError>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _coord: Coord, _outcome: ShotOutcome) {}
}

pub mod ai;
pub use ai::ComputerPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliPlayer;

/// One side of a battle.
pub struct Side {
    name: String,
    board: Board,
    view: Board,
    player: Box<dyn Player>,
}

impl Side {
    pub fn new(name: impl Into<String>, player: Box<dyn Player>) -> Self {
        Side {
            name: name.into(),
            board: Board::new(),
            view: Board::concealed(),
            player,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The side's own fleet.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the side's own fleet, for manual placement.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// What this side has learned about the opponent board.
    pub fn view(&self) -> &Board {
        &self.view
    }

    /// Lay out the full fleet at random on an empty board.
    ///
    /// Each ship is placed by rejection sampling. Should a ship find no room
    /// the whole fleet is laid out again from scratch.
    pub fn place_fleet(&mut self, rng: &mut SmallRng) -> Result<(), BoardError> {
        for attempt in 1..=MAX_FLEET_ATTEMPTS {
            self.board.clear();
            match place_fleet_once(rng, &mut self.board) {
                Ok(()) => return Ok(()),
                Err(BoardError::UnableToPlaceShip) => {
                    log::debug!("{}: fleet layout {} stuck, starting over", self.name, attempt);
                }
                Err(e) => return Err(e),
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Take one shot at `opponent` and mirror the result into the view.
    pub fn fire(&mut self, rng: &mut SmallRng, opponent: &mut Board) -> Result<Shot, PlayerError> {
        let coord = self.player.select_target(rng, &self.view)?;
        let outcome = opponent.resolve_shot(coord)?;
        if let Some(cell) = opponent.cell(coord) {
            self.view.mark(coord, cell)?;
        }
        self.player.handle_shot_result(coord, outcome);
        Ok(Shot { coord, outcome })
    }
}

fn place_fleet_once(rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
    for (kind, count) in FLEET {
        for _ in 0..count {
            let ship = board.random_placement(rng, kind)?;
            board.place(ship)?;
        }
    }
    Ok(())
}
