use rand::rngs::SmallRng;
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::board::Board;
use crate::common::{PlayerError, ShotOutcome};
use crate::config::{BOARD_SIZE, MAX_SHOT_ATTEMPTS};
use crate::coord::Coord;

use super::Player;

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Computer player: fires at uniformly random cells it has not fired at yet.
#[derive(Debug, Default)]
pub struct ComputerPlayer {
    fired: BB,
}

impl ComputerPlayer {
    pub fn new() -> Self {
        Self { fired: BB::new() }
    }

    /// Cells already fired at.
    pub fn fired(&self) -> &BB {
        &self.fired
    }

    fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Coord, PlayerError> {
        if self.fired.is_full() {
            return Err(PlayerError::NoTargetsLeft);
        }
        let n = BOARD_SIZE as usize;
        for _ in 0..MAX_SHOT_ATTEMPTS {
            let coord = Coord::new(rng.random_range(0..n), rng.random_range(0..n));
            if !self.fired.contains(coord) {
                return Ok(coord);
            }
        }
        log::warn!("random targeting exhausted, taking the first free cell");
        self.fired.iter_unset().next().ok_or(PlayerError::NoTargetsLeft)
    }
}

impl Player for ComputerPlayer {
    fn select_target(&mut self, rng: &mut SmallRng, _view: &Board) -> Result<Coord, PlayerError> {
        let coord = self.pick(rng)?;
        self.fired
            .insert(coord)
            .map_err(|_| PlayerError::NoTargetsLeft)?;
        Ok(coord)
    }

    fn handle_shot_result(&mut self, coord: Coord, outcome: ShotOutcome) {
        log::debug!("computer fired at {}: {}", coord, outcome);
    }
}
