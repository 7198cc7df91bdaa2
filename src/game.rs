#![cfg(feature = "std")]

//! Two-sided game: fleet setup, the turn loop and the move history.

use core::fmt;

use rand::rngs::SmallRng;

use crate::common::{BoardError, PlayerError, ShotOutcome};
use crate::coord::Coord;
use crate::history::GameHistory;
use crate::player::Side;

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Setup,
    Playing,
    Finished,
}

/// Index of the side moving after `active` produced `outcome`.
///
/// A miss passes the turn; a hit or a sink lets the same side fire again.
pub fn next_active(active: usize, outcome: ShotOutcome) -> usize {
    if outcome.is_hit() {
        active
    } else {
        1 - active
    }
}

/// What happened during one call to [`Game::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// Index of the side that fired.
    pub shooter: usize,
    pub coord: Coord,
    pub outcome: ShotOutcome,
    /// Set when this shot sank the opponent's last ship.
    pub game_over: bool,
}

/// Errors that stop a game from progressing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Operation not allowed in the current phase.
    WrongPhase { expected: Phase, actual: Phase },
    /// A fleet could not be laid out.
    Placement(BoardError),
    /// The active player could not produce a move.
    Player(PlayerError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::WrongPhase { expected, actual } => {
                write!(f, "expected phase {:?}, game is in {:?}", expected, actual)
            }
            GameError::Placement(e) => write!(f, "fleet placement failed: {}", e),
            GameError::Player(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for GameError {}

impl From<PlayerError> for GameError {
    fn from(err: PlayerError) -> Self {
        GameError::Player(err)
    }
}

/// Core game state: both sides, whose turn it is and the move log.
pub struct Game {
    sides: [Side; 2],
    active: usize,
    phase: Phase,
    winner: Option<usize>,
    history: GameHistory,
}

impl Game {
    /// New game in the setup phase. `first` places first and moves first.
    pub fn new(first: Side, second: Side) -> Self {
        Self {
            sides: [first, second],
            active: 0,
            phase: Phase::Setup,
            winner: None,
            history: GameHistory::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn side(&self, index: usize) -> &Side {
        &self.sides[index]
    }

    pub fn sides(&self) -> &[Side; 2] {
        &self.sides
    }

    /// Index of the side to move next.
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn passive(&self) -> usize {
        1 - self.active
    }

    pub fn winner(&self) -> Option<&Side> {
        self.winner.map(|i| &self.sides[i])
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Lay out both fleets, first side first, and start play.
    pub fn setup(&mut self, rng: &mut SmallRng) -> Result<(), GameError> {
        self.expect_phase(Phase::Setup)?;
        for side in self.sides.iter_mut() {
            side.place_fleet(rng).map_err(GameError::Placement)?;
            log::debug!("{} placed {} ships", side.name(), side.board().ships().len());
        }
        self.phase = Phase::Playing;
        Ok(())
    }

    /// Start play with fleets already placed by hand.
    pub fn start(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::Setup)?;
        self.phase = Phase::Playing;
        Ok(())
    }

    /// Let the active side take one shot.
    ///
    /// The win check runs before the turn rule, so the winning side stays
    /// active and the game finishes immediately.
    pub fn step(&mut self, rng: &mut SmallRng) -> Result<MoveReport, GameError> {
        self.expect_phase(Phase::Playing)?;
        let shooter = self.active;
        let (active, passive) = self.pair_mut();
        let shot = active.fire(rng, passive.board_mut())?;
        let game_over = passive.board().all_ships_sunk();
        let name = active.name().to_string();

        self.history.record_move(&name, shot.coord, shot.outcome);
        log::debug!("{} fired at {}: {}", name, shot.coord, shot.outcome);

        if game_over {
            self.phase = Phase::Finished;
            self.winner = Some(shooter);
            self.history.end_game(&name);
            log::info!("{} won after {} moves", name, self.history.moves.len());
        } else {
            self.active = next_active(shooter, shot.outcome);
        }
        Ok(MoveReport {
            shooter,
            coord: shot.coord,
            outcome: shot.outcome,
            game_over,
        })
    }

    /// Run [`Game::step`] until the game is finished. Returns the winner.
    pub fn play_out(&mut self, rng: &mut SmallRng) -> Result<&Side, GameError> {
        if self.phase == Phase::Setup {
            self.expect_phase(Phase::Playing)?;
        }
        while self.phase == Phase::Playing {
            self.step(rng)?;
        }
        self.winner().ok_or(GameError::WrongPhase {
            expected: Phase::Finished,
            actual: self.phase,
        })
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn pair_mut(&mut self) -> (&mut Side, &mut Side) {
        let [first, second] = &mut self.sides;
        if self.active == 0 {
            (first, second)
        } else {
            (second, first)
        }
    }
}
