//! Game board: a 10×10 grid of cell states plus the ships placed on it.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{BoardError, ShotOutcome};
use crate::config::{BOARD_SIZE, COLUMN_LABELS, MAX_PLACEMENT_ATTEMPTS};
use crate::coord::Coord;
use crate::ship::{Orientation, Ship, ShipKind};

const N: usize = BOARD_SIZE as usize;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Ship segment not yet hit.
    Occupied,
    Hit,
    Miss,
    /// Segment of a ship that has been sunk.
    Sunk,
}

impl Cell {
    /// Returns `true` for cells a shot has already resolved.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss | Cell::Sunk)
    }

    /// Display symbol. `conceal` hides unhit ship segments as water.
    pub fn symbol(&self, conceal: bool) -> char {
        match self {
            Cell::Empty => '~',
            Cell::Occupied if conceal => '~',
            Cell::Occupied => 'O',
            Cell::Hit => 'X',
            Cell::Miss => '.',
            Cell::Sunk => '#',
        }
    }
}

/// Main board state: cell grid and placed ships.
#[derive(Clone)]
pub struct Board {
    grid: [[Cell; N]; N],
    ships: Vec<Ship>,
    conceal_ships: bool,
}

impl Board {
    /// Create an empty board that shows its ships when rendered.
    pub fn new() -> Self {
        Board {
            grid: [[Cell::Empty; N]; N],
            ships: Vec::new(),
            conceal_ships: false,
        }
    }

    /// Create an empty board that renders unhit ship segments as water.
    pub fn concealed() -> Self {
        Board {
            conceal_ships: true,
            ..Board::new()
        }
    }

    pub fn conceals_ships(&self) -> bool {
        self.conceal_ships
    }

    /// State of the cell at `coord`, `None` if it is off the board.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        coord.in_bounds().then(|| self.grid[coord.row][coord.col])
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Reason `ship` cannot be placed, if any.
    ///
    /// Every segment must be on the board, on an empty cell, and have no
    /// non-empty cell among its eight neighbours.
    pub fn check_placement(&self, ship: &Ship) -> Result<(), BoardError> {
        for coord in ship.occupied_coordinates() {
            if !coord.in_bounds() {
                return Err(BoardError::OutOfBounds(coord));
            }
            if self.grid[coord.row][coord.col] != Cell::Empty {
                return Err(BoardError::ShipOverlaps(coord));
            }
            if let Some(n) = coord
                .neighbors()
                .find(|n| self.grid[n.row][n.col] != Cell::Empty)
            {
                return Err(BoardError::ShipTooClose(n));
            }
        }
        Ok(())
    }

    pub fn can_place(&self, ship: &Ship) -> bool {
        self.check_placement(ship).is_ok()
    }

    /// Place `ship`, marking its segments occupied.
    /// A rejected ship leaves the board untouched.
    pub fn place(&mut self, ship: Ship) -> Result<(), BoardError> {
        self.check_placement(&ship)?;
        for c in ship.occupied_coordinates() {
            self.grid[c.row][c.col] = Cell::Occupied;
        }
        self.ships.push(ship);
        Ok(())
    }

    /// Sample random orientations and origins until one fits.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        kind: ShipKind,
    ) -> Result<Ship, BoardError> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let origin = Coord::new(rng.random_range(0..N), rng.random_range(0..N));
            let ship = Ship::new(kind, orientation, origin);
            if self.can_place(&ship) {
                return Ok(ship);
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Process a shot at `coord`.
    ///
    /// The first ship (in placement order) covering `coord` takes the hit; if
    /// that sinks it, all of its segments are marked sunk. Repeated shots are
    /// not rejected here, players keep track of where they have fired.
    pub fn resolve_shot(&mut self, coord: Coord) -> Result<ShotOutcome, BoardError> {
        if !coord.in_bounds() {
            return Err(BoardError::OutOfBounds(coord));
        }
        let Some(ship) = self.ships.iter_mut().find_map(|s| s.register_hit(coord).then_some(s))
        else {
            self.grid[coord.row][coord.col] = Cell::Miss;
            return Ok(ShotOutcome::Miss);
        };
        self.grid[coord.row][coord.col] = Cell::Hit;
        if !ship.is_sunk() {
            return Ok(ShotOutcome::Hit);
        }
        for c in ship.occupied_coordinates() {
            self.grid[c.row][c.col] = Cell::Sunk;
        }
        Ok(ShotOutcome::Sunk)
    }

    /// Overwrite a single cell. Used to mirror shot results onto a view of
    /// the opponent's board.
    pub fn mark(&mut self, coord: Coord, cell: Cell) -> Result<(), BoardError> {
        if !coord.in_bounds() {
            return Err(BoardError::OutOfBounds(coord));
        }
        self.grid[coord.row][coord.col] = cell;
        Ok(())
    }

    /// Returns `true` when every placed ship is sunk.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Remove all ships and reset every cell to empty.
    pub fn clear(&mut self) {
        self.grid = [[Cell::Empty; N]; N];
        self.ships.clear();
    }

    /// Symbols as they should be shown, honouring the concealment mode.
    pub fn snapshot(&self) -> Snapshot {
        let mut symbols = [['~'; N]; N];
        for (r, row) in self.grid.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                symbols[r][c] = cell.symbol(self.conceal_ships);
            }
        }
        Snapshot { symbols }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  conceal_ships: {},\n  ships: {:?},\n  grid:\n{}}}",
            self.conceal_ships,
            self.ships,
            Board { conceal_ships: false, ..self.clone() }.snapshot()
        )
    }
}

/// Rendered view of a board: one symbol per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub symbols: [[char; N]; N],
}

impl Snapshot {
    pub fn symbol(&self, coord: Coord) -> Option<char> {
        coord.in_bounds().then(|| self.symbols[coord.row][coord.col])
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for label in COLUMN_LABELS {
            write!(f, " {}", label)?;
        }
        writeln!(f)?;
        for (r, row) in self.symbols.iter().enumerate() {
            write!(f, "{}", r)?;
            for symbol in row {
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
