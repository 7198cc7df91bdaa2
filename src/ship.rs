//! Ship kinds, geometry and hit tracking.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;

use crate::coord::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends along increasing column.
    Horizontal,
    /// Extends along increasing row.
    Vertical,
}

/// The four kinds of ship in a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipKind {
    Battleship,
    Cruiser,
    Destroyer,
    Submarine,
}

impl ShipKind {
    /// Ship's name.
    pub const fn name(&self) -> &'static str {
        match self {
            ShipKind::Battleship => "Battleship",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Submarine => "Submarine",
        }
    }

    /// Ship's length.
    pub const fn length(&self) -> usize {
        match self {
            ShipKind::Battleship => 4,
            ShipKind::Cruiser => 3,
            ShipKind::Destroyer => 2,
            ShipKind::Submarine => 1,
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A ship laid out from an origin, with the segments hit so far.
///
/// Construction never checks the board edges; [`crate::Board`] does.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    orientation: Orientation,
    origin: Coord,
    hits: BTreeSet<Coord>,
}

impl Ship {
    pub fn new(kind: ShipKind, orientation: Orientation, origin: Coord) -> Self {
        Ship {
            kind,
            orientation,
            origin,
            hits: BTreeSet::new(),
        }
    }

    /// Coordinates covered by the ship, starting at the origin.
    pub fn occupied_coordinates(&self) -> impl Iterator<Item = Coord> + '_ {
        let Coord { row, col } = self.origin;
        (0..self.kind.length()).map(move |i| match self.orientation {
            Orientation::Horizontal => Coord::new(row, col + i),
            Orientation::Vertical => Coord::new(row + i, col),
        })
    }

    /// Returns `true` if `coord` is one of the ship's segments.
    pub fn contains(&self, coord: Coord) -> bool {
        let Coord { row, col } = self.origin;
        let len = self.kind.length();
        match self.orientation {
            Orientation::Horizontal => coord.row == row && coord.col >= col && coord.col < col + len,
            Orientation::Vertical => coord.col == col && coord.row >= row && coord.row < row + len,
        }
    }

    /// Register a shot at `coord`.
    /// Returns `true` and records the hit if `coord` is one of the ship's segments.
    pub fn register_hit(&mut self, coord: Coord) -> bool {
        if self.contains(coord) {
            self.hits.insert(coord);
            true
        } else {
            false
        }
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.len() == self.kind.length()
    }

    /// Segments hit so far, in coordinate order.
    pub fn hits(&self) -> Vec<Coord> {
        self.hits.iter().copied().collect()
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: ({}, {}), orientation: {:?}, hits: {} }}",
            self.kind.name(),
            self.origin.row,
            self.origin.col,
            self.orientation,
            self.hits.len(),
        )
    }
}
