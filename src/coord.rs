//! Board coordinates and their letter+digit notation (`A0`..`J9`).

use core::fmt;
use core::str::FromStr;

use crate::config::{BOARD_SIZE, COLUMN_LABELS};

/// A (row, column) pair. Origin `(0, 0)` is the top-left cell.
///
/// Coordinates are not range checked on construction: a ship laid out from
/// an origin near the edge may extend past the board, and it is the board
/// that rejects it. Use [`Coord::in_bounds`] where it matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns `true` when the coordinate lies on the 10×10 board.
    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE as usize && self.col < BOARD_SIZE as usize
    }

    /// Column letter, or `?` for a column off the board.
    pub fn column_label(&self) -> char {
        COLUMN_LABELS.get(self.col).copied().unwrap_or('?')
    }

    /// The up to eight on-board cells surrounding this one.
    pub fn neighbors(&self) -> impl Iterator<Item = Coord> {
        let Coord { row, col } = *self;
        (-1isize..=1)
            .flat_map(move |dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(move |(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                let n = Coord::new(r, c);
                n.in_bounds().then_some(n)
            })
    }

    /// Iterate over every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        let n = BOARD_SIZE as usize;
        (0..n).flat_map(move |r| (0..n).map(move |c| Coord::new(r, c)))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_label(), self.row)
    }
}

/// Reasons textual coordinate input is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    /// Nothing, or only a single character, was entered.
    InvalidFormat,
    /// First character is not a column letter A-J.
    InvalidColumn(char),
    /// Row part is not a number.
    InvalidRow,
    /// Row number parsed but is not 0-9.
    OutOfBounds(usize),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::InvalidFormat => write!(f, "Invalid format"),
            CoordError::InvalidColumn(c) => write!(f, "Invalid column '{}', must be A-J", c),
            CoordError::InvalidRow => write!(f, "Invalid row, must be a number 0-9"),
            CoordError::OutOfBounds(r) => write!(f, "Out of bounds, row {} is not 0-9", r),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoordError {}

impl FromStr for Coord {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next().ok_or(CoordError::InvalidFormat)?;
        let rest = chars.as_str().trim();
        if rest.is_empty() {
            return Err(CoordError::InvalidFormat);
        }
        let letter = letter.to_ascii_uppercase();
        let col = COLUMN_LABELS
            .iter()
            .position(|&l| l == letter)
            .ok_or(CoordError::InvalidColumn(letter))?;
        let row: usize = rest.parse().map_err(|_| CoordError::InvalidRow)?;
        if row >= BOARD_SIZE as usize {
            return Err(CoordError::OutOfBounds(row));
        }
        Ok(Coord::new(row, col))
    }
}

#[cfg(feature = "std")]
impl serde::Serialize for Coord {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "std")]
impl<'de> serde::Deserialize<'de> for Coord {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
