//! A fixed-size set of board cells packed into an unsigned integer.
//!
//! `no_std` friendly and allocation free. An `N×N` grid is stored row-major
//! in the low `N * N` bits of `T`.

use core::{any, fmt};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::coord::Coord;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Coordinate lies outside [0..N).
    OutOfBounds(Coord),
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::OutOfBounds(c) => {
                write!(f, "cell ({}, {}) is off the board", c.row, c.col)
            }
        }
    }
}

/// A fixed-size N×N set of cells stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const CELLS: usize = N * N;

    /// Create an empty set. `N * N` must fit in the bits of `T`.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Number of cells in the set.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Returns `true` once every cell of the grid is in the set.
    pub fn is_full(&self) -> bool {
        self.count_ones() == Self::CELLS
    }

    /// Membership test. Off-board coordinates are never members.
    pub fn contains(&self, coord: Coord) -> bool {
        match Self::index(coord) {
            Some(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            None => false,
        }
    }

    /// Add `coord` to the set.
    pub fn insert(&mut self, coord: Coord) -> Result<(), BitBoardError> {
        let idx = Self::index(coord).ok_or(BitBoardError::OutOfBounds(coord))?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Cells of the grid that are not in the set, row-major.
    pub fn iter_unset(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..Self::CELLS)
            .filter(move |&idx| ((self.bits >> idx) & T::one()) == T::zero())
            .map(|idx| Coord::new(idx / N, idx % N))
    }

    #[inline]
    fn index(coord: Coord) -> Option<usize> {
        (coord.row < N && coord.col < N).then(|| coord.row * N + coord.col)
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}, {}>:", any::type_name::<T>(), N)?;
        for r in 0..N {
            for c in 0..N {
                let bit = if self.contains(Coord::new(r, c)) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
