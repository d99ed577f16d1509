//! Code for working with [`Location`]s on the Othello board.

use crate::{RulesError, EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error, From, Into};
use itertools::Itertools;
use std::fmt::{self, Formatter};
use std::iter::FromIterator;

/// A location on the Othello board, stored as a row-major square index.
/// Always within the 8x8 grid.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Into)]
pub struct Location(u8);

/// An ordered set of locations on the Othello board, which can be iterated
/// to retrieve them in row-major order.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, From, Into)]
pub struct LocationList(u64);

/// One of the eight compass directions a ray can be walked in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The (row, column) step taken by one move in this direction.
    /// North is towards row 0.
    #[inline]
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
}

impl Location {
    /// Convert from row and column coordinates.
    pub fn from_coords(row: usize, col: usize) -> Result<Self, RulesError> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            return Err(RulesError::InvalidCoordinate { row, col });
        }
        Ok(Self((row * EDGE_LENGTH + col) as u8))
    }

    /// Convert from a row-major square index. Returns None past the last square.
    #[inline]
    pub fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < NUM_SPACES {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn row(self) -> usize {
        self.0 as usize / EDGE_LENGTH
    }

    #[inline]
    pub fn col(self) -> usize {
        self.0 as usize % EDGE_LENGTH
    }

    /// Get the row and column coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// The neighboring location one step in `direction`, or None if that
    /// step leaves the board.
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (d_row, d_col) = direction.offset();
        let row = self.row().checked_add_signed(d_row)?;
        let col = self.col().checked_add_signed(d_col)?;
        Self::from_coords(row, col).ok()
    }

    /// Iterate over every location on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..NUM_SPACES as u8).map(Location)
    }

    #[inline]
    fn mask(self) -> u64 {
        1 << self.0
    }
}

/// Convert this [`Location`] into "(row, col)" notation.
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display("invalid location string")]
pub struct ParseLocationError;

impl From<RulesError> for ParseLocationError {
    fn from(_: RulesError) -> Self {
        ParseLocationError
    }
}

/// Build a [`Location`] from either 0-indexed coordinates ("2 3", "2,3",
/// "(2, 3)") or 1-indexed letter notation ("D3").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let first = s.chars().next().ok_or(ParseLocationError)?;

        if first.is_ascii_alphabetic() {
            let mut chars = s.chars();
            let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
            let col = "ABCDEFGH".find(col_str).ok_or(ParseLocationError)?;
            let row = chars
                .next()
                .ok_or(ParseLocationError)?
                .to_digit(10)
                .ok_or(ParseLocationError)? as usize;

            if row == 0 || chars.next().is_some() {
                return Err(ParseLocationError);
            }

            return Ok(Self::from_coords(row - 1, col)?);
        }

        let mut coords = s
            .trim_start_matches('(')
            .trim_end_matches(')')
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<usize>().or(Err(ParseLocationError)));

        let row = coords.next().ok_or(ParseLocationError)??;
        let col = coords.next().ok_or(ParseLocationError)??;
        if coords.next().is_some() {
            return Err(ParseLocationError);
        }

        Ok(Self::from_coords(row, col)?)
    }
}

impl LocationList {
    pub const EMPTY: Self = Self(0);

    /// Returns whether `loc` is in this list.
    #[inline]
    pub fn contains(self, loc: Location) -> bool {
        self.0 & loc.mask() != 0
    }

    /// Add `loc` to this list.
    #[inline]
    pub fn insert(&mut self, loc: Location) {
        self.0 |= loc.mask();
    }

    /// Returns whether the list is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl ExactSizeIterator for LocationList {
    fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
}

impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.is_empty() {
            return None;
        }

        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;

        Some(Location(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl FromIterator<Location> for LocationList {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        let mut list = Self::EMPTY;
        for loc in iter {
            list.insert(loc);
        }
        list
    }
}

impl fmt::Display for LocationList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.into_iter().join(", "))
    }
}
