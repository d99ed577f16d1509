//! Piece colors and the contents of a single cell.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// One of the two sides in a game.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[display("black")]
    Black,
    #[display("white")]
    White,
}

impl Default for Color {
    /// Gets the starting side (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Gets the other side.
    fn not(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::Black, Color::White];

    /// The cell occupied by a piece of this color.
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display("expected a color: black or white")]
pub struct ParseColorError;

/// Parse a color from "black"/"white", their initials, or the board glyphs "X"/"O".
impl std::str::FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" | "x" => Ok(Color::Black),
            "white" | "w" | "o" => Ok(Color::White),
            _ => Err(ParseColorError),
        }
    }
}

/// The contents of one cell of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl Cell {
    /// The color of the piece in this cell, if there is one.
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The single-character glyph used when rendering and parsing boards.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'X',
            Cell::White => 'O',
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        color.cell()
    }
}
