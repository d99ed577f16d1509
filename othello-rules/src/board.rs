//! Othello board dynamics over a bounds-checked 8x8 grid.
//!
//! Legality and move application both consume the same ray walk ([`Board::ray`]),
//! so the two can never disagree about which pieces a move captures.

use crate::{
    Cell, Color, Direction, Location, LocationList, PlayerRegistry, RulesError, EDGE_LENGTH,
};
use arrayvec::ArrayVec;
use derive_more::{Display, Error};
use std::fmt;
use tracing::debug;

/// The complete contents of an Othello board, in row-major order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH],
}

/// The result of walking outward from a cell along one direction: how many
/// opponent pieces were crossed, and whether the run ended on a piece of the
/// acting color.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Ray {
    pub direction: Direction,
    pub run: u8,
    pub bracketed: bool,
}

impl Ray {
    /// Whether this ray is a capture line: at least one opponent piece,
    /// closed off by one of ours.
    #[inline]
    pub fn captures(self) -> bool {
        self.bracketed && self.run > 0
    }
}

/// Every capture line a single move produces. At most one per direction.
pub type CaptureLines = ArrayVec<[Ray; 8]>;

/// Piece counts for both sides.
#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
#[display("black {}, white {}", black, white)]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

/// Who is ahead on piece count, without resolving player names.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Standing {
    #[display("Winner is {}.", _0)]
    Winner(Color),
    #[display("It's a tie.")]
    Tie,
}

/// The result of a game, with the winner's name resolved.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum Outcome {
    #[display("Winner is black player: {}", _0)]
    BlackWins(String),
    #[display("Winner is white player: {}", _0)]
    WhiteWins(String),
    #[display("It's a tie.")]
    Tie,
}

impl Outcome {
    /// The winning color, or None for a tie.
    pub fn winner(&self) -> Option<Color> {
        match self {
            Outcome::BlackWins(_) => Some(Color::Black),
            Outcome::WhiteWins(_) => Some(Color::White),
            Outcome::Tie => None,
        }
    }
}

impl Default for Board {
    /// Gets the starting board.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The starting board: white on (3, 3) and (4, 4), black on (3, 4) and (4, 3).
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.cells[3][3] = Cell::White;
        board.cells[4][4] = Cell::White;
        board.cells[3][4] = Cell::Black;
        board.cells[4][3] = Cell::Black;
        board
    }

    /// A board with no pieces on it.
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH],
        }
    }

    /// Get the contents of the cell at `loc`.
    #[inline]
    pub fn get(&self, loc: Location) -> Cell {
        self.cells[loc.row()][loc.col()]
    }

    /// Get the contents of the cell at raw coordinates, checking they are on the board.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, RulesError> {
        Location::from_coords(row, col).map(|loc| self.get(loc))
    }

    /// The rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; EDGE_LENGTH]> {
        self.cells.iter()
    }

    #[inline]
    fn set(&mut self, loc: Location, cell: Cell) {
        self.cells[loc.row()][loc.col()] = cell;
    }

    /// Walk outward from `origin` in `direction`, counting opponent pieces
    /// until the walk reaches something else. Leaving the board ends the
    /// walk without a bracket.
    pub fn ray(&self, color: Color, origin: Location, direction: Direction) -> Ray {
        let opponent = (!color).cell();
        let mut run = 0;
        let mut cursor = origin.step(direction);

        while let Some(loc) = cursor {
            let cell = self.get(loc);
            if cell != opponent {
                return Ray {
                    direction,
                    run,
                    bracketed: cell == color.cell(),
                };
            }
            run += 1;
            cursor = loc.step(direction);
        }

        Ray {
            direction,
            run,
            bracketed: false,
        }
    }

    /// Walk all eight rays out of `origin`.
    pub fn rays(&self, color: Color, origin: Location) -> [Ray; 8] {
        Direction::ALL.map(|direction| self.ray(color, origin, direction))
    }

    /// The capture lines `color` would flip by playing at `origin`.
    /// Does not check that `origin` is empty.
    pub fn capture_lines(&self, color: Color, origin: Location) -> CaptureLines {
        self.rays(color, origin)
            .iter()
            .copied()
            .filter(|ray| ray.captures())
            .collect()
    }

    /// Whether `color` may play at `loc`: the cell is empty and at least one
    /// capture line comes out of it.
    pub fn is_legal(&self, color: Color, loc: Location) -> bool {
        self.get(loc).is_empty()
            && Direction::ALL
                .iter()
                .any(|&direction| self.ray(color, loc, direction).captures())
    }

    /// Get the legal moves for `color`, in row-major order.
    pub fn legal_moves(&self, color: Color) -> LocationList {
        Location::all()
            .filter(|&loc| self.is_legal(color, loc))
            .collect()
    }

    /// Whether `color` has any legal move at all.
    pub fn has_moves(&self, color: Color) -> bool {
        Location::all().any(|loc| self.is_legal(color, loc))
    }

    /// Place a `color` piece at `loc` and flip every capture line.
    ///
    /// `loc` must be one of `self.legal_moves(color)`. This is not checked:
    /// an illegal location is still written, leaving a position no game can reach.
    /// Use [`Board::apply_move`] when the move has not been validated.
    pub fn apply_move_unchecked(&mut self, color: Color, loc: Location) {
        let lines = self.capture_lines(color, loc);
        let mut flipped = 0;

        self.set(loc, color.cell());
        for line in lines {
            let mut cursor = loc;
            for _ in 0..line.run {
                match cursor.step(line.direction) {
                    Some(next) => {
                        self.set(next, color.cell());
                        cursor = next;
                        flipped += 1;
                    }
                    None => break,
                }
            }
        }

        debug!(%color, location = %loc, flipped, "applied move");
    }

    /// Validate and apply a move. Illegal moves leave the board untouched
    /// and report the legal alternatives.
    pub fn apply_move(&mut self, color: Color, loc: Location) -> Result<(), RulesError> {
        let legal = self.legal_moves(color);
        if !legal.contains(loc) {
            return Err(RulesError::InvalidMove {
                color,
                location: loc,
                legal,
            });
        }

        self.apply_move_unchecked(color, loc);
        Ok(())
    }

    /// Count the pieces of one color.
    pub fn count(&self, color: Color) -> u8 {
        self.count_cells(color.cell())
    }

    /// Count the empty cells.
    pub fn count_empty(&self) -> u8 {
        self.count_cells(Cell::Empty)
    }

    /// Count the occupied cells.
    pub fn count_occupied(&self) -> u8 {
        crate::NUM_SPACES as u8 - self.count_empty()
    }

    fn count_cells(&self, target: Cell) -> u8 {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == target)
            .count() as u8
    }

    pub fn score(&self) -> Score {
        Score {
            black: self.count(Color::Black),
            white: self.count(Color::White),
        }
    }

    /// Compare piece counts: strictly more pieces wins, equal counts tie.
    pub fn standing(&self) -> Standing {
        let Score { black, white } = self.score();
        if black > white {
            Standing::Winner(Color::Black)
        } else if white > black {
            Standing::Winner(Color::White)
        } else {
            Standing::Tie
        }
    }

    /// Compute the outcome on the current counts, naming the winner from `players`.
    /// Can be asked at any point, not only once the game is over.
    pub fn outcome(&self, players: &PlayerRegistry) -> Result<Outcome, RulesError> {
        match self.standing() {
            Standing::Tie => Ok(Outcome::Tie),
            Standing::Winner(color) => {
                let name = players
                    .name_of(color)
                    .ok_or(RulesError::MissingPlayer { color })?
                    .to_string();
                Ok(match color {
                    Color::Black => Outcome::BlackWins(name),
                    Color::White => Outcome::WhiteWins(name),
                })
            }
        }
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display("a board needs exactly 64 cells of 'X', 'O' or '.'")]
pub struct ParseBoardError;

/// Parse a board from its 64 cells in row-major order: 'X' for black, 'O' for
/// white, '.' for empty. Whitespace and '*' are skipped. Digits are only allowed
/// as a row label at the start of a line or in an all-digit header line, so
/// rendered boards parse back.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::empty();
        let mut locations = Location::all();

        for line in s.lines() {
            let line = line.trim();
            if line.chars().all(|c| c.is_ascii_digit() || c.is_whitespace()) {
                continue;
            }

            for ch in line.trim_start_matches(|c: char| c.is_ascii_digit()).chars() {
                let cell = match ch {
                    'X' | 'x' => Cell::Black,
                    'O' | 'o' => Cell::White,
                    '.' => Cell::Empty,
                    '*' => continue,
                    c if c.is_whitespace() => continue,
                    _ => return Err(ParseBoardError),
                };
                let loc = locations.next().ok_or(ParseBoardError)?;
                board.set(loc, cell);
            }
        }

        match locations.next() {
            None => Ok(board),
            Some(_) => Err(ParseBoardError),
        }
    }
}

/// Render the board inside its numbered border. See [`crate::render`].
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::render::write_board(self, f)
    }
}
