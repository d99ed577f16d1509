//! Text rendering of a [`Board`] for terminals and logs.
//!
//! The 8x8 play area is drawn inside a `*` border, and the resulting 10x10
//! frame is labelled with indices 0-9 along the top and left edges. Board
//! row `r` therefore appears on frame line `r + 1`.

use crate::{Board, Cell, EDGE_LENGTH};
use itertools::Itertools;
use std::fmt::{self, Write};

/// Glyph for the border around the play area.
pub const BORDER: char = '*';

const FRAME_LENGTH: usize = EDGE_LENGTH + 2;

/// Render `board` into a new string.
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_board(board, &mut out);
    out
}

/// Write the framed grid for `board` into any [`fmt::Write`] sink.
pub fn write_board<W: Write>(board: &Board, out: &mut W) -> fmt::Result {
    writeln!(out, "  {}", (0..FRAME_LENGTH).join(" "))?;

    let border_row = std::iter::repeat(BORDER).take(FRAME_LENGTH).join(" ");
    writeln!(out, "0 {}", border_row)?;

    for (row, cells) in board.rows().enumerate() {
        writeln!(
            out,
            "{} {} {} {}",
            row + 1,
            BORDER,
            cells.iter().copied().map(Cell::glyph).join(" "),
            BORDER
        )?;
    }

    write!(out, "{} {}", FRAME_LENGTH - 1, border_row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Location};

    const STARTING: &str = "  0 1 2 3 4 5 6 7 8 9
0 * * * * * * * * * *
1 * . . . . . . . . *
2 * . . . . . . . . *
3 * . . . . . . . . *
4 * . . . O X . . . *
5 * . . . X O . . . *
6 * . . . . . . . . *
7 * . . . . . . . . *
8 * . . . . . . . . *
9 * * * * * * * * * *";

    #[test]
    fn render_starting_board() {
        assert_eq!(render(&Board::new()), STARTING);
        assert_eq!(Board::new().to_string(), STARTING);
    }

    #[test]
    fn render_after_move() {
        let mut board = Board::new();
        board.apply_move_unchecked(Color::Black, Location::from_coords(2, 3).unwrap());

        let rendered = render(&board);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 11);
        // Board row r sits below the header and top border, on line r + 2.
        assert_eq!(lines[4], "3 * . . . X . . . . *");
        assert_eq!(lines[5], "4 * . . . X X . . . *");
    }

    #[test]
    fn render_does_not_touch_board() {
        let board = Board::new();
        let copy = board;
        let _ = render(&board);
        assert_eq!(board, copy);
    }
}
