//! "Perft" performance test: count the number of leaves at a given depth.
//! Exercises legal-move generation and flipping over the whole early game tree.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, Color};

/// Count the positions reachable in exactly `depth` plies from the opening,
/// counting a pass as a ply and stopping early when both sides pass.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), Color::Black, depth, false)
}

fn leaves_below(board: Board, color: Color, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = board.legal_moves(color);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !color, depth - 1, true);
    }

    all_moves
        .map(|mv| {
            let mut next = board;
            next.apply_move_unchecked(color, mv);
            leaves_below(next, !color, depth - 1, false)
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}
