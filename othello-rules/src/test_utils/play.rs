use crate::{Board, Color, Location};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

/// One move of a playout: the position it was played from, who played, and where.
#[derive(Clone, Copy, Debug)]
pub struct Ply {
    pub before: Board,
    pub color: Color,
    pub location: Location,
}

/// Play a full game of uniformly random legal moves, seeded for reproducibility.
/// Sides without a legal move pass; the game ends when neither can move.
pub fn random_playout(seed: u64) -> Vec<Ply> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut color = Color::Black;
    let mut plies = Vec::new();

    loop {
        let location = match board.legal_moves(color).choose(&mut rng) {
            Some(location) => location,
            None if board.has_moves(!color) => {
                color = !color;
                continue;
            }
            None => return plies,
        };

        plies.push(Ply {
            before: board,
            color,
            location,
        });
        board.apply_move_unchecked(color, location);
        color = !color;
    }
}
