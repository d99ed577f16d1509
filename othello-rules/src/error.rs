use crate::{Color, Location, LocationList};
use derive_more::{Display, Error};

/// Errors raised by the rules engine and the game session.
/// None of them are fatal: the board is never left partially updated.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum RulesError {
    #[display("({}, {}) is not on the board; rows and columns run 0-7", row, col)]
    InvalidCoordinate { row: usize, col: usize },

    #[display("invalid move for {} at {}; legal moves: {}", color, location, legal)]
    InvalidMove {
        color: Color,
        location: Location,
        legal: LocationList,
    },

    #[display("a {} player is already registered", color)]
    DuplicatePlayerColor { color: Color },

    #[display("no {} player is registered", color)]
    MissingPlayer { color: Color },

    #[display("it is {}'s turn, not {}'s", expected, got)]
    OutOfTurn { expected: Color, got: Color },

    #[display("the game is already over")]
    GameFinished,
}
