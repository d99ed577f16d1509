//! `othello-rules` is the rules engine for two-player Othello on an 8x8 board.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`Board`] owns the grid and implements the rules themselves: legal-move
//!    enumeration, move application with flipping, and scoring.
//!    [`Board::apply_move_unchecked`] trusts its caller, so the board is left in
//!    an inconsistent state if the move was never checked for legality.
//!  - [`GameSession`] is the safe, high-level interface. It registers the two
//!    players, validates every move, and decides when the game is over.
//!
//! Rendering lives in [`render`] and never mutates the board.

pub mod render;
pub mod test_utils;

mod board;
mod color;
mod config;
mod error;
mod location;
mod session;

pub use board::*;
pub use color::*;
pub use config::*;
pub use error::*;
pub use location::*;
pub use session::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
