//! Game-level orchestration: two named players, one board, and turn sequencing.
//!
//! For correctness, this higher-level interface is preferred over calling
//! [`Board::apply_move_unchecked`] directly.

use crate::{
    Board, Color, EndRule, Location, LocationList, Outcome, RulesError, Score, SessionConfig,
    Standing,
};
use tracing::{debug, info, instrument, warn};

/// A named participant playing one color. Immutable once created.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Player {
    name: String,
    color: Color,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// Maps each color to the player using it. At most one player per color.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PlayerRegistry {
    black: Option<Player>,
    white: Option<Player>,
}

impl PlayerRegistry {
    /// Register a player for `color`. Fails if that color is already taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        color: Color,
    ) -> Result<&Player, RulesError> {
        let slot = self.slot_mut(color);
        if slot.is_some() {
            return Err(RulesError::DuplicatePlayerColor { color });
        }
        Ok(slot.insert(Player::new(name, color)))
    }

    pub fn get(&self, color: Color) -> Option<&Player> {
        match color {
            Color::Black => self.black.as_ref(),
            Color::White => self.white.as_ref(),
        }
    }

    pub fn name_of(&self, color: Color) -> Option<&str> {
        self.get(color).map(Player::name)
    }

    /// Whether both colors have a player.
    pub fn is_complete(&self) -> bool {
        self.black.is_some() && self.white.is_some()
    }

    /// Registered players, black first.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.black.iter().chain(self.white.iter())
    }

    fn slot_mut(&mut self, color: Color) -> &mut Option<Player> {
        match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        }
    }
}

/// What happened after an accepted move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TurnReport {
    /// The game goes on with `next` to move. `passed` names the side that has
    /// no legal move and must skip its turn, if any.
    Continue { next: Color, passed: Option<Color> },
    /// Nobody can move any more (under the session's [`EndRule`]). Player
    /// names are resolved separately through [`GameSession::outcome`].
    GameOver(Standing),
}

/// One game between two players on one board.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    players: PlayerRegistry,
    config: SessionConfig,
    to_move: Color,
    finished: bool,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl GameSession {
    /// Start a session on the standard opening position, black to move.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_board(Board::new(), config)
    }

    /// Start a session from an arbitrary position, black to move.
    pub fn with_board(board: Board, config: SessionConfig) -> Self {
        Self {
            board,
            players: PlayerRegistry::default(),
            config,
            to_move: Color::default(),
            finished: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// The side due to play next.
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Register the player for `color`.
    #[instrument(skip(self, name))]
    pub fn create_player(&mut self, name: impl Into<String>, color: Color) -> Result<(), RulesError> {
        match self.players.register(name, color) {
            Ok(player) => {
                info!(name = player.name(), %color, "registered player");
                Ok(())
            }
            Err(err) => {
                warn!(%err, "rejected player registration");
                Err(err)
            }
        }
    }

    pub fn legal_moves(&self, color: Color) -> LocationList {
        self.board.legal_moves(color)
    }

    pub fn score(&self) -> Score {
        self.board.score()
    }

    /// The outcome on the current counts, naming the winner.
    pub fn outcome(&self) -> Result<Outcome, RulesError> {
        self.board.outcome(&self.players)
    }

    /// Play `color` at `loc`.
    ///
    /// Illegal moves are rejected with the legal set and leave the session
    /// untouched. Accepted moves report whether the game goes on.
    #[instrument(skip(self))]
    pub fn play_turn(&mut self, color: Color, loc: Location) -> Result<TurnReport, RulesError> {
        if self.finished {
            warn!("move after game over");
            return Err(RulesError::GameFinished);
        }

        if self.config.strict_turns && color != self.to_move {
            warn!(expected = %self.to_move, "move out of turn");
            return Err(RulesError::OutOfTurn {
                expected: self.to_move,
                got: color,
            });
        }

        let legal = self.board.legal_moves(color);
        if !legal.contains(loc) {
            warn!(%legal, "rejected illegal move");
            return Err(RulesError::InvalidMove {
                color,
                location: loc,
                legal,
            });
        }

        self.board.apply_move_unchecked(color, loc);

        let report = match self.next_turn(color) {
            Some((next, passed)) => {
                self.to_move = next;
                if let Some(passer) = passed {
                    info!(%passer, "no legal moves; turn passes");
                }
                debug!(%next, score = %self.board.score(), "turn complete");
                TurnReport::Continue { next, passed }
            }
            None => {
                self.finished = true;
                let standing = self.board.standing();
                info!(%standing, score = %self.board.score(), "game over");
                TurnReport::GameOver(standing)
            }
        };

        Ok(report)
    }

    /// Decide who moves after `mover`: the next side and the side forced to
    /// pass, or None when the game is over.
    fn next_turn(&self, mover: Color) -> Option<(Color, Option<Color>)> {
        let board = &self.board;
        let game_over = match self.config.end_rule {
            EndRule::DoublePass => !board.has_moves(mover) && !board.has_moves(!mover),
            EndRule::ActiveColor => !board.has_moves(mover),
        };
        if game_over {
            return None;
        }

        if board.has_moves(!mover) {
            Some((!mover, None))
        } else {
            Some((mover, Some(!mover)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(row: usize, col: usize) -> Location {
        Location::from_coords(row, col).unwrap()
    }

    fn session_with_players(config: SessionConfig) -> GameSession {
        let mut session = GameSession::new(config);
        session.create_player("Helen", Color::White).unwrap();
        session.create_player("Leo", Color::Black).unwrap();
        session
    }

    #[test]
    fn register_players() {
        let session = session_with_players(SessionConfig::default());
        assert!(session.players().is_complete());
        assert_eq!(session.players().name_of(Color::Black), Some("Leo"));
        assert_eq!(session.players().name_of(Color::White), Some("Helen"));
        assert_eq!(
            session.players().iter().map(Player::name).collect::<Vec<_>>(),
            vec!["Leo", "Helen"]
        );
    }

    #[test]
    fn duplicate_color_rejected() {
        let mut session = session_with_players(SessionConfig::default());
        assert_eq!(
            session.create_player("Eve", Color::Black),
            Err(RulesError::DuplicatePlayerColor {
                color: Color::Black
            })
        );
        assert_eq!(session.players().name_of(Color::Black), Some("Leo"));
    }

    #[test]
    fn opening_turn() {
        let mut session = session_with_players(SessionConfig::default());
        let report = session.play_turn(Color::Black, loc(2, 3)).unwrap();

        assert_eq!(
            report,
            TurnReport::Continue {
                next: Color::White,
                passed: None
            }
        );
        assert_eq!(session.board().get(loc(3, 3)), crate::Cell::Black);
        assert_eq!(session.score(), Score { black: 4, white: 1 });
        assert_eq!(session.to_move(), Color::White);
    }

    #[test]
    fn invalid_move_leaves_session_untouched() {
        let mut session = session_with_players(SessionConfig::default());
        let before = *session.board();

        let err = session.play_turn(Color::White, loc(2, 3)).unwrap_err();
        match err {
            RulesError::InvalidMove { legal, .. } => {
                assert_eq!(legal, session.legal_moves(Color::White));
            }
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(*session.board(), before);
        assert_eq!(session.to_move(), Color::Black);

        // The session carries on after a rejected move.
        assert!(session.play_turn(Color::Black, loc(3, 2)).is_ok());
    }

    #[test]
    fn strict_turns() {
        let mut session = session_with_players(SessionConfig {
            strict_turns: true,
            ..SessionConfig::default()
        });
        assert_eq!(
            session.play_turn(Color::White, loc(2, 4)),
            Err(RulesError::OutOfTurn {
                expected: Color::Black,
                got: Color::White
            })
        );
        session.play_turn(Color::Black, loc(2, 3)).unwrap();
        session.play_turn(Color::White, loc(2, 2)).unwrap();
    }

    #[test]
    fn loose_turns_allow_any_color() {
        let mut session = session_with_players(SessionConfig::default());
        session.play_turn(Color::Black, loc(2, 3)).unwrap();
        assert!(session.play_turn(Color::Black, loc(4, 5)).is_ok());
    }

    #[test]
    fn double_pass_ends_game() {
        // Black's move at (0, 2) wipes out white entirely.
        let board: Board = "
            XO......
            ........
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        let mut session = GameSession::with_board(board, SessionConfig::default());
        session.create_player("Leo", Color::Black).unwrap();
        session.create_player("Helen", Color::White).unwrap();

        let report = session.play_turn(Color::Black, loc(0, 2)).unwrap();
        assert_eq!(report, TurnReport::GameOver(Standing::Winner(Color::Black)));
        assert_eq!(session.outcome(), Ok(Outcome::BlackWins("Leo".into())));
        assert!(session.is_finished());
        assert_eq!(
            session.play_turn(Color::White, loc(0, 3)),
            Err(RulesError::GameFinished)
        );
    }

    #[test]
    fn opponent_without_moves_passes() {
        // After black takes (0, 2), white has nothing, but black can still
        // capture at (2, 0).
        let board: Board = "
            XO......
            O.......
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        let mut session = GameSession::with_board(board, SessionConfig::default());

        let report = session.play_turn(Color::Black, loc(0, 2)).unwrap();
        assert_eq!(
            report,
            TurnReport::Continue {
                next: Color::Black,
                passed: Some(Color::White)
            }
        );
        assert_eq!(session.to_move(), Color::Black);
    }

    #[test]
    fn active_color_rule_ends_when_mover_is_stuck() {
        // After black takes (0, 2), black has no further capture, but white
        // can still take (3, 1) by playing (3, 2).
        let board: Board = "
            XO......
            ........
            ........
            OX......
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();

        let mut double_pass = GameSession::with_board(board, SessionConfig::default());
        double_pass.create_player("Leo", Color::Black).unwrap();
        let report = double_pass.play_turn(Color::Black, loc(0, 2)).unwrap();
        assert_eq!(
            report,
            TurnReport::Continue {
                next: Color::White,
                passed: None
            }
        );

        let mut active = GameSession::with_board(
            board,
            SessionConfig {
                end_rule: EndRule::ActiveColor,
                ..SessionConfig::default()
            },
        );
        active.create_player("Leo", Color::Black).unwrap();
        let report = active.play_turn(Color::Black, loc(0, 2)).unwrap();
        assert_eq!(report, TurnReport::GameOver(Standing::Winner(Color::Black)));
        assert!(active.is_finished());
    }

    #[test]
    fn game_ends_without_registered_players() {
        let board: Board = "
            XO......
            ........
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        let mut session = GameSession::with_board(board, SessionConfig::default());
        assert!(session.legal_moves(Color::Black).contains(loc(0, 2)));

        let report = session.play_turn(Color::Black, loc(0, 2)).unwrap();
        assert_eq!(report, TurnReport::GameOver(Standing::Winner(Color::Black)));
        assert!(session.is_finished());
        assert_eq!(session.score(), Score { black: 3, white: 0 });
        assert_eq!(
            session.outcome(),
            Err(RulesError::MissingPlayer {
                color: Color::Black
            })
        );
    }
}
