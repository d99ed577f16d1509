//! A line-based REPL over a [`GameSession`].
//!
//! Reads one command per line from any [`BufRead`] and writes replies to any
//! [`Write`], so the same loop drives stdin/stdout and in-memory tests.

use crate::config::ReplConfig;
use derive_more::{Display, Error};
use othello_rules::{
    render, Color, GameSession, Location, Outcome, RulesError, TurnReport,
};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

const HELP: &str = "\
Commands:
  player <name> <color>        register the player for black or white
  move <color> <row> <col>     play a move; rows and columns run 0-7
  move <color> <A1..H8>        play a move in letter notation
  moves <color>                list the legal moves for a color
  board                        print the board
  score                        print the piece counts
  winner                       print who is ahead
  help                         print this message
  quit                         leave the game";

/// One parsed line of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Player { name: String, color: Color },
    Move { color: Color, location: Location },
    Moves { color: Color },
    Board,
    Score,
    Winner,
    Help,
    Quit,
}

#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[display("empty command")]
    Empty,
    #[display("unknown command {:?}", word)]
    Unknown { word: String },
    #[display("usage: {}", usage)]
    Usage { usage: &'static str },
    #[display("expected a color: black or white")]
    BadColor,
    #[display("expected a position on the board, like \"2 3\" or \"D3\"")]
    BadLocation,
}

impl std::str::FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Err(ParseCommandError::Empty),
            "player" => {
                const USAGE: &str = "player <name> <color>";
                let (name, color) = rest
                    .rsplit_once(char::is_whitespace)
                    .ok_or(ParseCommandError::Usage { usage: USAGE })?;
                let name = name.trim();
                if name.is_empty() {
                    return Err(ParseCommandError::Usage { usage: USAGE });
                }
                Ok(Command::Player {
                    name: name.to_string(),
                    color: parse_color(color)?,
                })
            }
            "move" | "play" => {
                let (color, location) = rest.split_once(char::is_whitespace).ok_or(
                    ParseCommandError::Usage {
                        usage: "move <color> <row> <col>",
                    },
                )?;
                Ok(Command::Move {
                    color: parse_color(color)?,
                    location: location
                        .parse()
                        .or(Err(ParseCommandError::BadLocation))?,
                })
            }
            "moves" => {
                if rest.is_empty() {
                    return Err(ParseCommandError::Usage {
                        usage: "moves <color>",
                    });
                }
                Ok(Command::Moves {
                    color: parse_color(rest)?,
                })
            }
            "board" => Ok(Command::Board),
            "score" => Ok(Command::Score),
            "winner" => Ok(Command::Winner),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(ParseCommandError::Unknown {
                word: other.to_string(),
            }),
        }
    }
}

fn parse_color(s: &str) -> Result<Color, ParseCommandError> {
    s.parse().or(Err(ParseCommandError::BadColor))
}

/// Whether the loop should keep reading input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Repl<R, W> {
    session: GameSession,
    config: ReplConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    /// Start a fresh game, registering any default players named in `config`.
    pub fn new(config: ReplConfig, input: R, output: W) -> Result<Self, RulesError> {
        let mut session = GameSession::new(config.session);
        if let Some(name) = &config.players.black {
            session.create_player(name.as_str(), Color::Black)?;
        }
        if let Some(name) = &config.players.white {
            session.create_player(name.as_str(), Color::White)?;
        }

        Ok(Self {
            session,
            config,
            input,
            output,
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Read and execute commands until the game ends, `quit`, or end of input.
    /// Returns the final outcome if the game was played to completion and its
    /// winner is registered.
    pub fn run(&mut self) -> io::Result<Option<Outcome>> {
        writeln!(self.output, "Othello. Type 'help' for commands.")?;
        if self.config.show_board {
            self.print_board()?;
        }

        let mut line = String::new();
        loop {
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("end of input");
                writeln!(self.output)?;
                return Ok(None);
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(ParseCommandError::Empty) => continue,
                Err(err) => {
                    writeln!(self.output, "{}. Type 'help' for commands.", err)?;
                    continue;
                }
            };

            if let Flow::Exit = self.execute(command)? {
                break;
            }
        }

        if self.session.is_finished() {
            Ok(self.session.outcome().ok())
        } else {
            Ok(None)
        }
    }

    /// Execute a single command, writing any reply.
    pub fn execute(&mut self, command: Command) -> io::Result<Flow> {
        debug!(?command, "executing");
        match command {
            Command::Player { name, color } => {
                match self.session.create_player(name.as_str(), color) {
                    Ok(()) => writeln!(self.output, "{} plays {}.", name, color)?,
                    Err(err) => writeln!(self.output, "Error: {}", err)?,
                }
            }
            Command::Move { color, location } => return self.play(color, location),
            Command::Moves { color } => {
                writeln!(
                    self.output,
                    "Legal moves for {}: {}",
                    color,
                    self.session.legal_moves(color)
                )?;
            }
            Command::Board => self.print_board()?,
            Command::Score => writeln!(self.output, "Score: {}", self.session.score())?,
            Command::Winner => match self.session.outcome() {
                Ok(outcome) => writeln!(self.output, "{}", outcome)?,
                Err(err) => writeln!(self.output, "Error: {}", err)?,
            },
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Quit => {
                info!("player quit");
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }

    fn play(&mut self, color: Color, location: Location) -> io::Result<Flow> {
        match self.session.play_turn(color, location) {
            Ok(TurnReport::Continue { next, passed }) => {
                if self.config.show_board {
                    self.print_board()?;
                }
                if let Some(passer) = passed {
                    writeln!(self.output, "{} has no legal moves and passes.", passer)?;
                }
                writeln!(self.output, "{} to move.", next)?;
                Ok(Flow::Continue)
            }
            Ok(TurnReport::GameOver(standing)) => {
                self.print_board()?;
                writeln!(self.output, "Game is ended.")?;
                writeln!(self.output, "Score: {}", self.session.score())?;
                // Without a registered winner, report the color alone.
                match self.session.outcome() {
                    Ok(outcome) => writeln!(self.output, "{}", outcome)?,
                    Err(_) => writeln!(self.output, "{}", standing)?,
                }
                Ok(Flow::Exit)
            }
            Err(RulesError::InvalidMove { legal, .. }) => {
                writeln!(self.output, "Invalid move")?;
                writeln!(self.output, "Here are the valid moves: {}", legal)?;
                Ok(Flow::Continue)
            }
            Err(err) => {
                writeln!(self.output, "Error: {}", err)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn print_board(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", render::render(self.session.board()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(row: usize, col: usize) -> Location {
        Location::from_coords(row, col).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(
            "player Leo black".parse(),
            Ok(Command::Player {
                name: "Leo".into(),
                color: Color::Black
            })
        );
        assert_eq!(
            "player Mary Ann white".parse(),
            Ok(Command::Player {
                name: "Mary Ann".into(),
                color: Color::White
            })
        );
        assert_eq!(
            "move black 2 3".parse(),
            Ok(Command::Move {
                color: Color::Black,
                location: loc(2, 3)
            })
        );
        assert_eq!(
            "MOVE white E3".parse(),
            Ok(Command::Move {
                color: Color::White,
                location: loc(2, 4)
            })
        );
        assert_eq!(
            "moves white".parse(),
            Ok(Command::Moves {
                color: Color::White
            })
        );
        assert_eq!("  board ".parse(), Ok(Command::Board));
        assert_eq!("exit".parse(), Ok(Command::Quit));
    }

    #[test]
    fn parse_command_errors() {
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!(
            "jump".parse::<Command>(),
            Err(ParseCommandError::Unknown {
                word: "jump".into()
            })
        );
        assert_eq!(
            "move green 2 3".parse::<Command>(),
            Err(ParseCommandError::BadColor)
        );
        assert_eq!(
            "move black 6000 40000".parse::<Command>(),
            Err(ParseCommandError::BadLocation)
        );
        assert_eq!(
            "move black".parse::<Command>(),
            Err(ParseCommandError::Usage {
                usage: "move <color> <row> <col>"
            })
        );
        assert_eq!(
            "player black".parse::<Command>(),
            Err(ParseCommandError::Usage {
                usage: "player <name> <color>"
            })
        );
        assert_eq!(
            "moves".parse::<Command>(),
            Err(ParseCommandError::Usage {
                usage: "moves <color>"
            })
        );
    }
}
