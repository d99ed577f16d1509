//! Text front end for `othello-rules`: a line-based REPL, its TOML
//! configuration, and the command-line interface of the `othello` binary.

pub mod cli;
pub mod config;
pub mod repl;

pub use config::{ConfigError, DefaultPlayers, ReplConfig};
pub use repl::{Command, ParseCommandError, Repl};
