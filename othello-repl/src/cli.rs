//! Command-line interface for the `othello` binary.

use crate::config::ReplConfig;
use clap::{Parser, Subcommand};
use othello_rules::EndRule;
use std::path::PathBuf;

/// Two-player Othello in the terminal
#[derive(Parser, Debug)]
#[command(name = "othello")]
#[command(about = "Two-player Othello in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "othello.toml")]
    pub config: PathBuf,

    /// Log filter when RUST_LOG is not set (off, error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Reject moves from the side that is not due to play
    #[arg(long)]
    pub strict_turns: bool,

    /// When the game ends: double-pass or active-color
    #[arg(long)]
    pub end_rule: Option<EndRule>,

    /// Subcommand to run (defaults to play)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play a game on stdin/stdout
    Play,

    /// Count leaf positions reachable from the opening
    Perft {
        /// Number of plies to search
        #[arg(short, long, default_value_t = 6)]
        depth: u64,
    },
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config.
    pub fn apply(&self, config: &mut ReplConfig) {
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if self.strict_turns {
            config.session.strict_turns = true;
        }
        if let Some(end_rule) = self.end_rule {
            config.session.end_rule = end_rule;
        }
    }

    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Play)
    }
}
