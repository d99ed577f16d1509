use anyhow::{Context, Result};
use clap::Parser;
use othello_repl::cli::{Cli, Command};
use othello_repl::{Repl, ReplConfig};
use othello_rules::test_utils::run_perft;
use std::io;
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ReplConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    cli.apply(&mut config);
    config.validate().context("invalid command-line options")?;

    // RUST_LOG wins over the configured level. Logs go to stderr to keep
    // the game on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    if !cli.config.exists() {
        warn!(path = %cli.config.display(), "config file not found, using defaults");
    }

    match cli.command() {
        Command::Play => play(config),
        Command::Perft { depth } => {
            let start = Instant::now();
            let leaves = run_perft(depth);
            info!(depth, leaves, elapsed = ?start.elapsed(), "perft finished");
            println!("perft({}) = {}", depth, leaves);
            Ok(())
        }
    }
}

fn play(config: ReplConfig) -> Result<()> {
    info!(?config, "starting game");
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repl =
        Repl::new(config, stdin.lock(), stdout.lock()).context("registering default players")?;

    match repl.run().context("terminal I/O failed")? {
        Some(outcome) => info!(%outcome, "game finished"),
        None => info!("left before the game finished"),
    }
    Ok(())
}
