//! Noughts - terminal tic-tac-toe against people or the computer.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use crossterm::tty::IsTty;
use noughts::{Cli, Command, GameConfig, Session};
use noughts_engine::StrategyKind;
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            config,
            size,
            seed,
            ai,
            once,
        } => run_play(config, size, seed, ai, once),
        Command::Strategies => {
            for kind in StrategyKind::all() {
                println!("{}", kind);
            }
            Ok(())
        }
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all)]
fn run_play(
    config: Option<PathBuf>,
    size: Option<usize>,
    seed: Option<u64>,
    ai: Vec<usize>,
    once: bool,
) -> Result<()> {
    let config = match config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::classic(),
    }
    .with_overrides(size, seed, &ai)?;

    let engine = config.build_engine()?;
    info!(size = config.board.size, "Starting game");

    let stdout = std::io::stdout();
    let color = stdout.is_tty();
    let mut session = Session::new(engine, std::io::stdin().lock(), stdout.lock())
        .once(once)
        .color(color);
    session.run()
}
