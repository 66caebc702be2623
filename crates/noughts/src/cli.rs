//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - tic-tac-toe on any square board, against people or the computer
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Grid tic-tac-toe with minimax, greedy and random opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Board size (overrides the config file)
        #[arg(short, long)]
        size: Option<usize>,

        /// Seed for the random strategy (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Make the player at this index computer-controlled (repeatable)
        #[arg(long = "ai", value_name = "INDEX")]
        ai: Vec<usize>,

        /// Exit when the game ends instead of starting over
        #[arg(long)]
        once: bool,
    },

    /// List the available strategy ids
    Strategies,
}
