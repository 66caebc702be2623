//! Noughts terminal front end
//!
//! Wires the [`noughts_engine`] core to a line-oriented terminal session:
//! configuration loading, command parsing, board rendering and the game loop.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod input;
pub mod render;
pub mod session;

pub use cli::{Cli, Command};
pub use config::{BoardConfig, ConfigError, GameConfig, PlayerConfig};
pub use input::InputError;
pub use session::Session;
