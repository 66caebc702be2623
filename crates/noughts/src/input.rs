//! Parsing of lines typed by a human player.

use derive_more::Display;
use noughts_engine::{Coord, StrategyKind};
use std::str::FromStr;

/// A command entered at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current player's symbol (`ROW COL`).
    Place(Coord),
    /// Toggle computer control for a player (`ai INDEX`).
    ToggleAi(usize),
    /// Assign a strategy to a player (`strategy INDEX KIND`).
    Strategy(usize, StrategyKind),
    /// Start a new game with the same roster.
    Reset,
    /// Show the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// Error for a line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// Nothing was typed.
    #[display("Empty input")]
    Empty,
    /// The first word is not a known command.
    #[display("Unknown command '{}', type 'help' for a list", _0)]
    Unknown(String),
    /// A number was expected.
    #[display("Expected a number, got '{}'", _0)]
    NotANumber(String),
    /// The command has the wrong number of arguments.
    #[display("Usage: {}", _0)]
    Usage(&'static str),
    /// The strategy id is not recognized.
    #[display("Unknown strategy '{}'", _0)]
    UnknownStrategy(String),
}

impl std::error::Error for InputError {}

/// Command list shown by `help`.
pub const HELP: &str = "\
Commands:
  ROW COL                 place your symbol (0-based)
  ai INDEX                toggle computer control for a player
  strategy INDEX KIND     set a player's strategy (minimax, greedy, random)
  reset                   start over with the same players
  help                    show this list
  quit                    leave the game";

fn number(word: &str) -> Result<usize, InputError> {
    word.parse()
        .map_err(|_| InputError::NotANumber(word.to_string()))
}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some(first) = words.first() else {
            return Err(InputError::Empty);
        };

        match first.to_ascii_lowercase().as_str() {
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "help" | "?" => Ok(Command::Help),
            "reset" => Ok(Command::Reset),
            "ai" => match words[1..] {
                [index] => Ok(Command::ToggleAi(number(index)?)),
                _ => Err(InputError::Usage("ai INDEX")),
            },
            "strategy" => match words[1..] {
                [index, kind] => {
                    let kind = StrategyKind::from_str(kind)
                        .map_err(|_| InputError::UnknownStrategy(kind.to_string()))?;
                    Ok(Command::Strategy(number(index)?, kind))
                }
                _ => Err(InputError::Usage("strategy INDEX KIND")),
            },
            word if word.starts_with(|c: char| c.is_ascii_digit()) => match words[..] {
                [row, col] => Ok(Command::Place(Coord::new(number(row)?, number(col)?))),
                _ => Err(InputError::Usage("ROW COL")),
            },
            _ => Err(InputError::Unknown((*first).to_string())),
        }
    }
}
