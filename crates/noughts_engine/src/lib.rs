//! Noughts engine - tic-tac-toe on square boards of any size
//!
//! The engine owns a board, an ordered roster of players, and one strategy
//! assignment per player. Computer-controlled players pick their moves from
//! minimax, greedy or random strategies.
//!
//! # Architecture
//!
//! - **Board**: row-major grid with simulate-then-revert placements
//! - **Rules**: winning combinations, winner and tie detection
//! - **Strategy**: pluggable move selection for AI players
//! - **Engine**: turn order, move validation and AI dispatch
//!
//! # Example
//!
//! ```
//! use noughts_engine::{GameEngine, GameStatus, Move};
//!
//! let mut engine = GameEngine::classic();
//! engine.apply_move(Move::new(1, 1, 'X')).unwrap();
//! engine.switch_player();
//!
//! let reply = engine.best_move().unwrap();
//! engine.apply_move(Move::at(reply, *engine.current_player().symbol())).unwrap();
//! assert_eq!(engine.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod engine;
mod error;
mod types;

// Public modules
pub mod rules;
pub mod strategy;

// Crate-level exports - Board and domain types
pub use board::{Board, Placement};
pub use types::{Coord, GameStatus, Move, Player, Square, Symbol};

// Crate-level exports - Errors
pub use error::{MoveError, SetupError};

// Crate-level exports - Engine
pub use engine::GameEngine;

// Crate-level exports - Rules and strategies
pub use rules::{Line, WinningCombination};
pub use strategy::{Greedy, Minimax, RandomMove, Strategy, StrategyKind, StrategySet, Turn};
