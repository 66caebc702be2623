//! Move-selection strategies for computer-controlled players.
//!
//! Every strategy works on the live board through simulate-then-revert
//! ([`Board::simulate`]) and leaves it exactly as it found it.

mod greedy;
mod minimax;
mod random;

pub use greedy::Greedy;
pub use minimax::Minimax;
pub use random::RandomMove;

use crate::{Board, Coord, Symbol};
use serde::{Deserialize, Serialize};

/// The two sides a strategy reasons about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// Player the move is being chosen for.
    pub actor: Symbol,
    /// Player assumed to reply.
    pub opponent: Symbol,
}

impl Turn {
    /// Creates a turn for `actor` against `opponent`.
    pub fn new(actor: impl Into<Symbol>, opponent: impl Into<Symbol>) -> Self {
        Self {
            actor: actor.into(),
            opponent: opponent.into(),
        }
    }
}

/// A policy that picks the next move for a player.
pub trait Strategy {
    /// Chooses an empty cell for `turn.actor`.
    ///
    /// Returns `None` only when the board has no empty cell. The board must
    /// be unchanged when this returns.
    fn choose_move(&mut self, board: &mut Board, turn: Turn) -> Option<Coord>;
}

/// First empty cell, row-major, where `symbol` would complete a combination.
pub(crate) fn winning_cell(board: &mut Board, symbol: Symbol) -> Option<Coord> {
    let (rows, cols) = (board.rows(), board.cols());
    (0..rows)
        .flat_map(|row| (0..cols).map(move |col| Coord::new(row, col)))
        .find(|&coord| {
            board
                .simulate(coord, symbol)
                .is_ok_and(|placed| placed.winner() == Some(symbol))
        })
}

/// Identifier for one of the built-in strategies.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StrategyKind {
    /// Exhaustive search with alpha-beta pruning.
    #[default]
    Minimax,
    /// Win if possible, otherwise block, otherwise first free cell.
    Greedy,
    /// Uniformly random free cell.
    Random,
}

impl StrategyKind {
    /// Every strategy id, in menu order.
    pub fn all() -> Vec<StrategyKind> {
        <StrategyKind as strum::IntoEnumIterator>::iter().collect()
    }
}

/// One instance of each built-in strategy.
///
/// The random strategy carries RNG state, so the set is owned by the engine
/// and reused across moves.
#[derive(Debug)]
pub struct StrategySet {
    minimax: Minimax,
    greedy: Greedy,
    random: RandomMove,
}

impl StrategySet {
    /// Creates the set with a seeded random strategy.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            minimax: Minimax,
            greedy: Greedy,
            random: RandomMove::with_seed(seed),
        }
    }

    /// Creates the set with an OS-seeded random strategy.
    pub fn from_entropy() -> Self {
        Self {
            minimax: Minimax,
            greedy: Greedy,
            random: RandomMove::from_entropy(),
        }
    }

    /// The strategy registered for `kind`.
    pub fn get_mut(&mut self, kind: StrategyKind) -> &mut dyn Strategy {
        match kind {
            StrategyKind::Minimax => &mut self.minimax,
            StrategyKind::Greedy => &mut self.greedy,
            StrategyKind::Random => &mut self.random,
        }
    }
}
