//! Win detection.
//!
//! Winning lines are computed once per board size. The scan order is every
//! row top to bottom, every column left to right, the main diagonal, then the
//! anti-diagonal; when several lines complete at once the first in that order
//! is the one reported.

use crate::{Board, Coord, Square, Symbol};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which line of the board a combination covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// A full row.
    Row(usize),
    /// A full column.
    Column(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row(row) => write!(f, "row {}", row),
            Line::Column(col) => write!(f, "column {}", col),
            Line::Diagonal => write!(f, "diagonal"),
            Line::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// A set of cells that ends the game when uniformly occupied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct WinningCombination {
    /// The line these cells form.
    line: Line,
    /// Cells in the line, in board order.
    cells: Vec<Coord>,
}

impl WinningCombination {
    /// Whether the combination includes `coord`.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Returns the symbol occupying every cell, if there is one.
    pub fn owner(&self, board: &Board) -> Option<Symbol> {
        let mut cells = self.cells.iter().map(|&c| board.get(c));
        let first = cells.next()??;
        match first {
            Square::Empty => None,
            Square::Occupied(symbol) => cells
                .all(|sq| sq == Some(first))
                .then_some(symbol),
        }
    }
}

/// Computes every winning combination for a square board of `size`.
#[instrument]
pub fn winning_combinations(size: usize) -> Vec<WinningCombination> {
    let rows = (0..size).map(|row| WinningCombination {
        line: Line::Row(row),
        cells: (0..size).map(|col| Coord::new(row, col)).collect(),
    });
    let cols = (0..size).map(|col| WinningCombination {
        line: Line::Column(col),
        cells: (0..size).map(|row| Coord::new(row, col)).collect(),
    });
    let diagonal = WinningCombination {
        line: Line::Diagonal,
        cells: (0..size).map(|i| Coord::new(i, i)).collect(),
    };
    let anti_diagonal = WinningCombination {
        line: Line::AntiDiagonal,
        cells: (0..size).map(|i| Coord::new(i, size - i - 1)).collect(),
    };

    rows.chain(cols)
        .chain([diagonal, anti_diagonal])
        .collect()
}

/// Returns the first completed combination in scan order.
pub fn winning_combination(board: &Board) -> Option<&WinningCombination> {
    board
        .combinations()
        .iter()
        .find(|combination| combination.owner(board).is_some())
}

/// Returns the symbol that completed a combination, if any.
///
/// Derived from the board alone, so it is safe to call on simulated
/// positions.
pub fn check_winner(board: &Board) -> Option<Symbol> {
    board
        .combinations()
        .iter()
        .find_map(|combination| combination.owner(board))
}
