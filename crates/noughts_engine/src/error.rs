//! Error types for move validation and engine setup.

use crate::{Coord, Symbol};

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coord),

    /// A winning combination has already been completed.
    #[display("Game is already over")]
    GameOver,

    /// The target cell lies outside the board.
    #[display("Cell {} is off the board", _0)]
    OutOfBounds(Coord),

    /// There is no placement at the cell to retract.
    #[display("Cell {} holds no move to retract", _0)]
    NothingToRetract(Coord),
}

impl std::error::Error for MoveError {}

/// Error raised while constructing a board or an engine.
///
/// These are configuration mistakes; a running game never produces them
/// except for [`SetupError::UnknownPlayer`] when a caller names a roster
/// slot that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SetupError {
    /// The board has zero rows or zero columns.
    #[display("Board must have at least one row and one column")]
    EmptyBoard,

    /// Diagonals are only defined for square boards.
    #[display("Board must be square, got {} rows and {} columns", rows, cols)]
    NonSquareBoard {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },

    /// Board rows passed to the parser have differing widths.
    #[display("Board row {} has {} cells, expected {}", row, found, expected)]
    RaggedRow {
        /// Offending row.
        row: usize,
        /// Cells in that row.
        found: usize,
        /// Cells in the first row.
        expected: usize,
    },

    /// Fewer than two players were supplied.
    #[display("At least two players are required, got {}", _0)]
    TooFewPlayers(usize),

    /// A player symbol is whitespace.
    #[display("Player symbols must be visible characters")]
    BlankSymbol,

    /// Two players share a symbol.
    #[display("Symbol '{}' is used by more than one player", _0)]
    DuplicateSymbol(Symbol),

    /// No player sits at the given roster index.
    #[display("No player at index {}", _0)]
    UnknownPlayer(usize),
}

impl std::error::Error for SetupError {}
