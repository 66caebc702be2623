//! Tie detection.

use super::win::check_winner;
use crate::Board;

/// Checks if every cell is occupied.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|sq| !sq.is_empty())
}

/// A full board on which no combination is complete.
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
