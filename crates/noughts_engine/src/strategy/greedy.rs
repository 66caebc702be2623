//! One-ply heuristic: win, else block, else first free cell.

use super::{Strategy, Turn, winning_cell};
use crate::{Board, Coord};
use tracing::{debug, instrument};

/// Takes an immediate win, otherwise blocks the opponent's immediate win,
/// otherwise plays the first empty cell in row-major order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl Strategy for Greedy {
    #[instrument(skip(self, board))]
    fn choose_move(&mut self, board: &mut Board, turn: Turn) -> Option<Coord> {
        if let Some(coord) = winning_cell(board, turn.actor) {
            debug!(%coord, "Greedy taking win");
            return Some(coord);
        }

        if let Some(coord) = winning_cell(board, turn.opponent) {
            debug!(%coord, "Greedy blocking");
            return Some(coord);
        }

        board.empty_cells().next()
    }
}
