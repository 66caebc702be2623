//! Exhaustive minimax search with alpha-beta pruning.

use super::{Strategy, Turn, winning_cell};
use crate::{Board, Coord};
use tracing::{debug, instrument};

const WIN: i32 = 1;
const LOSS: i32 = -1;
const TIE: i32 = 0;

/// Exhaustive minimax with alpha-beta pruning.
///
/// Scores are flat: +1 for a win by the searching player, -1 for a win by
/// the opponent, 0 for a tie, whatever the depth. Among moves of equal value
/// the first in row-major order is kept, so the engine does not prefer a
/// faster win over a slower one. An immediate win is always taken first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax;

impl Minimax {
    /// Value of `board` for `turn.actor` with `maximizing` to move next.
    ///
    /// Every simulated placement is reverted before this returns, pruned
    /// branches included.
    fn search(board: &mut Board, turn: Turn, maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
        // Order matters for malformed boards: actor win, opponent win, tie.
        let winner = board.winner();
        if winner == Some(turn.actor) {
            return WIN;
        }
        if winner == Some(turn.opponent) {
            return LOSS;
        }
        if board.is_tie() {
            return TIE;
        }

        let (rows, cols) = (board.rows(), board.cols());

        if maximizing {
            let mut best = i32::MIN;
            'cells: for row in 0..rows {
                for col in 0..cols {
                    let Ok(mut placed) = board.simulate(Coord::new(row, col), turn.actor) else {
                        continue;
                    };
                    let eval = Self::search(&mut placed, turn, false, alpha, beta);
                    drop(placed);

                    best = best.max(eval);
                    alpha = alpha.max(eval);
                    if beta <= alpha {
                        break 'cells;
                    }
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            'cells: for row in 0..rows {
                for col in 0..cols {
                    let Ok(mut placed) = board.simulate(Coord::new(row, col), turn.opponent) else {
                        continue;
                    };
                    let eval = Self::search(&mut placed, turn, true, alpha, beta);
                    drop(placed);

                    best = best.min(eval);
                    beta = beta.min(eval);
                    if beta <= alpha {
                        break 'cells;
                    }
                }
            }
            best
        }
    }
}

impl Strategy for Minimax {
    #[instrument(skip(self, board))]
    fn choose_move(&mut self, board: &mut Board, turn: Turn) -> Option<Coord> {
        if let Some(coord) = winning_cell(board, turn.actor) {
            debug!(%coord, "Minimax taking immediate win");
            return Some(coord);
        }

        let (rows, cols) = (board.rows(), board.cols());
        let mut best: Option<(i32, Coord)> = None;

        for row in 0..rows {
            for col in 0..cols {
                let coord = Coord::new(row, col);
                let Ok(mut placed) = board.simulate(coord, turn.actor) else {
                    continue;
                };
                let value = Self::search(&mut placed, turn, false, i32::MIN, i32::MAX);
                drop(placed);

                if best.is_none_or(|(best_value, _)| value > best_value) {
                    best = Some((value, coord));
                }
            }
        }

        if let Some((value, coord)) = best {
            debug!(%coord, value, "Minimax chose move");
        }
        best.map(|(_, coord)| coord)
    }
}
