//! Uniformly random move selection.

use super::{Strategy, Turn};
use crate::{Board, Coord};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Picks any empty cell with equal probability.
///
/// Seeded explicitly so a game can be replayed move for move.
#[derive(Debug, Clone)]
pub struct RandomMove {
    rng: StdRng,
    seed: u64,
}

impl RandomMove {
    /// Creates a strategy with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a strategy seeded from the thread RNG.
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::rng().random();
        Self::with_seed(seed)
    }

    /// The seed this strategy started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Strategy for RandomMove {
    #[instrument(skip(self, board), fields(seed = self.seed))]
    fn choose_move(&mut self, board: &mut Board, _turn: Turn) -> Option<Coord> {
        let cells: Vec<Coord> = board.empty_cells().collect();
        let choice = cells.choose(&mut self.rng).copied();
        debug!(?choice, available = cells.len(), "Random move");
        choice
    }
}
