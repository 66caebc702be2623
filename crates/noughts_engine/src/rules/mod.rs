//! Game rules for grid tic-tac-toe.
//!
//! Pure functions evaluating a [`Board`](crate::Board). Rules are kept apart
//! from board storage so strategies can evaluate simulated positions without
//! touching engine state.

pub mod tie;
pub mod win;

pub use tie::{is_full, is_tie};
pub use win::{Line, WinningCombination, check_winner, winning_combination, winning_combinations};
