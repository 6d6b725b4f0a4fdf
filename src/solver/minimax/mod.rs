//! Minimax-based Mastermind solver
//!
//! Implements worst-case minimization in the style of Knuth's five-guess
//! strategy.

mod calculator;
mod selector;

pub use calculator::{calculate_max_remaining, expected_remaining, partition_sizes};
pub use selector::select_best_guess;
