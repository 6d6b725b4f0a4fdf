//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod score;
mod sequence;
mod symbol;

pub use score::{Score, ScoreError, score, score_symbols};
pub use sequence::{CODE_LENGTH, CODE_SPACE, Sequence, SequenceError};
pub use symbol::{SYMBOL_COUNT, Symbol};
