//! Mastermind solving algorithms
//!
//! This module contains the code-breaking solver and its guess strategies.

mod engine;
pub mod minimax;
pub mod strategy;

pub use engine::Solver;
pub use strategy::{ConsistentStrategy, MinimaxStrategy, RandomStrategy, Strategy, StrategyType};
