//! Mastermind
//!
//! A four-peg, six-letter Mastermind game with a Knuth-style minimax solver.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Score, Sequence, score};
//!
//! let secret = Sequence::parse("AABB").unwrap();
//! let guess = Sequence::parse("ABAB").unwrap();
//!
//! assert_eq!(score(&secret, &guess), Score::new(2, 2));
//! ```

// Core domain types
pub mod core;

// Game state and secret generation
pub mod game;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
