//! Terminal output formatting
//!
//! Board rendering, display utilities for CLI results, and pretty-printing.

pub mod board;
pub mod display;
pub mod formatters;

pub use board::{Board, render_board};
pub use display::{
    print_analysis_result, print_benchmark_result, print_score, print_solve_result,
};
