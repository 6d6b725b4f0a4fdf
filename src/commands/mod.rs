//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_guess};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use simple::{Console, SessionStats, parse_guess, run_simple};
pub use solve::{SolveConfig, SolveResult, solve_code};
