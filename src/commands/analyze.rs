//! Guess analysis command
//!
//! Reports how a guess would split a set of candidate codes by score.

use crate::core::{Score, Sequence, SequenceError};
use crate::solver::minimax::{expected_remaining, partition_sizes};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Sequence,
    pub total_candidates: usize,
    /// Candidate count per score, most exact matches first
    pub partitions: Vec<(Score, usize)>,
    pub worst_case: usize,
    pub expected_remaining: f64,
}

/// Analyze how `guess` partitions `candidates`
///
/// # Errors
///
/// Returns an error if the guess is not a valid code.
pub fn analyze_guess(guess: &str, candidates: &[Sequence]) -> Result<AnalysisResult, SequenceError> {
    let guess = Sequence::parse(guess.trim())?;

    let mut partitions: Vec<(Score, usize)> =
        partition_sizes(&guess, candidates).into_iter().collect();
    partitions.sort_unstable_by(|a, b| b.0.cmp(&a.0));

    let worst_case = partitions.iter().map(|&(_, n)| n).max().unwrap_or(0);

    Ok(AnalysisResult {
        guess,
        total_candidates: candidates.len(),
        partitions,
        worst_case,
        expected_remaining: expected_remaining(&guess, candidates),
    })
}
