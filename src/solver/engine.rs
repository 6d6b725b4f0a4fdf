//! Main Mastermind solver interface

use super::strategy::Strategy;
use crate::core::{Score, Sequence, score};
use tracing::trace;

/// Main Mastermind solver
///
/// Coordinates the solving process using a given strategy. The guess pool is
/// the full code space, so every one of the 1296 codes is a legal guess.
pub struct Solver<S: Strategy> {
    strategy: S,
    all_codes: Vec<Sequence>,
}

impl<S: Strategy> Solver<S> {
    /// Create a new solver with the given strategy
    #[must_use]
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            all_codes: Sequence::all(),
        }
    }

    /// Get the first guess for a new game
    ///
    /// Uses the strategy's fixed opening if it has one.
    pub fn first_guess(&self) -> Option<Sequence> {
        self.strategy
            .opening()
            .or_else(|| self.strategy.select_guess(&self.all_codes, &self.all_codes))
    }

    /// Get the next guess given previous guesses and scores
    ///
    /// # Parameters
    /// - `history`: Slice of (guess, score) pairs from previous turns
    ///
    /// Returns the next guess, or None if no code is consistent with the
    /// history.
    pub fn next_guess(&self, history: &[(Sequence, Score)]) -> Option<Sequence> {
        if history.is_empty() {
            return self.first_guess();
        }

        let candidates = self.filter_candidates(history);
        trace!(candidates = candidates.len(), "filtered candidates");

        match candidates.as_slice() {
            [] => None,
            [only] => Some(*only),
            _ => self.strategy.select_guess(&self.all_codes, &candidates),
        }
    }

    /// Filter the code space to those consistent with the history
    ///
    /// A code survives if, taken as the secret, it would have produced every
    /// observed score.
    fn filter_candidates(&self, history: &[(Sequence, Score)]) -> Vec<Sequence> {
        self.all_codes
            .iter()
            .filter(|candidate| {
                history
                    .iter()
                    .all(|(guess, observed)| score(candidate, guess) == *observed)
            })
            .copied()
            .collect()
    }

    /// Count how many candidates remain given the history
    pub fn count_candidates(&self, history: &[(Sequence, Score)]) -> usize {
        self.filter_candidates(history).len()
    }

    /// Get the current candidates (public accessor)
    pub fn get_candidates(&self, history: &[(Sequence, Score)]) -> Vec<Sequence> {
        self.filter_candidates(history)
    }
}
