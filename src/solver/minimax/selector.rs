//! Minimax-based guess selection strategy
//!
//! Always selects the guess that minimizes the worst-case remaining candidates.

use super::calculator::calculate_max_remaining;
use crate::core::{CODE_SPACE, Sequence};
use rayon::prelude::*;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Ties prefer a guess that is itself a candidate (it might win outright),
/// then the lowest code in lexicographic order. Returns the guess and its
/// worst case, or `None` if the guess pool is empty.
///
/// # Examples
/// ```
/// use mastermind::core::Sequence;
/// use mastermind::solver::minimax::select_best_guess;
///
/// let pool = vec![
///     Sequence::parse("AAAA").unwrap(),
///     Sequence::parse("ABCD").unwrap(),
/// ];
/// let candidates = vec![
///     Sequence::parse("ABCD").unwrap(),
///     Sequence::parse("BADC").unwrap(),
/// ];
///
/// let (best, worst) = select_best_guess(&pool, &candidates).unwrap();
/// assert_eq!(best.to_string(), "ABCD");
/// assert_eq!(worst, 1);
/// ```
#[must_use]
pub fn select_best_guess(
    guess_pool: &[Sequence],
    candidates: &[Sequence],
) -> Option<(Sequence, usize)> {
    let mut is_candidate = vec![false; CODE_SPACE];
    for candidate in candidates {
        is_candidate[candidate.rank()] = true;
    }

    guess_pool
        .par_iter()
        .map(|guess| {
            let max_remaining = calculate_max_remaining(guess, candidates);
            (*guess, max_remaining)
        })
        .min_by_key(|(guess, max)| (*max, !is_candidate[guess.rank()], *guess))
}
