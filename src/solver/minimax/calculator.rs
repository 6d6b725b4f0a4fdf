//! Partition calculations for Mastermind scores
//!
//! Given a guess and set of candidates, groups the candidates by the score the
//! guess would receive against each of them.

use crate::core::{Score, Sequence, score};
use rustc_hash::FxHashMap;

/// Count the candidates that would produce each score for `guess`
///
/// # Examples
/// ```
/// use mastermind::core::{Score, Sequence};
/// use mastermind::solver::minimax::partition_sizes;
///
/// let guess = Sequence::parse("AABB").unwrap();
/// let candidates = Sequence::all();
///
/// let partitions = partition_sizes(&guess, &candidates);
/// assert_eq!(partitions.values().sum::<usize>(), 1296);
/// assert_eq!(partitions.get(&Score::PERFECT), Some(&1));
/// ```
#[must_use]
pub fn partition_sizes(guess: &Sequence, candidates: &[Sequence]) -> FxHashMap<Score, usize> {
    let mut counts = FxHashMap::default();

    // Scored as if each candidate were the secret
    for candidate in candidates {
        *counts.entry(score(candidate, guess)).or_insert(0) += 1;
    }

    counts
}

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the size of the largest partition, i.e. the worst case after
/// this guess is scored.
#[must_use]
pub fn calculate_max_remaining(guess: &Sequence, candidates: &[Sequence]) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    partition_sizes(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Expected number of candidates left after `guess`, assuming every
/// candidate is equally likely to be the secret
#[must_use]
pub fn expected_remaining(guess: &Sequence, candidates: &[Sequence]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let sum_of_squares: usize = partition_sizes(guess, candidates)
        .values()
        .map(|&n| n * n)
        .sum();

    sum_of_squares as f64 / candidates.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(texts: &[&str]) -> Vec<Sequence> {
        texts.iter().map(|t| Sequence::parse(t).unwrap()).collect()
    }

    #[test]
    fn max_remaining_perfect_split() {
        let guess = Sequence::parse("ABCD").unwrap();
        let candidates = codes(&["ABCD", "EEEE"]);

        assert_eq!(calculate_max_remaining(&guess, &candidates), 1);
    }

    #[test]
    fn max_remaining_all_same_score() {
        // None of the candidates share a symbol with the guess
        let guess = Sequence::parse("AAAA").unwrap();
        let candidates = codes(&["BBBB", "CCCC", "DDDD"]);

        assert_eq!(calculate_max_remaining(&guess, &candidates), 3);
    }

    #[test]
    fn max_remaining_empty_candidates() {
        let guess = Sequence::parse("AAAA").unwrap();
        assert_eq!(calculate_max_remaining(&guess, &[]), 0);
        assert!(expected_remaining(&guess, &[]).abs() < f64::EPSILON);
    }

    #[test]
    fn knuth_opening_worst_case() {
        // AABB leaves at most 256 codes, the well-known minimax opening value
        let guess = Sequence::parse("AABB").unwrap();
        assert_eq!(calculate_max_remaining(&guess, &Sequence::all()), 256);
    }

    #[test]
    fn partitions_cover_all_candidates() {
        let all = Sequence::all();
        for guess in ["AAAA", "ABCD", "AABC", "FFEE"] {
            let guess = Sequence::parse(guess).unwrap();
            let partitions = partition_sizes(&guess, &all);
            assert_eq!(partitions.values().sum::<usize>(), all.len());
            assert!(partitions.len() <= 14, "at most 14 reachable scores");
        }
    }

    #[test]
    fn expected_remaining_bounds() {
        let all = Sequence::all();
        let guess = Sequence::parse("ABCD").unwrap();
        let expected = expected_remaining(&guess, &all);
        assert!(expected >= 1.0);
        assert!(expected <= all.len() as f64);
    }
}
