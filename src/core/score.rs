//! Mastermind feedback scoring
//!
//! A score reports two counts for a guess against the master code:
//! - exact: right symbol in the right position
//! - partial: right symbol in a different position
//!
//! Duplicate symbols are handled so that no peg of the secret is credited
//! twice, whether to an exact or to a partial match.

use super::{CODE_LENGTH, Sequence, Symbol};
use std::fmt;

/// Feedback for one guess
///
/// Every call to [`score`] produces a fresh value; nothing accumulates
/// between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Score {
    exact: usize,
    partial: usize,
}

/// Error type for contract violations when scoring raw symbol slices
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    #[error("cannot score a guess of {guess} pegs against a secret of {secret} pegs")]
    LengthMismatch { secret: usize, guess: usize },
}

impl Score {
    /// All pegs exact
    pub const PERFECT: Self = Self {
        exact: CODE_LENGTH,
        partial: 0,
    };

    /// Create a score from raw counts
    #[inline]
    #[must_use]
    pub const fn new(exact: usize, partial: usize) -> Self {
        Self { exact, partial }
    }

    /// Number of exact matches
    #[inline]
    #[must_use]
    pub const fn exact(self) -> usize {
        self.exact
    }

    /// Number of partial matches
    #[inline]
    #[must_use]
    pub const fn partial(self) -> usize {
        self.partial
    }

    /// Exact plus partial
    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.exact + self.partial
    }

    /// Check if every peg was an exact match
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.exact == CODE_LENGTH
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} partial", self.exact, self.partial)
    }
}

/// Score `guess` against the master code `secret`
///
/// # Algorithm
/// 1. Exact pass: every position where the symbols agree is consumed in
///    both codes and counted as exact
/// 2. Partial pass: each remaining guess position, left to right, claims the
///    first unconsumed secret position holding the same symbol
///
/// # Examples
/// ```
/// use mastermind::core::{Sequence, score};
///
/// let secret = Sequence::parse("AABB").unwrap();
/// let guess = Sequence::parse("ABAB").unwrap();
/// let result = score(&secret, &guess);
///
/// assert_eq!(result.exact(), 2);
/// assert_eq!(result.partial(), 2);
/// ```
#[must_use]
pub fn score(secret: &Sequence, guess: &Sequence) -> Score {
    let mut consumed = [false; CODE_LENGTH];
    tally(secret.symbols(), guess.symbols(), &mut consumed)
}

/// Score two symbol slices of equal length
///
/// # Errors
/// Returns `ScoreError::LengthMismatch` if the slices differ in length.
/// Mismatched input is never truncated.
pub fn score_symbols(secret: &[Symbol], guess: &[Symbol]) -> Result<Score, ScoreError> {
    if secret.len() != guess.len() {
        return Err(ScoreError::LengthMismatch {
            secret: secret.len(),
            guess: guess.len(),
        });
    }

    let mut consumed = vec![false; secret.len()];
    Ok(tally(secret, guess, &mut consumed))
}

/// Two-pass scoring over equal-length slices
///
/// `consumed` tracks secret positions already credited and must be all
/// `false` and as long as `secret` on entry.
fn tally(secret: &[Symbol], guess: &[Symbol], consumed: &mut [bool]) -> Score {
    debug_assert_eq!(secret.len(), guess.len());
    debug_assert_eq!(secret.len(), consumed.len());

    // First pass: exact matches
    let mut exact = 0;
    for ((s, g), used) in secret.iter().zip(guess).zip(consumed.iter_mut()) {
        if s == g {
            *used = true;
            exact += 1;
        }
    }

    // Second pass: partial matches among the leftovers
    let mut partial = 0;
    for (s, g) in secret.iter().zip(guess) {
        if s == g {
            continue;
        }

        let claim = secret
            .iter()
            .zip(consumed.iter())
            .position(|(candidate, &used)| !used && candidate == g);

        if let Some(j) = claim {
            consumed[j] = true;
            partial += 1;
        }
    }

    Score { exact, partial }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_str(secret: &str, guess: &str) -> Score {
        let secret = Sequence::parse(secret).unwrap();
        let guess = Sequence::parse(guess).unwrap();
        score(&secret, &guess)
    }

    #[test]
    fn perfect_constant() {
        assert!(Score::PERFECT.is_perfect());
        assert_eq!(Score::PERFECT.exact(), 4);
        assert_eq!(Score::PERFECT.partial(), 0);
    }

    #[test]
    fn identical_codes() {
        assert_eq!(score_str("ABCD", "ABCD"), Score::new(4, 0));
    }

    #[test]
    fn reversed_codes() {
        assert_eq!(score_str("ABCD", "DCBA"), Score::new(0, 4));
    }

    #[test]
    fn paired_duplicates() {
        // Positions 0 and 3 exact; the remaining A and B swap places
        assert_eq!(score_str("AABB", "ABAB"), Score::new(2, 2));
    }

    #[test]
    fn duplicate_cap_in_secret() {
        // Only one A in the guess, so only one A can be credited
        assert_eq!(score_str("AAAA", "ABBB"), Score::new(1, 0));
    }

    #[test]
    fn duplicate_cap_in_guess() {
        // A naive double loop credits the extra guess A's against secret A
        assert_eq!(score_str("ABBB", "AAAA"), Score::new(1, 0));
        assert_eq!(score_str("BABB", "AAAA"), Score::new(1, 0));
        assert_eq!(score_str("BBBA", "AACC"), Score::new(0, 1));
    }

    #[test]
    fn exact_match_not_reused_as_partial() {
        // Guess A at 0 is exact; guess A at 2 must not claim secret position 0
        assert_eq!(score_str("ABCD", "AEAF"), Score::new(1, 0));
    }

    #[test]
    fn no_common_symbols() {
        assert_eq!(score_str("AAAA", "BBBB"), Score::new(0, 0));
        assert_eq!(score_str("ABCD", "EEFF"), Score::new(0, 0));
    }

    #[test]
    fn repeated_calls_do_not_accumulate() {
        let secret = Sequence::parse("CAFE").unwrap();
        let guess = Sequence::parse("FACE").unwrap();
        let first = score(&secret, &guess);
        let second = score(&secret, &guess);
        assert_eq!(first, second);
        assert_eq!(first, Score::new(2, 2));
    }

    #[test]
    fn slices_must_match_in_length() {
        let secret = [Symbol::A, Symbol::B, Symbol::C, Symbol::D];
        let guess = [Symbol::A, Symbol::B, Symbol::C];
        assert_eq!(
            score_symbols(&secret, &guess),
            Err(ScoreError::LengthMismatch {
                secret: 4,
                guess: 3
            })
        );
    }

    #[test]
    fn slices_agree_with_sequences() {
        let secret = Sequence::parse("AABC").unwrap();
        let guess = Sequence::parse("CAAF").unwrap();
        assert_eq!(
            score_symbols(secret.symbols(), guess.symbols()),
            Ok(score(&secret, &guess))
        );
    }

    #[test]
    fn slices_of_other_lengths() {
        use Symbol::{A, B, C};
        assert_eq!(score_symbols(&[], &[]), Ok(Score::new(0, 0)));
        assert_eq!(
            score_symbols(&[A, B, C, A, B], &[B, A, C, C, C]),
            Ok(Score::new(1, 2))
        );
    }

    #[test]
    fn self_score_is_perfect_for_every_code() {
        for code in Sequence::all() {
            let result = score(&code, &code);
            assert!(result.is_perfect(), "{code} vs itself gave {result}");
            assert_eq!(result.partial(), 0);
        }
    }

    #[test]
    fn bounds_hold_for_every_pair() {
        let codes = Sequence::all();
        for secret in &codes {
            for guess in &codes {
                let result = score(secret, guess);
                assert!(result.exact() <= CODE_LENGTH);
                assert!(result.partial() <= CODE_LENGTH);
                assert!(
                    result.total() <= CODE_LENGTH,
                    "{secret} vs {guess} gave {result}"
                );
            }
        }
    }

    #[test]
    fn total_equals_sum_of_per_symbol_minimums() {
        // exact + partial = sum over v of min(count in secret, count in guess),
        // which implies each symbol contributes at most min(k, m)
        let codes = Sequence::all();
        for secret in &codes {
            for guess in &codes {
                let expected: usize = Symbol::ALL
                    .iter()
                    .map(|&v| secret.count_of(v).min(guess.count_of(v)))
                    .sum();
                assert_eq!(
                    score(secret, guess).total(),
                    expected,
                    "{secret} vs {guess}"
                );
            }
        }
    }

    #[test]
    fn swapping_roles_gives_same_score() {
        let codes = Sequence::all();
        for secret in codes.iter().step_by(7) {
            for guess in codes.iter().step_by(5) {
                assert_eq!(score(secret, guess), score(guess, secret));
            }
        }
    }

    #[test]
    fn display() {
        assert_eq!(Score::new(2, 1).to_string(), "2 exact, 1 partial");
    }
}
