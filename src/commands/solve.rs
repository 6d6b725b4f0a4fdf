//! Code solving command
//!
//! Lets the solver crack a specific master code and returns the solution path.

use crate::core::{Score, Sequence, SequenceError, score};
use crate::game::MAX_ATTEMPTS;
use crate::solver::minimax::calculate_max_remaining;
use crate::solver::{Solver, Strategy};

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_guesses: MAX_ATTEMPTS,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub secret: Sequence,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Sequence,
    pub score: Score,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Largest partition the guess could have left
    pub worst_case: Option<usize>,
}

/// Solve a specific code using the given solver and strategy
///
/// # Errors
///
/// Returns an error if the secret is not a valid code.
pub fn solve_code<S: Strategy>(
    config: SolveConfig,
    solver: &Solver<S>,
) -> Result<SolveResult, SequenceError> {
    let secret = Sequence::parse(config.secret.trim())?;

    let mut history: Vec<(Sequence, Score)> = Vec::new();
    let mut guesses: Vec<GuessStep> = Vec::new();
    let mut success = false;

    for _ in 0..config.max_guesses {
        let candidates = solver.get_candidates(&history);
        let candidates_before = candidates.len();

        let Some(guess) = solver.next_guess(&history) else {
            break;
        };

        let worst_case =
            (candidates_before > 1).then(|| calculate_max_remaining(&guess, &candidates));

        let result = score(&secret, &guess);
        history.push((guess, result));
        let candidates_after = solver.count_candidates(&history);

        guesses.push(GuessStep {
            guess,
            score: result,
            candidates_before,
            candidates_after,
            worst_case,
        });

        if result.is_perfect() {
            success = true;
            break;
        }
    }

    Ok(SolveResult {
        success,
        guesses,
        secret,
    })
}
