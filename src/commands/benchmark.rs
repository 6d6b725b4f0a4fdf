//! Benchmark command
//!
//! Tests solver performance across many master codes.

use crate::core::{Score, Sequence, score};
use crate::game::MAX_ATTEMPTS;
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: Vec<Sequence>,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub codes_per_second: f64,
}

/// Run benchmark on a set of master codes
///
/// Each code is played for at most [`MAX_ATTEMPTS`] guesses; codes the solver
/// does not crack in time are listed in `failed`.
pub fn run_benchmark<S: Strategy>(
    solver: &Solver<S>,
    secrets: &[Sequence],
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        let pb = ProgressBar::new(secrets.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut solved = 0;
    let mut failed = Vec::new();
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for secret in secrets {
        let mut history: Vec<(Sequence, Score)> = Vec::new();
        let mut guesses = 0;
        let mut success = false;

        while guesses < MAX_ATTEMPTS {
            let Some(guess) = solver.next_guess(&history) else {
                break;
            };
            guesses += 1;

            let result = score(secret, &guess);
            history.push((guess, result));

            if result.is_perfect() {
                success = true;
                break;
            }
        }

        if success {
            solved += 1;
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            debug!(%secret, guesses, "benchmark code not solved");
            failed.push(*secret);
        }

        pb.set_message(format!("{secret} in {guesses}"));
        pb.inc(1);
    }

    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_codes = secrets.len();

    BenchmarkResult {
        total_codes,
        solved,
        failed,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        codes_per_second: total_codes as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{ConsistentStrategy, MinimaxStrategy};

    fn sample(step: usize) -> Vec<Sequence> {
        Sequence::all().into_iter().step_by(step).collect()
    }

    #[test]
    fn benchmark_runs() {
        let solver = Solver::new(MinimaxStrategy);
        let secrets = sample(101);
        let result = run_benchmark(&solver, &secrets, false);

        assert_eq!(result.total_codes, secrets.len());
        assert_eq!(result.solved, secrets.len());
        assert!(result.failed.is_empty());
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 5);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let solver = Solver::new(ConsistentStrategy);
        let secrets = sample(97);
        let result = run_benchmark(&solver, &secrets, false);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert_eq!(result.solved + result.failed.len(), result.total_codes);
    }

    #[test]
    fn benchmark_empty_code_list() {
        let solver = Solver::new(ConsistentStrategy);
        let result = run_benchmark(&solver, &[], false);

        assert_eq!(result.total_codes, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
        assert!(result.average_guesses.abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let solver = Solver::new(MinimaxStrategy);
        let result = run_benchmark(&solver, &sample(89), false);

        // Average should be between min and max
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);

        for &guess_count in result.distribution.keys() {
            assert!((1..=MAX_ATTEMPTS).contains(&guess_count));
        }
    }
}
