//! Display functions for command results

use super::formatters::{create_progress_bar, guesses_word, score_pegs};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::Score;
use crate::game::MAX_ATTEMPTS;
use colored::Colorize;

/// Print the score of one guess against one secret
pub fn print_score(secret: &str, guess: &str, score: Score) {
    println!(
        "{} vs {}: {} {}",
        secret.to_uppercase().bright_yellow().bold(),
        guess.to_uppercase().bright_white().bold(),
        score_pegs(score),
        score
    );
}

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}  ({})",
            i + 1,
            step.guess,
            score_pegs(step.score),
            step.score
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(worst) = step.worst_case {
                println!("  Worst case: {worst} candidates");
            }
        }
    }

    println!();
    let count = result.guesses.len();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {count} {}!", guesses_word(count))
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {count} {}", guesses_word(count))
                .red()
                .bold()
        );
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.guess.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible codes:", result.total_candidates);
    println!("   Distinct scores: {}", result.partitions.len());
    println!(
        "   Worst case:      {}",
        format!("{} codes", result.worst_case).bright_yellow()
    );
    println!(
        "   Expected:        {:.1} codes remain",
        result.expected_remaining
    );

    println!("\n   {:<8} {:<18} {:>6}", "Pegs", "Score", "Codes");
    for &(score, count) in &result.partitions {
        let bar = create_progress_bar(count as f64, result.worst_case as f64, 20);
        println!(
            "   {:<8} {:<18} {:>6} {}",
            score_pegs(score),
            score.to_string(),
            count,
            bar.green()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Codes tested:     {}", result.total_codes);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_codes).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Codes/second:     {:.1}", result.codes_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=MAX_ATTEMPTS {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_codes as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count:2}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.failed.is_empty() {
        println!(
            "\n{} {}",
            "❌ Not solved:".red().bold(),
            result
                .failed
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
}
