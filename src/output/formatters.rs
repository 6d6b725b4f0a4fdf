//! Formatting utilities for terminal output

use crate::core::{CODE_LENGTH, Score};

/// Format a score as key pegs
///
/// One `●` per exact match, one `○` per partial match, `·` for the rest.
#[must_use]
pub fn score_pegs(score: Score) -> String {
    let misses = CODE_LENGTH.saturating_sub(score.total());

    let mut result = String::with_capacity(CODE_LENGTH * 3);
    result.push_str(&"●".repeat(score.exact()));
    result.push_str(&"○".repeat(score.partial()));
    result.push_str(&"·".repeat(misses));
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Plural suffix for a count of guesses
#[must_use]
pub const fn guesses_word(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}
