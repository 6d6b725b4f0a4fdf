//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::Sequence;

/// A strategy for selecting the next guess from a pool of codes
pub trait Strategy {
    /// Select the best guess from the guess pool given the current candidates
    ///
    /// Returns the best guess, or `None` if nothing can be selected.
    fn select_guess(&self, guess_pool: &[Sequence], candidates: &[Sequence]) -> Option<Sequence>;

    /// Fixed first guess, if the strategy has one
    fn opening(&self) -> Option<Sequence> {
        None
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Worst-case minimization (default)
    Minimax(MinimaxStrategy),
    /// First consistent candidate
    Consistent(ConsistentStrategy),
    /// Random selection from candidates
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess(&self, guess_pool: &[Sequence], candidates: &[Sequence]) -> Option<Sequence> {
        match self {
            Self::Minimax(s) => s.select_guess(guess_pool, candidates),
            Self::Consistent(s) => s.select_guess(guess_pool, candidates),
            Self::Random(s) => s.select_guess(guess_pool, candidates),
        }
    }

    fn opening(&self) -> Option<Sequence> {
        match self {
            Self::Minimax(s) => s.opening(),
            Self::Consistent(s) => s.opening(),
            Self::Random(s) => s.opening(),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "minimax", "consistent", "random".
    /// Defaults to minimax if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "consistent" | "simple" => Self::Consistent(ConsistentStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Minimax(MinimaxStrategy),
        }
    }
}

/// Pure minimax strategy
///
/// Selects the guess that minimizes worst-case remaining candidates, searching
/// the whole guess pool rather than only the candidates.
pub struct MinimaxStrategy;

impl MinimaxStrategy {
    /// Knuth's opening, worst case 256 remaining
    pub const OPENING: &'static str = "AABB";
}

impl Strategy for MinimaxStrategy {
    fn select_guess(&self, guess_pool: &[Sequence], candidates: &[Sequence]) -> Option<Sequence> {
        if let [only] = candidates {
            return Some(*only);
        }

        super::minimax::select_best_guess(guess_pool, candidates).map(|(best, _)| best)
    }

    fn opening(&self) -> Option<Sequence> {
        Sequence::parse(Self::OPENING).ok()
    }
}

/// Consistent strategy
///
/// Always plays the lowest code that is still a candidate.
pub struct ConsistentStrategy;

impl Strategy for ConsistentStrategy {
    fn select_guess(&self, _guess_pool: &[Sequence], candidates: &[Sequence]) -> Option<Sequence> {
        candidates.iter().min().copied()
    }
}

/// Random strategy
///
/// Randomly selects from remaining candidates.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess(&self, _guess_pool: &[Sequence], candidates: &[Sequence]) -> Option<Sequence> {
        use rand::prelude::IndexedRandom;

        candidates.choose(&mut rand::rng()).copied()
    }
}
