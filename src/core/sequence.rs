//! Mastermind code representation
//!
//! A Sequence stores exactly four peg symbols. It is used both for the hidden
//! master code and for every guess the player commits.

use super::Symbol;
use super::symbol::SYMBOL_COUNT;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Number of pegs in a code
pub const CODE_LENGTH: usize = 4;

/// Number of distinct codes (6^4)
pub const CODE_SPACE: usize = SYMBOL_COUNT.pow(CODE_LENGTH as u32);

/// A four-peg code
///
/// Immutable once built: there are no mutating accessors, so a committed
/// guess or secret cannot change after it has been scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sequence([Symbol; CODE_LENGTH]);

/// Error type for malformed codes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    #[error("code must be exactly {CODE_LENGTH} pegs, got {0}")]
    InvalidLength(usize),
    #[error("'{0}' is not a peg letter (use A-F)")]
    InvalidSymbol(char),
}

impl Sequence {
    /// Build a code from four symbols
    #[inline]
    #[must_use]
    pub const fn new(symbols: [Symbol; CODE_LENGTH]) -> Self {
        Self(symbols)
    }

    /// Build a code from a slice, which must hold exactly four symbols
    ///
    /// # Errors
    /// Returns `SequenceError::InvalidLength` if the slice is not four long.
    pub fn from_symbols(symbols: &[Symbol]) -> Result<Self, SequenceError> {
        let symbols: [Symbol; CODE_LENGTH] = symbols
            .try_into()
            .map_err(|_| SequenceError::InvalidLength(symbols.len()))?;
        Ok(Self(symbols))
    }

    /// Parse a code such as `"ABCD"` or `"abcd"`
    ///
    /// # Errors
    /// Returns `SequenceError` if:
    /// - The text is not exactly four characters
    /// - Any character lies outside A-F / a-f
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Sequence, SequenceError};
    ///
    /// let code = Sequence::parse("abcd").unwrap();
    /// assert_eq!(code.to_string(), "ABCD");
    ///
    /// assert_eq!(Sequence::parse("ABC"), Err(SequenceError::InvalidLength(3)));
    /// assert_eq!(Sequence::parse("ABCG"), Err(SequenceError::InvalidSymbol('G')));
    /// ```
    pub fn parse(text: &str) -> Result<Self, SequenceError> {
        let len = text.chars().count();
        if len != CODE_LENGTH {
            return Err(SequenceError::InvalidLength(len));
        }

        let mut symbols = [Symbol::A; CODE_LENGTH];
        for (slot, ch) in symbols.iter_mut().zip(text.chars()) {
            *slot = Symbol::from_char(ch).ok_or(SequenceError::InvalidSymbol(ch))?;
        }

        Ok(Self(symbols))
    }

    /// Draw a code uniformly at random, repeats allowed
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut symbols = [Symbol::A; CODE_LENGTH];
        for slot in &mut symbols {
            // Index is always < SYMBOL_COUNT
            *slot = Symbol::ALL[rng.random_range(0..SYMBOL_COUNT)];
        }
        Self(symbols)
    }

    /// Decode a code from its rank in lexicographic order (0..1296)
    ///
    /// Returns `None` for ranks outside the code space.
    #[must_use]
    pub fn from_rank(rank: usize) -> Option<Self> {
        if rank >= CODE_SPACE {
            return None;
        }

        let mut symbols = [Symbol::A; CODE_LENGTH];
        let mut remaining = rank;
        for slot in symbols.iter_mut().rev() {
            *slot = Symbol::from_index(remaining % SYMBOL_COUNT)?;
            remaining /= SYMBOL_COUNT;
        }
        Some(Self(symbols))
    }

    /// Rank of this code in lexicographic order
    #[must_use]
    pub fn rank(&self) -> usize {
        self.0
            .iter()
            .fold(0, |acc, symbol| acc * SYMBOL_COUNT + symbol.index())
    }

    /// Every possible code, `AAAA` through `FFFF`
    #[must_use]
    pub fn all() -> Vec<Self> {
        (0..CODE_SPACE).filter_map(Self::from_rank).collect()
    }

    /// Get the symbol at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn symbol_at(&self, position: usize) -> Symbol {
        self.0[position]
    }

    /// Get the code as a symbol array
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[Symbol; CODE_LENGTH] {
        &self.0
    }

    /// Count how many pegs carry `symbol`
    #[inline]
    #[must_use]
    pub fn count_of(&self, symbol: Symbol) -> usize {
        self.0.iter().filter(|&&s| s == symbol).count()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

impl FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse_valid() {
        let code = Sequence::parse("ABCD").unwrap();
        assert_eq!(
            code.symbols(),
            &[Symbol::A, Symbol::B, Symbol::C, Symbol::D]
        );
    }

    #[test]
    fn parse_lowercase_normalized() {
        assert_eq!(
            Sequence::parse("abcd").unwrap(),
            Sequence::parse("ABCD").unwrap()
        );
        assert_eq!(Sequence::parse("fEdC").unwrap().to_string(), "FEDC");
    }

    #[test]
    fn parse_invalid_length() {
        assert_eq!(Sequence::parse(""), Err(SequenceError::InvalidLength(0)));
        assert_eq!(Sequence::parse("ABC"), Err(SequenceError::InvalidLength(3)));
        assert_eq!(
            Sequence::parse("ABCDE"),
            Err(SequenceError::InvalidLength(5))
        );
    }

    #[test]
    fn parse_invalid_symbol() {
        assert_eq!(
            Sequence::parse("ABCG"),
            Err(SequenceError::InvalidSymbol('G'))
        );
        assert_eq!(
            Sequence::parse("a1cd"),
            Err(SequenceError::InvalidSymbol('1'))
        );
        assert_eq!(
            Sequence::parse("AB D"),
            Err(SequenceError::InvalidSymbol(' '))
        );
    }

    #[test]
    fn parse_counts_chars_not_bytes() {
        // Four characters, one of them multi-byte
        assert_eq!(
            Sequence::parse("ABCé"),
            Err(SequenceError::InvalidSymbol('é'))
        );
    }

    #[test]
    fn from_symbols_checks_length() {
        assert!(Sequence::from_symbols(&[Symbol::A; 4]).is_ok());
        assert_eq!(
            Sequence::from_symbols(&[Symbol::A; 3]),
            Err(SequenceError::InvalidLength(3))
        );
        assert_eq!(
            Sequence::from_symbols(&[Symbol::A; 5]),
            Err(SequenceError::InvalidLength(5))
        );
    }

    #[test]
    fn symbol_at_positions() {
        let code = Sequence::parse("FACE").unwrap();
        assert_eq!(code.symbol_at(0), Symbol::F);
        assert_eq!(code.symbol_at(1), Symbol::A);
        assert_eq!(code.symbol_at(2), Symbol::C);
        assert_eq!(code.symbol_at(3), Symbol::E);
    }

    #[test]
    fn equality_is_positional() {
        let abcd = Sequence::parse("ABCD").unwrap();
        let dcba = Sequence::parse("DCBA").unwrap();
        assert_ne!(abcd, dcba);
        assert_eq!(abcd, Sequence::parse("abcd").unwrap());
    }

    #[test]
    fn count_of_duplicates() {
        let code = Sequence::parse("AABA").unwrap();
        assert_eq!(code.count_of(Symbol::A), 3);
        assert_eq!(code.count_of(Symbol::B), 1);
        assert_eq!(code.count_of(Symbol::F), 0);
    }

    #[test]
    fn rank_ordering() {
        assert_eq!(Sequence::parse("AAAA").unwrap().rank(), 0);
        assert_eq!(Sequence::parse("AAAB").unwrap().rank(), 1);
        assert_eq!(Sequence::parse("AABA").unwrap().rank(), 6);
        assert_eq!(Sequence::parse("FFFF").unwrap().rank(), CODE_SPACE - 1);
        assert_eq!(Sequence::from_rank(CODE_SPACE), None);
    }

    #[test]
    fn all_codes_are_distinct_and_sorted() {
        let codes = Sequence::all();
        assert_eq!(codes.len(), 1296);
        assert!(codes.windows(2).all(|pair| pair[0] < pair[1]));
        for (rank, code) in codes.iter().enumerate() {
            assert_eq!(code.rank(), rank);
        }
    }

    #[test]
    fn random_is_reproducible_with_seed() {
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(Sequence::random(&mut first), Sequence::random(&mut second));
        }
    }

    #[test]
    fn random_covers_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; SYMBOL_COUNT];
        for _ in 0..200 {
            for symbol in Sequence::random(&mut rng).symbols() {
                seen[symbol.index()] = true;
            }
        }
        assert!(seen.iter().all(|&s| s), "every symbol should appear");
    }

    #[test]
    fn display() {
        let code = Sequence::parse("beef").unwrap();
        assert_eq!(format!("{code}"), "BEEF");
    }
}
