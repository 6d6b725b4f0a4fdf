//! Peg symbols
//!
//! The six letters a peg can carry. Parsing is case-insensitive and every
//! symbol is stored and displayed in upper case.

use std::fmt;

/// Number of distinct peg symbols
pub const SYMBOL_COUNT: usize = 6;

/// One peg letter, `A` through `F`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Symbol {
    /// Every symbol in alphabet order
    pub const ALL: [Self; SYMBOL_COUNT] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F];

    /// Parse a single character, accepting either case
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Symbol;
    ///
    /// assert_eq!(Symbol::from_char('c'), Some(Symbol::C));
    /// assert_eq!(Symbol::from_char('F'), Some(Symbol::F));
    /// assert_eq!(Symbol::from_char('g'), None);
    /// ```
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'E' => Some(Self::E),
            'F' => Some(Self::F),
            _ => None,
        }
    }

    /// Look up a symbol by its position in the alphabet (0-5)
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < SYMBOL_COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Position of this symbol in the alphabet (0-5)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical upper-case letter
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Symbol {
    type Error = char;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::from_char(ch).ok_or(ch)
    }
}
