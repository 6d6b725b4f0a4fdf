//! Master code generation

use crate::core::Sequence;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

/// Source of master codes
///
/// Seeded sources replay the same sequence of secrets, which keeps games
/// and tests reproducible.
#[derive(Debug, Clone)]
pub struct SecretSource {
    rng: StdRng,
}

impl SecretSource {
    /// Create a source seeded from the operating system
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a deterministic source
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        debug!(seed, "seeded secret source");
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick `with_seed` when a seed is given, otherwise `new`
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::with_seed)
    }

    /// Draw the next master code
    pub fn next_secret(&mut self) -> Sequence {
        Sequence::random(&mut self.rng)
    }
}

impl Default for SecretSource {
    fn default() -> Self {
        Self::new()
    }
}
