//! Game state and master code generation
//!
//! The controller front ends (text and TUI) own a [`GameState`] per game and
//! draw secrets from a [`SecretSource`].

mod secret;
mod state;

pub use secret::SecretSource;
pub use state::{GameError, GameState, MAX_ATTEMPTS, Outcome, Turn};
