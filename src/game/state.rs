//! Per-game state
//!
//! Holds the master code, the guesses made so far with their scores, and
//! whether the master code may be shown.

use crate::core::{Score, Sequence, score};
use tracing::{debug, info};

/// Maximum number of guesses in one game
pub const MAX_ATTEMPTS: usize = 10;

/// One committed guess and its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub guess: Sequence,
    pub score: Score,
}

/// How the game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    /// Solved on guess number `attempts` (1-based)
    Won { attempts: usize },
    Lost,
}

impl Outcome {
    /// Check if no more guesses are accepted
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Error type for illegal game moves
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,
}

/// State of a single game
///
/// The secret is fixed at construction. History only grows, one entry per
/// accepted guess, and never exceeds [`MAX_ATTEMPTS`].
#[derive(Debug, Clone)]
pub struct GameState {
    secret: Sequence,
    history: Vec<Turn>,
    revealed: bool,
}

impl GameState {
    /// Start a game against `secret`
    #[must_use]
    pub fn new(secret: Sequence) -> Self {
        info!("new game started");
        Self {
            secret,
            history: Vec::with_capacity(MAX_ATTEMPTS),
            revealed: false,
        }
    }

    /// Score a guess and record it
    ///
    /// Reveals the secret when the guess is perfect or when it uses the last
    /// attempt.
    ///
    /// # Errors
    /// Returns `GameError::GameOver` if the game was already won or lost.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Sequence;
    /// use mastermind::game::{GameState, Outcome};
    ///
    /// let mut game = GameState::new(Sequence::parse("ABCD").unwrap());
    /// let score = game.submit(Sequence::parse("ABDC").unwrap()).unwrap();
    /// assert_eq!((score.exact(), score.partial()), (2, 2));
    ///
    /// game.submit(Sequence::parse("ABCD").unwrap()).unwrap();
    /// assert_eq!(game.outcome(), Outcome::Won { attempts: 2 });
    /// assert!(game.is_revealed());
    /// ```
    pub fn submit(&mut self, guess: Sequence) -> Result<Score, GameError> {
        if self.outcome().is_over() {
            return Err(GameError::GameOver);
        }

        let result = score(&self.secret, &guess);
        self.history.push(Turn {
            guess,
            score: result,
        });
        debug!(
            attempt = self.history.len(),
            %guess,
            exact = result.exact(),
            partial = result.partial(),
            "guess scored"
        );

        if result.is_perfect() || self.history.len() == MAX_ATTEMPTS {
            self.revealed = true;
            info!(outcome = ?self.outcome(), secret = %self.secret, "game finished");
        }

        Ok(result)
    }

    /// Current outcome, derived from the history
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if let Some(position) = self.history.iter().position(|turn| turn.score.is_perfect()) {
            Outcome::Won {
                attempts: position + 1,
            }
        } else if self.history.len() >= MAX_ATTEMPTS {
            Outcome::Lost
        } else {
            Outcome::InProgress
        }
    }

    /// The master code
    ///
    /// Front ends should only display it when [`Self::is_revealed`] holds.
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Sequence {
        &self.secret
    }

    /// Guesses made so far, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Check if the master code may be shown
    #[inline]
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Number of guesses made
    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    /// Number of guesses left
    #[inline]
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(text: &str) -> Sequence {
        Sequence::parse(text).unwrap()
    }

    #[test]
    fn new_game_is_hidden_and_in_progress() {
        let game = GameState::new(code("ABCD"));
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert!(!game.is_revealed());
        assert_eq!(game.attempts_used(), 0);
        assert_eq!(game.attempts_remaining(), MAX_ATTEMPTS);
        assert!(game.history().is_empty());
    }

    #[test]
    fn immediate_win() {
        let mut game = GameState::new(code("FACE"));
        let result = game.submit(code("face")).unwrap();

        assert!(result.is_perfect());
        assert!(game.is_revealed());
        assert_eq!(game.outcome(), Outcome::Won { attempts: 1 });
    }

    #[test]
    fn win_reports_attempt_number() {
        for attempt in 1..=MAX_ATTEMPTS {
            let mut game = GameState::new(code("ABCD"));
            for _ in 1..attempt {
                game.submit(code("EEEE")).unwrap();
                assert!(!game.is_revealed());
            }
            game.submit(code("ABCD")).unwrap();

            assert!(game.is_revealed());
            assert_eq!(game.outcome(), Outcome::Won { attempts: attempt });
            assert_eq!(game.attempts_used(), attempt);
        }
    }

    #[test]
    fn ten_misses_lose_and_reveal() {
        let mut game = GameState::new(code("ABCD"));
        for turn in 1..=MAX_ATTEMPTS {
            assert_eq!(game.outcome(), Outcome::InProgress);
            game.submit(code("DCBA")).unwrap();
            assert_eq!(game.is_revealed(), turn == MAX_ATTEMPTS);
        }

        assert_eq!(game.outcome(), Outcome::Lost);
        assert_eq!(game.attempts_remaining(), 0);
    }

    #[test]
    fn no_guesses_after_game_over() {
        let mut won = GameState::new(code("ABCD"));
        won.submit(code("ABCD")).unwrap();
        assert_eq!(won.submit(code("ABCD")), Err(GameError::GameOver));
        assert_eq!(won.attempts_used(), 1);

        let mut lost = GameState::new(code("ABCD"));
        for _ in 0..MAX_ATTEMPTS {
            lost.submit(code("FFFF")).unwrap();
        }
        assert_eq!(lost.submit(code("ABCD")), Err(GameError::GameOver));
        assert_eq!(lost.history().len(), MAX_ATTEMPTS);
    }

    #[test]
    fn history_records_scores_in_order() {
        let mut game = GameState::new(code("AABB"));
        game.submit(code("ABAB")).unwrap();
        game.submit(code("BBAA")).unwrap();

        let history = game.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].guess, code("ABAB"));
        assert_eq!(history[0].score, Score::new(2, 2));
        assert_eq!(history[1].guess, code("BBAA"));
        assert_eq!(history[1].score, Score::new(0, 4));
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let mut game = GameState::new(code("CCCC"));
        for _ in 1..MAX_ATTEMPTS {
            game.submit(code("AAAA")).unwrap();
        }
        game.submit(code("CCCC")).unwrap();
        assert_eq!(
            game.outcome(),
            Outcome::Won {
                attempts: MAX_ATTEMPTS
            }
        );
    }
}
