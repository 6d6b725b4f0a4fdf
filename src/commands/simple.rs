//! Simple interactive CLI mode
//!
//! Text-based game on a line-oriented console, without TUI

use crate::core::{Sequence, SequenceError};
use crate::game::{GameState, MAX_ATTEMPTS, Outcome, SecretSource};
use crate::output::board::render_board;
use crate::output::formatters::guesses_word;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

/// Parse one line of player input as a guess
///
/// Surrounding whitespace is ignored; everything else must be exactly four
/// letters A-F in either case.
///
/// # Errors
/// Returns `SequenceError` describing why the input was rejected.
pub fn parse_guess(input: &str) -> Result<Sequence, SequenceError> {
    Sequence::parse(input.trim())
}

/// Line-oriented console for one player
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a prompt and read one line
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn print_banner(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "╔══════════════════════════════════════════════════════════════╗"
        )?;
        writeln!(
            self.output,
            "║                   M A S T E R M I N D                        ║"
        )?;
        writeln!(
            self.output,
            "╚══════════════════════════════════════════════════════════════╝\n"
        )?;
        writeln!(
            self.output,
            "I've picked a master code of 4 pegs using the letters A-F."
        )?;
        writeln!(
            self.output,
            "Repeats are allowed, so there are 6 × 6 × 6 × 6 = 1296 possible codes."
        )?;
        writeln!(
            self.output,
            "You have {MAX_ATTEMPTS} guesses. After each guess you'll see:\n"
        )?;
        writeln!(self.output, "  - Exact:   right letter in the right position")?;
        writeln!(
            self.output,
            "  - Partial: right letter in the wrong position\n"
        )?;
        writeln!(self.output, "Type 'quit' at any prompt to leave.\n")
    }

    /// Play a single game against `secret`
    ///
    /// Returns the final outcome, or `None` if the player quit or input ran
    /// out before the game finished.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn play_game(&mut self, secret: Sequence) -> io::Result<Option<Outcome>> {
        let mut game = GameState::new(secret);

        write!(self.output, "{}", render_board(&game))?;
        writeln!(self.output, "\nGuess 1")?;

        loop {
            let Some(input) = self.prompt(
                "Enter the code using (A,B,C,D,E,F). For example, ABCD or abcd from left-to-right",
            )?
            else {
                return Ok(None);
            };

            if matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit") {
                writeln!(
                    self.output,
                    "\nThe master code was {}.",
                    game.secret().to_string().bright_yellow().bold()
                )?;
                return Ok(None);
            }

            let guess = match parse_guess(&input) {
                Ok(guess) => guess,
                Err(err) => {
                    warn!(%input, %err, "rejected guess");
                    writeln!(
                        self.output,
                        "{} ({err})",
                        "ERROR: Bad input, try again.".red()
                    )?;
                    continue;
                }
            };

            // Cannot fail: the loop exits as soon as the game is over
            if game.submit(guess).is_err() {
                break;
            }

            write!(self.output, "{}", render_board(&game))?;

            if game.outcome().is_over() {
                break;
            }
            writeln!(self.output, "\nGuess {}", game.attempts_used() + 1)?;
        }

        let outcome = game.outcome();
        match outcome {
            Outcome::Won { attempts } => writeln!(
                self.output,
                "\n{}",
                format!(
                    "Nice work! You found the master code in {attempts} {}.",
                    guesses_word(attempts)
                )
                .green()
                .bold()
            )?,
            Outcome::Lost => writeln!(
                self.output,
                "\n{}",
                format!("Oops. You were unable to find the solution in {MAX_ATTEMPTS} guesses.")
                    .red()
                    .bold()
            )?,
            Outcome::InProgress => {}
        }

        Ok(Some(outcome))
    }

    /// Run games until the player declines another
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self, source: &mut SecretSource) -> io::Result<SessionStats> {
        let mut stats = SessionStats::default();

        self.print_banner()?;
        if self.prompt("Hit the Enter key to start the game")?.is_none() {
            return Ok(stats);
        }

        loop {
            let outcome = self.play_game(source.next_secret())?;
            stats.record(outcome);

            let Some(outcome) = outcome else {
                break;
            };
            info!(?outcome, games = stats.games, wins = stats.wins, "game over");

            let again = self.prompt("Play again? (yes/no)")?;
            if !matches!(
                again.as_deref().map(str::to_lowercase).as_deref(),
                Some("yes" | "y")
            ) {
                break;
            }
            writeln!(self.output, "\n🔄 New game started!\n")?;
        }

        writeln!(
            self.output,
            "\nGames: {} | Wins: {} | Thanks for playing!\n",
            stats.games, stats.wins
        )?;
        Ok(stats)
    }
}

/// Win/loss tally for one session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub games: usize,
    pub wins: usize,
}

impl SessionStats {
    fn record(&mut self, outcome: Option<Outcome>) {
        match outcome {
            Some(Outcome::Won { .. }) => {
                self.games += 1;
                self.wins += 1;
            }
            Some(Outcome::Lost) => self.games += 1,
            Some(Outcome::InProgress) | None => {}
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// the board.
pub fn run_simple(source: &mut SecretSource) -> anyhow::Result<SessionStats> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    Ok(console.run(source)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(secret: &str, script: &str) -> (Option<Outcome>, String) {
        let mut output = Vec::new();
        let outcome = {
            let mut console = Console::new(Cursor::new(script.as_bytes()), &mut output);
            console
                .play_game(Sequence::parse(secret).unwrap())
                .unwrap()
        };
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn parse_guess_trims_and_normalizes() {
        assert_eq!(parse_guess("  abcd\n"), Sequence::parse("ABCD"));
        assert_eq!(parse_guess("ab"), Err(SequenceError::InvalidLength(2)));
        assert_eq!(parse_guess("abcg"), Err(SequenceError::InvalidSymbol('g')));
    }

    #[test]
    fn win_on_second_guess() {
        let (outcome, text) = play("ABCD", "DCBA\nabcd\n");

        assert_eq!(outcome, Some(Outcome::Won { attempts: 2 }));
        assert!(text.contains("Nice work! You found the master code in 2 guesses."));
        assert!(text.contains("|   D   |   C   |   B   |   A   |   0      4    |"));
        assert!(text.contains("| MASTER |   A   |   B   |   C   |   D   |"));
    }

    #[test]
    fn bad_input_is_reprompted() {
        let (outcome, text) = play("ABCD", "abc\nabcz\n12345\nABCD\n");

        assert_eq!(outcome, Some(Outcome::Won { attempts: 1 }));
        assert_eq!(text.matches("ERROR: Bad input, try again.").count(), 3);
        assert!(text.contains("in 1 guess."));
    }

    #[test]
    fn ten_misses_lose() {
        let script = "EEEE\n".repeat(MAX_ATTEMPTS);
        let (outcome, text) = play("ABCD", &script);

        assert_eq!(outcome, Some(Outcome::Lost));
        assert!(text.contains("Oops. You were unable to find the solution in 10 guesses."));
        assert!(text.contains("| MASTER |   A   |   B   |   C   |   D   |"));
    }

    #[test]
    fn secret_stays_hidden_until_the_end() {
        let (outcome, text) = play("ABCD", "EEEE\n");

        assert_eq!(outcome, None);
        assert!(!text.contains("| MASTER |   A"));
    }

    #[test]
    fn quit_reveals_and_stops() {
        let (outcome, text) = play("FACE", "quit\n");

        assert_eq!(outcome, None);
        assert!(text.contains("The master code was"));
        assert!(text.contains("FACE"));
    }

    #[test]
    fn session_plays_until_declined() {
        let mut source = SecretSource::with_seed(9);
        let mut expected = SecretSource::with_seed(9);
        let first = expected.next_secret();
        let second = expected.next_secret();

        let script = format!("\n{first}\nyes\n{second}\nno\n");
        let mut output = Vec::new();
        let stats = Console::new(Cursor::new(script.into_bytes()), &mut output)
            .run(&mut source)
            .unwrap();

        assert_eq!(stats, SessionStats { games: 2, wins: 2 });
    }

    #[test]
    fn session_ends_on_eof_before_start() {
        let mut source = SecretSource::with_seed(1);
        let mut output = Vec::new();
        let stats = Console::new(Cursor::new(Vec::new()), &mut output)
            .run(&mut source)
            .unwrap();

        assert_eq!(stats, SessionStats::default());
    }
}
