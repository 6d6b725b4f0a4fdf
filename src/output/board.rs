//! ASCII game board
//!
//! Renders the master row (hidden until revealed) above one row per guess
//! slot with its exact and partial counts.

use crate::core::CODE_LENGTH;
use crate::game::{GameState, MAX_ATTEMPTS};
use std::fmt;

const PEG_CELL: &str = "-------+";

/// Display adapter that draws a [`GameState`] as a text board
pub struct Board<'a>(pub &'a GameState);

impl Board<'_> {
    fn rule(f: &mut fmt::Formatter<'_>, left: &str, right: &str) -> fmt::Result {
        write!(f, "{left}")?;
        for _ in 0..CODE_LENGTH {
            write!(f, "{PEG_CELL}")?;
        }
        writeln!(f, "{right}")
    }
}

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.0;

        Self::rule(f, "+--------+", "---------------+")?;
        write!(f, "| MASTER |")?;
        for symbol in game.secret().symbols() {
            if game.is_revealed() {
                write!(f, "   {symbol}   |")?;
            } else {
                write!(f, "  ***  |")?;
            }
        }
        writeln!(f, " Exact Partial |")?;
        Self::rule(f, "|        +", "               |")?;
        Self::rule(f, "| GUESS  +", "---------------|")?;

        for slot in 0..MAX_ATTEMPTS {
            write!(f, "|   {:2}   |", slot + 1)?;
            match game.history().get(slot) {
                Some(turn) => {
                    for symbol in turn.guess.symbols() {
                        write!(f, "   {symbol}   |")?;
                    }
                    writeln!(
                        f,
                        "   {}      {}    |",
                        turn.score.exact(),
                        turn.score.partial()
                    )?;
                }
                None => {
                    for _ in 0..CODE_LENGTH {
                        write!(f, "       |")?;
                    }
                    writeln!(f, "               |")?;
                }
            }

            if slot + 1 < MAX_ATTEMPTS {
                Self::rule(f, "|        +", "---------------|")?;
            }
        }

        Self::rule(f, "+--------+", "---------------+")
    }
}

/// Render the board for a game as a string
#[must_use]
pub fn render_board(game: &GameState) -> String {
    Board(game).to_string()
}
