//! TUI application state and logic

use crate::core::{CODE_LENGTH, Score, Sequence, Symbol};
use crate::game::{GameState, MAX_ATTEMPTS, Outcome, SecretSource};
use crate::output::formatters::guesses_word;
use crate::solver::{MinimaxStrategy, Solver};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App {
    pub game: GameState,
    pub source: SecretSource,
    pub solver: Solver<MinimaxStrategy>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub hint: Option<Hint>,
    pub should_quit: bool,
}

/// Solver suggestion for the current position
#[derive(Debug, Clone)]
pub struct Hint {
    pub guess: Sequence,
    pub candidates: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses, index 1..=10
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl App {
    #[must_use]
    pub fn new(mut source: SecretSource) -> Self {
        let game = GameState::new(source.next_secret());

        Self {
            game,
            source,
            solver: Solver::new(MinimaxStrategy),
            input_buffer: String::with_capacity(CODE_LENGTH),
            messages: vec![
                Message {
                    text: "Welcome! Crack the 4-peg master code using letters A-F.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a guess and press Enter. '?' asks for a hint.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            hint: None,
            should_quit: false,
        }
    }

    /// Add a typed character to the pending guess
    ///
    /// Only peg letters are accepted, in either case, up to four of them.
    pub fn push_char(&mut self, c: char) {
        if self.game.outcome().is_over() {
            return;
        }

        match Symbol::from_char(c) {
            Some(symbol) if self.input_buffer.chars().count() < CODE_LENGTH => {
                self.input_buffer.push(symbol.as_char());
            }
            Some(_) => {
                self.add_message("A code has only 4 pegs", MessageStyle::Error);
            }
            None => {
                self.add_message(
                    &format!("'{c}' is not a peg letter (use A-F)"),
                    MessageStyle::Error,
                );
            }
        }
    }

    pub fn pop_char(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the pending guess
    pub fn submit_input(&mut self) {
        let guess = match Sequence::parse(&self.input_buffer) {
            Ok(guess) => guess,
            Err(err) => {
                self.add_message(&format!("Bad input: {err}"), MessageStyle::Error);
                return;
            }
        };

        let Ok(result) = self.game.submit(guess) else {
            self.add_message(
                "Game over! Press 'n' for a new game.",
                MessageStyle::Error,
            );
            return;
        };

        self.input_buffer.clear();
        self.hint = None;

        match self.game.outcome() {
            Outcome::Won { attempts } => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                self.stats.guess_distribution[attempts] += 1;

                let celebration = match attempts {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 | 5 => "👏 GREAT JOB! 👏",
                    _ => "🎉 SOLVED! 🎉",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message(
                    &format!(
                        "Found the master code in {attempts} {}.",
                        guesses_word(attempts)
                    ),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Outcome::Lost => {
                self.stats.total_games += 1;
                self.add_message(
                    &format!(
                        "Out of guesses! The master code was {}.",
                        self.game.secret()
                    ),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Outcome::InProgress => {
                self.add_message(
                    &format!("{guess}: {result}"),
                    MessageStyle::Info,
                );
            }
        }
    }

    /// Ask the solver for a suggested next guess
    pub fn request_hint(&mut self) {
        if self.game.outcome().is_over() {
            return;
        }

        let history = self.history_for_solver();
        let candidates = self.solver.count_candidates(&history);
        debug!(candidates, "hint requested");

        if let Some(guess) = self.solver.next_guess(&history) {
            self.add_message(
                &format!("Hint: try {guess} ({candidates} codes still possible)"),
                MessageStyle::Info,
            );
            self.hint = Some(Hint { guess, candidates });
        }
    }

    pub fn new_game(&mut self) {
        self.game = GameState::new(self.source.next_secret());
        self.input_buffer.clear();
        self.hint = None;
        self.messages.clear();
        self.add_message(
            "New game started! A fresh master code has been chosen.",
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn history_for_solver(&self) -> Vec<(Sequence, Score)> {
        self.game
            .history()
            .iter()
            .map(|turn| (turn.guess, turn.score))
            .collect()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Char(c) if app.game.outcome().is_over() => match c {
                    'q' => app.should_quit = true,
                    'n' => app.new_game(),
                    _ => {}
                },
                KeyCode::Char('?') => app.request_hint(),
                KeyCode::Char(c) => app.push_char(c),
                KeyCode::Backspace => app.pop_char(),
                KeyCode::Enter => app.submit_input(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
