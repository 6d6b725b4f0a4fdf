//! TUI rendering with ratatui
//!
//! Board and session panels for the Mastermind interface.

use super::app::{App, MessageStyle};
use crate::core::{CODE_LENGTH, CODE_SPACE, Score, Sequence};
use crate::game::{MAX_ATTEMPTS, Outcome};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND - Crack the Code")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Color for a peg letter, so repeated symbols are easy to spot
const fn peg_color(symbol: char) -> Color {
    match symbol {
        'A' => Color::Red,
        'B' => Color::Green,
        'C' => Color::Yellow,
        'D' => Color::Blue,
        'E' => Color::Magenta,
        _ => Color::Cyan,
    }
}

fn code_spans(code: &Sequence) -> Vec<Span<'static>> {
    code.symbols()
        .iter()
        .map(|symbol| {
            let ch = symbol.as_char();
            Span::styled(
                format!(" {ch} "),
                Style::default()
                    .fg(peg_color(ch))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

fn score_spans(score: Score) -> Vec<Span<'static>> {
    let misses = CODE_LENGTH.saturating_sub(score.total());
    vec![
        Span::styled("●".repeat(score.exact()), Style::default().fg(Color::Green)),
        Span::styled("○".repeat(score.partial()), Style::default().fg(Color::Yellow)),
        Span::styled("·".repeat(misses), Style::default().fg(Color::DarkGray)),
        Span::raw(format!("  {} exact, {} partial", score.exact(), score.partial())),
    ]
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;

    let mut master = vec![Span::raw(" MASTER  ")];
    if game.is_revealed() {
        master.extend(code_spans(game.secret()));
    } else {
        master.push(Span::styled(
            " *  *  *  * ",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let mut lines = vec![Line::from(master), Line::from("")];

    for slot in 0..MAX_ATTEMPTS {
        let mut spans = vec![Span::raw(format!(" {:>2}.     ", slot + 1))];
        if let Some(turn) = game.history().get(slot) {
            spans.extend(code_spans(&turn.guess));
            spans.push(Span::raw("   "));
            spans.extend(score_spans(turn.score));
        } else if slot == game.attempts_used() && !game.outcome().is_over() {
            let pending: String = app
                .input_buffer
                .chars()
                .chain(std::iter::repeat('_'))
                .take(CODE_LENGTH)
                .map(|c| format!(" {c} "))
                .collect();
            spans.push(Span::styled(
                pending,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                " .  .  .  . ",
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(4), // Hint
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_hint(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let used = app.game.attempts_used();
    let percent = (used * 100 / MAX_ATTEMPTS) as u16;

    let color = match app.game.attempts_remaining() {
        0..=2 => Color::Red,
        3..=5 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses Used ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{used}/{MAX_ATTEMPTS}"));

    f.render_widget(gauge, area);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let content = match &app.hint {
        Some(hint) => vec![
            Line::from(vec![Span::raw("Suggested: ")]
                .into_iter()
                .chain(code_spans(&hint.guess))
                .collect::<Vec<_>>()),
            Line::from(format!(
                "{} of {CODE_SPACE} codes still possible",
                hint.candidates
            )),
        ],
        None => vec![Line::from("Press '?' for a hint")],
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Hint ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.game.outcome() {
        Outcome::Won { .. } => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        Outcome::Lost => (
            " Out of guesses | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Red,
        ),
        Outcome::InProgress => (
            " Enter Guess (A-F, 4 pegs) | Enter to submit | ? for hint ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let best = app
        .stats
        .guess_distribution
        .iter()
        .position(|&count| count > 0)
        .map_or_else(|| "Best: -".to_string(), |n| format!("Best: {n}"));
    let best = Paragraph::new(best).alignment(Alignment::Center);
    f.render_widget(best, chunks[1]);

    let help_text = if app.game.outcome().is_over() {
        "q: Quit | n: New Game"
    } else {
        "Esc: Quit | Enter: Submit | ?: Hint"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
