//! TUI rendering with ratatui
//!
//! Board, keyboard and statistics panels for the game interface.

use super::app::{App, MessageStyle};
use crate::core::{LetterState, ROW_AMOUNT, ROW_LENGTH};
use crate::game::Cell;
use crate::store::SessionStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui<S: SessionStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Message line
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board and keyboard
            Constraint::Percentage(40), // Statistics
        ])
        .split(chunks[1]);

    render_play_area(f, app, main_chunks[0]);
    render_statistics(f, app, main_chunks[1]);
    render_message(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE")
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

fn render_play_area<S: SessionStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(ROW_AMOUNT as u16 + 2),
            Constraint::Min(5),
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

const fn state_color(state: LetterState) -> Color {
    match state {
        LetterState::Correct => Color::Green,
        LetterState::Present => Color::Yellow,
        LetterState::Absent => Color::DarkGray,
    }
}

fn cell_span(cell: Cell, active: bool) -> Span<'static> {
    let text = cell.letter.map_or_else(
        || " _ ".to_string(),
        |l| format!(" {} ", char::from(l).to_ascii_uppercase()),
    );

    let style = match cell.state {
        Some(state) => Style::default()
            .fg(Color::Black)
            .bg(state_color(state))
            .add_modifier(Modifier::BOLD),
        None if active => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::DarkGray),
    };

    Span::styled(text, style)
}

fn render_board<S: SessionStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let game = app.session.game();
    let cursor = game.cursor();

    let lines: Vec<Line> = (0..ROW_AMOUNT)
        .map(|row| {
            let active = !game.is_over() && row + 1 == cursor.current_row;
            let mut spans = Vec::with_capacity(ROW_LENGTH * 2);
            for col in 0..ROW_LENGTH {
                spans.push(cell_span(game.board().cell(row, col), active));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Attempt {}/{ROW_AMOUNT} ", cursor.current_row))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_keyboard<S: SessionStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let keyboard = app.session.game().keyboard();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|key| {
                    let label = format!(" {} ", char::from(key).to_ascii_uppercase());
                    let style = keyboard.get(key).map_or_else(
                        || Style::default().fg(Color::White),
                        |state| Style::default().fg(Color::Black).bg(state_color(state)),
                    );
                    Span::styled(label, style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );

    f.render_widget(widget, area);
}

#[allow(clippy::cast_sign_loss)]
fn render_statistics<S: SessionStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let stats = app.session.store().statistics();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let win_rate = stats.win_rate();
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Win Rate ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(win_rate.round().clamp(0.0, 100.0) as u16)
        .label(format!("{win_rate:.0}% of {} games", stats.played));
    f.render_widget(gauge, chunks[0]);

    let max = stats.distribution.iter().copied().max().unwrap_or(0).max(1);
    let mut lines = vec![
        Line::from(format!(
            "Streak: {}  (best {})",
            stats.current_streak, stats.max_streak
        )),
        Line::from(""),
    ];
    for (i, &count) in stats.distribution.iter().enumerate() {
        let bar_len = (count * 16 / max) as usize;
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", i + 1)),
            Span::styled("█".repeat(bar_len.max(1)), Style::default().fg(Color::Cyan)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let distribution = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} ", app.profile))
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(distribution, chunks[1]);
}

fn render_message<S: SessionStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (text, style) = match &app.status.message {
        Some((text, style)) => {
            let color = match style {
                MessageStyle::Info => Color::White,
                MessageStyle::Success => Color::Green,
                MessageStyle::Error => Color::Red,
            };
            (text.as_str(), Style::default().fg(color).add_modifier(Modifier::BOLD))
        }
        None => ("", Style::default()),
    };

    let message = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );
    f.render_widget(message, area);
}

fn render_status<S: SessionStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let profile = Paragraph::new(format!("Profile: {}", app.profile)).alignment(Alignment::Center);
    f.render_widget(profile, chunks[0]);

    let autosave = if app.session.store().settings().autosave {
        "Autosave: on"
    } else {
        "Autosave: off"
    };
    f.render_widget(
        Paragraph::new(autosave).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = if app.confirm_resume {
        "y: Resume saved game | n: Start fresh"
    } else if app.session.game().is_over() {
        "q: Quit | n: New Game"
    } else {
        "Esc: Quit | Enter: Submit | Ctrl-N: New Game"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
