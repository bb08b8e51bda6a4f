//! TUI rendering with ratatui
//!
//! Board grid, on-screen keyboard and status line for the game.

use super::app::{App, MessageStyle};
use crate::core::FeedbackKind;
use crate::engine::{KEYBOARD_LAYOUT, LetterStates, Session};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::time::Instant;

const KEYBOARD_HEIGHT: u16 = 7;
const KEY_GAP: u16 = 1;

/// Screen regions, shared by drawing and mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    pub header: Rect,
    pub board: Rect,
    pub notice: Rect,
    pub keyboard: Rect,
    pub status: Rect,
}

/// Split the terminal into screen regions
#[must_use]
pub fn screen_layout(area: Rect, session: &Session) -> Screen {
    // One line per row plus a spacer between rows, inside a border
    let board_height = u16::try_from(session.max_attempts().saturating_mul(2).saturating_add(1))
        .unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Min(board_height),       // Board
            Constraint::Length(3),               // Notice
            Constraint::Length(KEYBOARD_HEIGHT), // Keyboard
            Constraint::Length(1),               // Status bar
        ])
        .split(area);

    Screen {
        header: chunks[0],
        board: chunks[1],
        notice: chunks[2],
        keyboard: chunks[3],
        status: chunks[4],
    }
}

fn key_width(label: &str) -> u16 {
    if label.len() == 1 {
        3
    } else {
        label.len() as u16 + 2
    }
}

/// Position of every on-screen key inside the keyboard region
///
/// Rows are centred; keys that do not fit are left out.
#[must_use]
pub fn key_rects(area: Rect) -> Vec<(Rect, &'static str)> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let mut rects = Vec::new();

    for (i, row) in KEYBOARD_LAYOUT.iter().enumerate() {
        let y = inner.y + (i as u16) * 2;
        if y >= inner.bottom() {
            break;
        }

        let row_width: u16 = row.iter().map(|label| key_width(label)).sum::<u16>()
            + (row.len() as u16).saturating_sub(1) * KEY_GAP;
        let mut x = inner.x + inner.width.saturating_sub(row_width) / 2;

        for &label in *row {
            let width = key_width(label);
            if x + width > inner.right() {
                break;
            }
            rects.push((Rect::new(x, y, width, 1), label));
            x += width + KEY_GAP;
        }
    }

    rects
}

/// Label of the on-screen key at a terminal cell, if any
#[must_use]
pub fn key_at(area: Rect, column: u16, row: u16) -> Option<&'static str> {
    key_rects(area)
        .into_iter()
        .find(|(rect, _)| {
            column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
        })
        .map(|(_, label)| label)
}

fn feedback_style(kind: Option<FeedbackKind>) -> Style {
    match kind {
        Some(FeedbackKind::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(FeedbackKind::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(FeedbackKind::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let session = app.engine.session();
    let screen = screen_layout(f.area(), session);

    render_header(f, screen.header);
    render_board(f, app, screen.board);
    render_notice(f, app, screen.notice);
    render_keyboard(f, session.letter_states(), screen.keyboard);
    render_status(f, app, screen.status);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 WORD GUESS")
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

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = app.engine.session();
    let width = session.target_word_length();
    let shaking = app.input_locked(Instant::now());
    let empty_cell = || Span::styled(" _ ", Style::default().fg(Color::DarkGray));

    let mut lines = Vec::with_capacity(session.max_attempts() * 2);
    for r in 0..session.max_attempts() {
        let mut spans = Vec::with_capacity(width * 2);

        if let Some(row) = session.rows().get(r) {
            for (letter, kind) in row.letters() {
                spans.push(Span::styled(
                    format!(" {} ", letter.to_ascii_uppercase()),
                    feedback_style(Some(kind)),
                ));
                spans.push(Span::raw(" "));
            }
        } else if r == session.rows().len() && session.accepts_input() {
            let style = if shaking {
                feedback_style(None).fg(Color::Red)
            } else {
                feedback_style(None)
            };
            let typed: Vec<char> = session.current_input().chars().collect();
            for i in 0..width {
                spans.push(typed.get(i).map_or_else(empty_cell, |c| {
                    Span::styled(format!(" {} ", c.to_ascii_uppercase()), style)
                }));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..width {
                spans.push(empty_cell());
                spans.push(Span::raw(" "));
            }
        }

        spans.pop();
        if r > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" {width} letters "))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_notice(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match &app.notice {
        Some(notice) => {
            let color = match notice.style {
                MessageStyle::Info => Color::White,
                MessageStyle::Success => Color::Green,
                MessageStyle::Error => Color::Red,
            };
            (
                notice.text.as_str(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
        None => (
            "Type a guess and press Enter",
            Style::default().fg(Color::DarkGray),
        ),
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, states: &LetterStates, area: Rect) {
    let block = Block::default()
        .title(" Keyboard ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    f.render_widget(block, area);

    for (rect, label) in key_rects(area) {
        let mut chars = label.chars();
        let (text, style) = match (chars.next(), chars.next()) {
            (Some(letter), None) => (
                format!(" {} ", letter.to_ascii_uppercase()),
                feedback_style(states.get(letter)),
            ),
            _ => (
                format!(" {label} "),
                Style::default().fg(Color::Black).bg(Color::Gray),
            ),
        };
        f.render_widget(Paragraph::new(text).style(style), rect);
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let session = app.engine.session();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let attempts_text = format!(
        "Attempt: {}/{}",
        session.attempt_index(),
        session.max_attempts()
    );
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("Esc: Quit | Ctrl-N: New Game | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
