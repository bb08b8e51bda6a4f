//! TUI application state and logic

use super::rendering::{self, screen_layout};
use crate::engine::{GameEngine, GameStatus, Key, Statistics, SubmitResult};
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};

/// How long a wrong-length notice stays up (and blocks input)
pub const NOTICE_DURATION: Duration = Duration::from_millis(1500);

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Application state
pub struct App {
    pub engine: GameEngine,
    pub notice: Option<Notice>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// Message shown under the board
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub style: MessageStyle,
    /// Transient notices disappear at this instant; final results stay
    pub expires_at: Option<Instant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            notice: None,
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// True while a transient error is showing; input is ignored meanwhile
    #[must_use]
    pub fn input_locked(&self, now: Instant) -> bool {
        self.notice
            .as_ref()
            .filter(|n| n.style == MessageStyle::Error)
            .and_then(|n| n.expires_at)
            .is_some_and(|at| now < at)
    }

    /// Drop an expired transient notice
    pub fn tick(&mut self, now: Instant) {
        if self
            .notice
            .as_ref()
            .and_then(|n| n.expires_at)
            .is_some_and(|at| now >= at)
        {
            self.notice = None;
        }
    }

    pub fn new_game(&mut self, now: Instant) {
        self.engine.reset();
        self.notice = Some(Notice {
            text: "New game started!".to_string(),
            style: MessageStyle::Info,
            expires_at: Some(now + NOTICE_DURATION),
        });
    }

    /// Handle a physical key press
    pub fn on_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_game(now);
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => self.apply(Key::Letter(c), now),
            KeyCode::Backspace => self.apply(Key::Backspace, now),
            KeyCode::Enter => self.apply(Key::Enter, now),
            _ => {}
        }
    }

    /// Handle a click on the on-screen keyboard
    pub fn on_click(&mut self, keyboard_area: Rect, column: u16, row: u16, now: Instant) {
        if let Some(key) = rendering::key_at(keyboard_area, column, row).and_then(Key::from_name) {
            self.apply(key, now);
        }
    }

    /// Route a game key through the session and surface the outcome
    pub fn apply(&mut self, key: Key, now: Instant) {
        self.tick(now);
        if self.input_locked(now) {
            return;
        }

        match self.engine.session_mut().handle_key(key) {
            None | Some(SubmitResult::Blocked) => {}
            Some(SubmitResult::WrongLength { expected, .. }) => {
                self.notice = Some(Notice {
                    text: format!("Word must be {expected} letters long."),
                    style: MessageStyle::Error,
                    expires_at: Some(now + NOTICE_DURATION),
                });
            }
            Some(SubmitResult::Accepted { status, .. }) => {
                let session = self.engine.session();
                let target = session.revealed_target().unwrap_or_default().to_uppercase();
                self.notice = match status {
                    GameStatus::InProgress => None,
                    GameStatus::Won => Some(Notice {
                        text: format!("🎉 Correct! The word was: {target}"),
                        style: MessageStyle::Success,
                        expires_at: None,
                    }),
                    GameStatus::Lost => Some(Notice {
                        text: format!("❌ Out of attempts. The word was: {target}"),
                        style: MessageStyle::Error,
                        expires_at: None,
                    }),
                };
                if status.is_over() {
                    debug!("Game finished: {status:?}");
                    self.stats.record(session);
                }
            }
        }
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
    enable_raw_mode().context("failed to enable raw mode")?;
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
        terminal.draw(|f| rendering::ui(f, &app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.on_key(key, Instant::now());
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    let size = terminal.size()?;
                    let screen = screen_layout(
                        Rect::new(0, 0, size.width, size.height),
                        app.engine.session(),
                    );
                    app.on_click(screen.keyboard, mouse.column, mouse.row, Instant::now());
                }
                _ => {}
            }
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
