//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, MessageStyle, NOTICE_DURATION, Notice, run_tui};
pub use rendering::{Screen, key_at, key_rects, screen_layout};
