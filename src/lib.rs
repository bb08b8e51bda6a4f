//! Word Guess
//!
//! A word-guessing game: find the hidden word in a limited number of attempts,
//! with per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::engine::{GameConfig, GameStatus, Key, Session, SubmitResult};
//!
//! let mut session = Session::with_target(Word::new("crane").unwrap(), GameConfig::new());
//! for c in "slate".chars() {
//!     session.handle_key(Key::Letter(c));
//! }
//!
//! if let Some(SubmitResult::Accepted { feedback, status }) = session.handle_key(Key::Enter) {
//!     println!("{}", feedback.to_emoji());
//!     assert_eq!(status, GameStatus::InProgress);
//! }
//! ```

// Core domain types
pub mod core;

// Game state engine
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
