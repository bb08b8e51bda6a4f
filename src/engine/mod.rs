//! Game engine
//!
//! Turn and state management around the feedback algorithm. Presentation
//! layers drive a [`Session`] through [`Key`]s or its public operations and
//! render from its read-only accessors.

mod config;
mod input;
mod letters;
mod session;
mod stats;

pub use config::{GameConfig, MAX_ATTEMPTS, MAX_ATTEMPTS_LIMIT};
pub use input::{KEYBOARD_LAYOUT, Key};
pub use letters::LetterStates;
pub use session::{GameStatus, Guess, Session, SubmitResult};
pub use stats::Statistics;

use crate::core::Word;
use log::info;
use thiserror::Error;

/// Errors raised when a game cannot be started
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("word list contains no usable words")]
    InvalidWordList,
}

/// Owns the word list and the current session
///
/// Resetting replaces the session wholesale with a fresh one drawn from the
/// same list.
#[derive(Debug, Clone)]
pub struct GameEngine {
    words: Vec<Word>,
    config: GameConfig,
    session: Session,
}

impl GameEngine {
    /// Validate `words` and start the first session
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidWordList` if the list has no usable entries.
    pub fn new<S: AsRef<str>>(words: &[S], config: GameConfig) -> Result<Self, EngineError> {
        let words = session::usable_words(words)?;
        let session = Session::from_candidates(&words, config, &mut rand::rng())?;
        Ok(Self {
            words,
            config,
            session,
        })
    }

    /// Discard the current game and start a new one
    pub fn reset(&mut self) {
        info!("Resetting game");
        if let Ok(session) = Session::from_candidates(&self.words, self.config, &mut rand::rng()) {
            self.session = session;
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub const fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    /// Number of usable target words
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}
