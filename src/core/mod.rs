//! Core domain types for the game
//!
//! Pure types with no I/O: words and the feedback algorithm.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackKind};
pub use word::{Word, WordError};
