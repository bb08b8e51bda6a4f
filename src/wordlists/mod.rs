//! Word lists for target selection
//!
//! Provides the default list compiled into the binary and loading of
//! user-supplied lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
