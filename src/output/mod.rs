//! Terminal output formatting
//!
//! Display utilities for the text-mode game and CLI results.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_check_result, print_keyboard, print_outcome};
