//! Formatting utilities for terminal output

use crate::core::FeedbackKind;
use crate::engine::{Guess, LetterStates};
use colored::{ColoredString, Colorize};

/// Render one letter as a coloured tile
#[must_use]
pub fn tile(letter: char, kind: Option<FeedbackKind>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match kind {
        Some(FeedbackKind::Correct) => text.black().on_green().bold(),
        Some(FeedbackKind::Present) => text.black().on_yellow().bold(),
        Some(FeedbackKind::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// Render a completed guess as a row of tiles
#[must_use]
pub fn guess_row(guess: &Guess) -> String {
    guess
        .letters()
        .map(|(letter, kind)| tile(letter, Some(kind)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a row still being typed, padding unused cells
#[must_use]
pub fn input_row(input: &str, width: usize) -> String {
    let mut cells: Vec<String> = input.chars().map(|c| tile(c, None).to_string()).collect();
    cells.resize(width.max(cells.len()), " _ ".bright_black().to_string());
    cells.join(" ")
}

/// Render one keyboard row, colouring letters by their best known state
#[must_use]
pub fn keyboard_row(labels: &[&str], states: &LetterStates) -> String {
    labels
        .iter()
        .filter_map(|label| {
            let mut chars = label.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) => Some(tile(letter, states.get(letter)).to_string()),
                _ => None,
            }
        })
        .collect::<Vec<_>>()
        .join("")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
