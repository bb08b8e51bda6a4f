//! Single guess check command
//!
//! Scores one guess against a given target without starting a game.

use crate::core::{Feedback, Word};

/// Result of checking a guess
pub struct CheckResult {
    pub target: String,
    pub guess: String,
    pub feedback: Feedback,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn check_guess(target: &str, guess: &str) -> Result<CheckResult, String> {
    let target_word = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;
    let guess_word = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    if guess_word.len() != target_word.len() {
        return Err(format!(
            "Word must be {} letters long.",
            target_word.len()
        ));
    }

    let feedback = Feedback::calculate(&guess_word, &target_word);

    Ok(CheckResult {
        target: target_word.text().to_string(),
        guess: guess_word.text().to_string(),
        feedback,
    })
}
