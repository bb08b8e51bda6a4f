//! Word list loading utilities
//!
//! Word lists are plain text with one word per line. Entries are trimmed,
//! internal spaces are removed and blank lines are dropped; letter validation
//! happens when a session picks its target.

use std::fs;
use std::io;
use std::path::Path;

/// Split newline-separated text into word list entries
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("crane\n  sl ate \n\nrobot\n");
/// assert_eq!(words, vec!["crane", "slate", "robot"]);
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim().replace(' ', ""))
        .filter(|word| !word.is_empty())
        .collect()
}

/// Load word list entries from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}
