//! Game word representation
//!
//! A Word is a normalized, lowercase ASCII word of any non-zero length. Targets
//! and guesses share this type so feedback can be computed byte by byte.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A normalized game word
///
/// Surrounding and internal whitespace is removed and ASCII letters are
/// lowercased, matching how target words are read from a word list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word is empty after removing whitespace")]
    Empty,
    #[error("word must contain only ASCII letters, got {0:?}")]
    NonAlphabetic(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Nothing remains after stripping whitespace
    /// - Any remaining character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("  Cr ane ").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("   ").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text: String = text
            .as_ref()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::NonAlphabetic(text));
        }

        Ok(Self {
            text: text.to_ascii_lowercase(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes (always ASCII lowercase)
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; a Word cannot be constructed empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the count of each letter in the word
    ///
    /// Used as the consumable multiset during feedback calculation.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for &ch in self.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
