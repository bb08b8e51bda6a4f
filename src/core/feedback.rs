//! Guess feedback calculation and representation
//!
//! Each guessed letter is classified against the target:
//! - Correct: right letter in the right position
//! - Present: letter occurs elsewhere in the target and has not been used up
//! - Absent: no unused occurrence of the letter remains

use super::Word;
use std::fmt;

/// Classification of one guessed letter
///
/// Ordered `Absent < Present < Correct`, which is the ranking used when
/// aggregating the best state seen for a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeedbackKind {
    Absent,
    Present,
    Correct,
}

impl FeedbackKind {
    /// Emoji tile for this kind
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Per-position feedback for a whole guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<FeedbackKind>);

impl Feedback {
    /// Calculate the feedback when `guess` is played against `answer`
    ///
    /// Duplicate letters are handled the standard way: a target letter is
    /// never matched by more guessed letters than it has occurrences.
    ///
    /// # Algorithm
    /// 1. First pass: Mark exact matches and remove them from the available pool
    /// 2. Second pass: Mark present-but-misplaced letters from what remains
    ///
    /// Both words must have the same length; extra letters on either side are ignored.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, FeedbackKind::*, Word};
    ///
    /// let guess = Word::new("rotor").unwrap();
    /// let answer = Word::new("robot").unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer);
    ///
    /// assert_eq!(feedback.kinds(), &[Correct, Correct, Present, Correct, Absent]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        debug_assert_eq!(guess.len(), answer.len(), "words must be equal length");

        let len = guess.len().min(answer.len());
        let mut result = vec![FeedbackKind::Absent; len];
        let mut answer_available = answer.char_counts();

        // First pass: exact position matches
        for (i, (g, a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                result[i] = FeedbackKind::Correct;
                if let Some(count) = answer_available.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, each consuming one remaining occurrence
        for (i, letter) in guess.chars().iter().take(len).enumerate() {
            if result[i] == FeedbackKind::Correct {
                continue;
            }
            if let Some(count) = answer_available.get_mut(letter)
                && *count > 0
            {
                result[i] = FeedbackKind::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Per-position feedback in guess order
    #[inline]
    #[must_use]
    pub fn kinds(&self) -> &[FeedbackKind] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is Correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&k| k == FeedbackKind::Correct)
    }

    /// Count the number of Correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(FeedbackKind::Correct)
    }

    /// Count the number of Present positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(FeedbackKind::Present)
    }

    fn count(&self, kind: FeedbackKind) -> usize {
        self.0.iter().filter(|&&k| k == kind).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|k| k.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for kind in &self.0 {
            let ch = match kind {
                FeedbackKind::Correct => 'G',
                FeedbackKind::Present => 'Y',
                FeedbackKind::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
///
/// Accepts:
/// - 'G'/'g'/🟩 for Correct
/// - 'Y'/'y'/🟨 for Present
/// - '-'/'_'/⬜ for Absent
impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("Feedback string is empty".to_string());
        }

        s.chars()
            .map(|ch| match ch {
                'G' | 'g' | '🟩' => Ok(FeedbackKind::Correct),
                'Y' | 'y' | '🟨' => Ok(FeedbackKind::Present),
                '-' | '_' | '⬜' => Ok(FeedbackKind::Absent),
                _ => Err(format!("Invalid feedback string: {s}")),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
