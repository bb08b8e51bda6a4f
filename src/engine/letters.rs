//! Aggregate per-letter state for keyboard colouring

use crate::core::FeedbackKind;
use rustc_hash::FxHashMap;

/// Best feedback seen for each letter during a session
///
/// A letter's state only ever upgrades (Absent → Present → Correct).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStates {
    states: FxHashMap<char, FeedbackKind>,
}

impl LetterStates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State recorded for a letter, if it has been guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<FeedbackKind> {
        self.states.get(&letter.to_ascii_lowercase()).copied()
    }

    /// Record feedback for a letter, keeping whichever state ranks higher
    pub(crate) fn record(&mut self, letter: char, kind: FeedbackKind) {
        self.states
            .entry(letter)
            .and_modify(|best| *best = (*best).max(kind))
            .or_insert(kind);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterate letters in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, FeedbackKind)> + '_ {
        ('a'..='z').filter_map(|c| self.get(c).map(|kind| (c, kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_upgrades() {
        let mut states = LetterStates::new();
        states.record('a', FeedbackKind::Absent);
        states.record('a', FeedbackKind::Present);
        assert_eq!(states.get('a'), Some(FeedbackKind::Present));
        states.record('a', FeedbackKind::Correct);
        assert_eq!(states.get('a'), Some(FeedbackKind::Correct));
    }

    #[test]
    fn record_never_downgrades() {
        let mut states = LetterStates::new();
        states.record('e', FeedbackKind::Correct);
        states.record('e', FeedbackKind::Absent);
        states.record('e', FeedbackKind::Present);
        assert_eq!(states.get('e'), Some(FeedbackKind::Correct));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut states = LetterStates::new();
        states.record('q', FeedbackKind::Absent);
        assert_eq!(states.get('Q'), Some(FeedbackKind::Absent));
        assert_eq!(states.get('z'), None);
    }

    #[test]
    fn iter_is_alphabetical() {
        let mut states = LetterStates::new();
        states.record('z', FeedbackKind::Absent);
        states.record('b', FeedbackKind::Present);
        let letters: Vec<char> = states.iter().map(|(c, _)| c).collect();
        assert_eq!(letters, vec!['b', 'z']);
        assert_eq!(states.len(), 2);
    }
}
