//! Game session state machine
//!
//! A [`Session`] owns everything about one game: the hidden target, the typed
//! input, completed rows and per-letter state. It is mutated only through
//! [`Session::append_letter`], [`Session::delete_letter`] and
//! [`Session::submit_guess`]; renderers read it through the accessors.

use super::config::{GameConfig, MAX_ATTEMPTS_LIMIT};
use super::input::Key;
use super::letters::LetterStates;
use super::EngineError;
use crate::core::{Feedback, FeedbackKind, Word, WordError};
use log::{debug, info, warn};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Progress of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// True once the game reached a terminal state
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Outcome of submitting the current input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// Game already over or out of attempts; nothing changed
    Blocked,
    /// Input length does not match the target; nothing changed
    WrongLength { expected: usize, actual: usize },
    /// Guess recorded
    Accepted {
        feedback: Feedback,
        status: GameStatus,
    },
}

/// A completed guess row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    word: String,
    feedback: Feedback,
}

impl Guess {
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Letters paired with their feedback, in position order
    pub fn letters(&self) -> impl Iterator<Item = (char, FeedbackKind)> + '_ {
        self.word.chars().zip(self.feedback.kinds().iter().copied())
    }
}

/// State of one game
#[derive(Debug, Clone)]
pub struct Session {
    target: Word,
    max_attempts: usize,
    attempt_index: usize,
    current_input: String,
    rows: Vec<Guess>,
    letter_states: LetterStates,
    status: GameStatus,
}

/// Normalize a raw word list, keeping only entries usable as targets
///
/// # Errors
///
/// Returns `EngineError::InvalidWordList` if no entry survives normalization.
pub(crate) fn usable_words<S: AsRef<str>>(words: &[S]) -> Result<Vec<Word>, EngineError> {
    let mut skipped = 0usize;
    let usable: Vec<Word> = words
        .iter()
        .filter_map(|raw| match Word::new(raw) {
            Ok(word) => Some(word),
            Err(WordError::Empty) => None,
            Err(e) => {
                skipped += 1;
                debug!("Skipping word list entry: {e}");
                None
            }
        })
        .collect();

    if skipped > 0 {
        warn!("Ignored {skipped} word list entries containing non-letters");
    }

    if usable.is_empty() {
        return Err(EngineError::InvalidWordList);
    }

    Ok(usable)
}

impl Session {
    /// Start a game with a target picked uniformly at random from `words`
    ///
    /// Entries are trimmed, stripped of internal whitespace and lowercased.
    /// Blank entries and entries containing non-letters are ignored.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidWordList` if no usable entry remains.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::engine::{GameConfig, GameStatus, Session};
    ///
    /// let session = Session::new(&["crane", "slate"], GameConfig::new()).unwrap();
    /// assert_eq!(session.status(), GameStatus::InProgress);
    /// assert_eq!(session.target_word_length(), 5);
    ///
    /// assert!(Session::new(&["", "   "], GameConfig::new()).is_err());
    /// ```
    pub fn new<S: AsRef<str>>(words: &[S], config: GameConfig) -> Result<Self, EngineError> {
        Self::new_with_rng(words, config, &mut rand::rng())
    }

    /// Same as [`Session::new`] with an explicit random source
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidWordList` if no usable entry remains.
    pub fn new_with_rng<S: AsRef<str>, R: Rng + ?Sized>(
        words: &[S],
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        let candidates = usable_words(words)?;
        Self::from_candidates(&candidates, config, rng)
    }

    pub(crate) fn from_candidates<R: Rng + ?Sized>(
        candidates: &[Word],
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        let target = candidates
            .choose(rng)
            .ok_or(EngineError::InvalidWordList)?
            .clone();
        info!(
            "New session: {}-letter target from {} candidates",
            target.len(),
            candidates.len()
        );
        Ok(Self::with_target(target, config))
    }

    /// Start a game with a known target
    #[must_use]
    pub fn with_target(target: Word, config: GameConfig) -> Self {
        Self {
            target,
            max_attempts: config.max_attempts.clamp(1, MAX_ATTEMPTS_LIMIT),
            attempt_index: 0,
            current_input: String::new(),
            rows: Vec::new(),
            letter_states: LetterStates::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Whether the current input may still change
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        self.status == GameStatus::InProgress && self.attempt_index < self.max_attempts
    }

    /// Append a letter to the current input
    ///
    /// Ignored when the game is over, the row is full, or `c` is not an ASCII letter.
    pub fn append_letter(&mut self, c: char) {
        if !self.accepts_input()
            || self.current_input.len() >= self.target.len()
            || !c.is_ascii_alphabetic()
        {
            return;
        }
        self.current_input.push(c.to_ascii_lowercase());
    }

    /// Remove the last letter of the current input, if any
    pub fn delete_letter(&mut self) {
        if !self.accepts_input() {
            return;
        }
        self.current_input.pop();
    }

    /// Submit the current input as a guess
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::engine::{GameConfig, GameStatus, Session, SubmitResult};
    ///
    /// let mut session = Session::with_target(Word::new("robot").unwrap(), GameConfig::new());
    /// for c in "rotor".chars() {
    ///     session.append_letter(c);
    /// }
    ///
    /// match session.submit_guess() {
    ///     SubmitResult::Accepted { feedback, status } => {
    ///         assert_eq!(feedback.to_string(), "GGYG-");
    ///         assert_eq!(status, GameStatus::InProgress);
    ///     }
    ///     other => panic!("unexpected {other:?}"),
    /// }
    /// ```
    pub fn submit_guess(&mut self) -> SubmitResult {
        if !self.accepts_input() {
            debug!("Guess blocked: status {:?}", self.status);
            return SubmitResult::Blocked;
        }

        let wrong_length = SubmitResult::WrongLength {
            expected: self.target.len(),
            actual: self.current_input.len(),
        };
        if self.current_input.len() != self.target.len() {
            debug!("Guess rejected: {wrong_length:?}");
            return wrong_length;
        }
        let Ok(guess) = Word::new(&self.current_input) else {
            return wrong_length;
        };

        let feedback = Feedback::calculate(&guess, &self.target);
        for (letter, &kind) in guess.text().chars().zip(feedback.kinds()) {
            self.letter_states.record(letter, kind);
        }

        self.attempt_index += 1;
        self.status = if feedback.is_perfect() {
            GameStatus::Won
        } else if self.attempt_index >= self.max_attempts {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        self.rows.push(Guess {
            word: guess.text().to_string(),
            feedback: feedback.clone(),
        });
        self.current_input.clear();

        debug!(
            "Guess {}/{} scored {feedback}, status {:?}",
            self.attempt_index, self.max_attempts, self.status
        );

        SubmitResult::Accepted {
            feedback,
            status: self.status,
        }
    }

    /// Apply a key from any input source
    ///
    /// Returns the submit result for [`Key::Enter`], `None` otherwise.
    pub fn handle_key(&mut self, key: Key) -> Option<SubmitResult> {
        match key {
            Key::Letter(c) => {
                self.append_letter(c);
                None
            }
            Key::Backspace => {
                self.delete_letter();
                None
            }
            Key::Enter => Some(self.submit_guess()),
        }
    }

    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    #[must_use]
    pub const fn letter_states(&self) -> &LetterStates {
        &self.letter_states
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn attempt_index(&self) -> usize {
        self.attempt_index
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub const fn remaining_attempts(&self) -> usize {
        self.max_attempts - self.attempt_index
    }

    #[must_use]
    pub fn target_word_length(&self) -> usize {
        self.target.len()
    }

    /// Completed guesses, oldest first
    #[must_use]
    pub fn rows(&self) -> &[Guess] {
        &self.rows
    }

    /// The target word, available only once the game is over
    #[must_use]
    pub fn revealed_target(&self) -> Option<&str> {
        self.status.is_over().then(|| self.target.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(target: &str) -> Session {
        Session::with_target(Word::new(target).unwrap(), GameConfig::new())
    }

    fn type_word(session: &mut Session, word: &str) {
        for c in word.chars() {
            session.append_letter(c);
        }
    }

    fn guess(session: &mut Session, word: &str) -> SubmitResult {
        type_word(session, word);
        session.submit_guess()
    }

    #[test]
    fn new_session_rejects_empty_list() {
        let empty: &[&str] = &[];
        assert!(matches!(
            Session::new(empty, GameConfig::new()),
            Err(EngineError::InvalidWordList)
        ));
    }

    #[test]
    fn new_session_rejects_blank_entries() {
        assert!(matches!(
            Session::new(&["", "  ", "\t"], GameConfig::new()),
            Err(EngineError::InvalidWordList)
        ));
    }

    #[test]
    fn new_session_rejects_non_letter_entries() {
        assert!(Session::new(&["12345", "ab-cd"], GameConfig::new()).is_err());
    }

    #[test]
    fn new_session_normalizes_target() {
        let session = Session::new(&["", "   ", " Ro Bot "], GameConfig::new()).unwrap();
        assert_eq!(session.target.text(), "robot");
        assert_eq!(session.target_word_length(), 5);
    }

    #[test]
    fn new_session_initial_state() {
        let session = Session::new(&["crane"], GameConfig::new()).unwrap();
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.attempt_index(), 0);
        assert_eq!(session.max_attempts(), 6);
        assert_eq!(session.remaining_attempts(), 6);
        assert_eq!(session.current_input(), "");
        assert!(session.rows().is_empty());
        assert!(session.letter_states().is_empty());
        assert_eq!(session.revealed_target(), None);
    }

    #[test]
    fn seeded_sessions_pick_same_target() {
        let words = ["crane", "slate", "irate", "robot"];
        let a = Session::new_with_rng(&words, GameConfig::new(), &mut StdRng::seed_from_u64(42))
            .unwrap();
        let b = Session::new_with_rng(&words, GameConfig::new(), &mut StdRng::seed_from_u64(42))
            .unwrap();
        assert_eq!(a.target, b.target);
        assert!(words.contains(&a.target.text()));
    }

    #[test]
    fn target_selection_reaches_every_word() {
        let words = ["crane", "slate", "irate"];
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let session = Session::new_with_rng(&words, GameConfig::new(), &mut rng).unwrap();
            seen.insert(session.target.text().to_string());
        }
        assert_eq!(seen.len(), words.len());
    }

    #[test]
    fn append_lowercases_and_stops_at_target_length() {
        let mut s = session("crane");
        type_word(&mut s, "SLATEX");
        assert_eq!(s.current_input(), "slate");
    }

    #[test]
    fn append_ignores_non_letters() {
        let mut s = session("crane");
        for c in ['1', ' ', '!', 'é', 'a'] {
            s.append_letter(c);
        }
        assert_eq!(s.current_input(), "a");
    }

    #[test]
    fn delete_on_empty_is_noop() {
        let mut s = session("crane");
        s.delete_letter();
        assert_eq!(s.current_input(), "");

        type_word(&mut s, "ab");
        s.delete_letter();
        assert_eq!(s.current_input(), "a");
    }

    #[test]
    fn wrong_length_does_not_mutate() {
        let mut s = session("crane");
        let result = guess(&mut s, "cra");
        assert_eq!(
            result,
            SubmitResult::WrongLength {
                expected: 5,
                actual: 3
            }
        );
        assert_eq!(s.attempt_index(), 0);
        assert!(s.rows().is_empty());
        assert!(s.letter_states().is_empty());
        assert_eq!(s.current_input(), "cra");

        assert!(matches!(
            s.submit_guess(),
            SubmitResult::WrongLength { .. }
        ));
        s.delete_letter();
        s.delete_letter();
        s.delete_letter();
        assert!(matches!(
            s.submit_guess(),
            SubmitResult::WrongLength { actual: 0, .. }
        ));
    }

    #[test]
    fn correct_guess_wins_with_all_correct() {
        let mut s = session("crane");
        let SubmitResult::Accepted { feedback, status } = guess(&mut s, "crane") else {
            panic!("guess not accepted");
        };
        assert!(feedback.kinds().iter().all(|&k| k == FeedbackKind::Correct));
        assert_eq!(status, GameStatus::Won);
        assert_eq!(s.status(), GameStatus::Won);
        assert_eq!(s.attempt_index(), 1);
        assert_eq!(s.rows().len(), 1);
        assert_eq!(s.current_input(), "");
        assert_eq!(s.revealed_target(), Some("crane"));
    }

    #[test]
    fn won_session_is_frozen() {
        let mut s = session("crane");
        guess(&mut s, "crane");
        let states = s.letter_states().clone();

        type_word(&mut s, "slate");
        assert_eq!(s.current_input(), "");
        s.delete_letter();
        assert_eq!(s.submit_guess(), SubmitResult::Blocked);
        assert_eq!(s.rows().len(), 1);
        assert_eq!(s.letter_states(), &states);
    }

    #[test]
    fn wrong_guess_on_last_attempt_loses() {
        let mut s = session("crane");
        for _ in 0..5 {
            let result = guess(&mut s, "slate");
            assert!(matches!(
                result,
                SubmitResult::Accepted {
                    status: GameStatus::InProgress,
                    ..
                }
            ));
        }
        assert_eq!(s.attempt_index(), s.max_attempts() - 1);

        let result = guess(&mut s, "irate");
        assert!(matches!(
            result,
            SubmitResult::Accepted {
                status: GameStatus::Lost,
                ..
            }
        ));
        assert_eq!(s.status(), GameStatus::Lost);
        assert_eq!(s.remaining_attempts(), 0);
        assert_eq!(s.revealed_target(), Some("crane"));
        assert_eq!(guess(&mut s, "crane"), SubmitResult::Blocked);
        assert_eq!(s.rows().len(), 6);
    }

    #[test]
    fn correct_guess_on_last_attempt_wins() {
        let mut s = session("crane");
        for _ in 0..5 {
            guess(&mut s, "slate");
        }
        assert!(matches!(
            guess(&mut s, "crane"),
            SubmitResult::Accepted {
                status: GameStatus::Won,
                ..
            }
        ));
    }

    #[test]
    fn single_attempt_config() {
        let mut s = Session::with_target(
            Word::new("crane").unwrap(),
            GameConfig::new().with_max_attempts(1),
        );
        guess(&mut s, "slate");
        assert_eq!(s.status(), GameStatus::Lost);
    }

    #[test]
    fn oversized_attempt_limit_clamped() {
        let config = GameConfig {
            max_attempts: usize::MAX,
        };
        let s = Session::with_target(Word::new("crane").unwrap(), config);
        assert_eq!(s.max_attempts(), MAX_ATTEMPTS_LIMIT);
        assert_eq!(s.remaining_attempts(), MAX_ATTEMPTS_LIMIT);
    }

    #[test]
    fn long_repeated_target_is_playable() {
        let word = "a".repeat(300);
        let mut s = Session::with_target(Word::new(&word).unwrap(), GameConfig::new());
        guess(&mut s, &word);
        assert_eq!(s.status(), GameStatus::Won);
    }

    #[test]
    fn rows_track_attempt_index() {
        let mut s = session("robot");
        let inputs = ["ro", "rotor", "xx", "boots", "robot", "crane"];
        for input in inputs {
            type_word(&mut s, input);
            assert_eq!(s.rows().len(), s.attempt_index());
            s.submit_guess();
            assert_eq!(s.rows().len(), s.attempt_index());
            while !s.current_input().is_empty() {
                s.delete_letter();
            }
            assert_eq!(s.rows().len(), s.attempt_index());
        }
        assert_eq!(s.status(), GameStatus::Won);
        assert_eq!(s.attempt_index(), 3);
    }

    #[test]
    fn rows_record_guess_and_feedback() {
        let mut s = session("robot");
        guess(&mut s, "rotor");
        let row = &s.rows()[0];
        assert_eq!(row.word(), "rotor");
        assert_eq!(row.feedback().to_string(), "GGYG-");
        let letters: Vec<char> = row.letters().map(|(c, _)| c).collect();
        assert_eq!(letters, vec!['r', 'o', 't', 'o', 'r']);
    }

    #[test]
    fn letter_state_takes_best_within_guess() {
        let mut s = session("robot");
        guess(&mut s, "rotor");
        let states = s.letter_states();
        // Second r is Absent but the first is Correct
        assert_eq!(states.get('r'), Some(FeedbackKind::Correct));
        assert_eq!(states.get('o'), Some(FeedbackKind::Correct));
        assert_eq!(states.get('t'), Some(FeedbackKind::Present));
        assert_eq!(states.get('b'), None);
    }

    #[test]
    fn letter_states_never_regress() {
        let mut s = session("there");
        let mut previous = s.letter_states().clone();
        for word in ["eerie", "hello", "threw", "ether", "there"] {
            guess(&mut s, word);
            for (letter, before) in previous.iter() {
                let after = s.letter_states().get(letter).unwrap();
                assert!(after >= before, "{letter} went from {before:?} to {after:?}");
            }
            previous = s.letter_states().clone();
        }
        assert_eq!(s.letter_states().get('e'), Some(FeedbackKind::Correct));
    }

    #[test]
    fn handle_key_routes_to_operations() {
        let mut s = session("ab");
        assert_eq!(s.handle_key(Key::Letter('A')), None);
        assert_eq!(s.handle_key(Key::Letter('x')), None);
        assert_eq!(s.current_input(), "ax");
        assert_eq!(s.handle_key(Key::Backspace), None);
        assert_eq!(s.current_input(), "a");
        s.handle_key(Key::Letter('b'));
        assert!(matches!(
            s.handle_key(Key::Enter),
            Some(SubmitResult::Accepted {
                status: GameStatus::Won,
                ..
            })
        ));
    }

    #[test]
    fn game_status_is_over() {
        assert!(!GameStatus::InProgress.is_over());
        assert!(GameStatus::Won.is_over());
        assert!(GameStatus::Lost.is_over());
    }
}
