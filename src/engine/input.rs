//! Input unification
//!
//! Physical keys and on-screen keyboard buttons both translate into a [`Key`],
//! so every input source goes through the same session guards.

/// On-screen keyboard layout, top row first
pub const KEYBOARD_LAYOUT: [&[&str]; 3] = [
    &["q", "w", "e", "r", "t", "y", "u", "i", "o", "p"],
    &["a", "s", "d", "f", "g", "h", "j", "k", "l"],
    &["Enter", "z", "x", "c", "v", "b", "n", "m", "Back"],
];

/// A game input, independent of where it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Backspace,
    Enter,
}

impl Key {
    /// Map a key label to a game input
    ///
    /// Understands keyboard button labels (`"Enter"`, `"Back"`) as well as
    /// browser-style key names (`"Backspace"`). Single ASCII letters map to
    /// [`Key::Letter`]; anything else is not a game key.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::engine::Key;
    ///
    /// assert_eq!(Key::from_name("Back"), Some(Key::Backspace));
    /// assert_eq!(Key::from_name("Q"), Some(Key::Letter('q')));
    /// assert_eq!(Key::from_name("Shift"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "enter" | "return" => Some(Self::Enter),
            "back" | "backspace" => Some(Self::Backspace),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => Some(Self::Letter(c)),
                    _ => None,
                }
            }
        }
    }
}
