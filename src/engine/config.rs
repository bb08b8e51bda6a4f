//! Game configuration

/// Number of guesses a player gets per game
pub const MAX_ATTEMPTS: usize = 6;

/// Largest attempt limit a game accepts
pub const MAX_ATTEMPTS_LIMIT: usize = 20;

/// Configuration for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
        }
    }

    /// Override the attempt limit, clamped to `1..=MAX_ATTEMPTS_LIMIT`
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = if max_attempts == 0 {
            1
        } else if max_attempts > MAX_ATTEMPTS_LIMIT {
            MAX_ATTEMPTS_LIMIT
        } else {
            max_attempts
        };
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_six_attempts() {
        assert_eq!(GameConfig::default().max_attempts, 6);
        assert_eq!(GameConfig::new(), GameConfig::default());
    }

    #[test]
    fn zero_attempts_clamped() {
        assert_eq!(GameConfig::new().with_max_attempts(0).max_attempts, 1);
        assert_eq!(GameConfig::new().with_max_attempts(3).max_attempts, 3);
    }

    #[test]
    fn large_attempts_clamped() {
        let limit = GameConfig::new().with_max_attempts(MAX_ATTEMPTS_LIMIT);
        assert_eq!(limit.max_attempts, MAX_ATTEMPTS_LIMIT);
        let huge = GameConfig::new().with_max_attempts(usize::MAX);
        assert_eq!(huge.max_attempts, MAX_ATTEMPTS_LIMIT);
    }
}
