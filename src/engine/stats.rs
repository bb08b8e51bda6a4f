//! Per-run game statistics (kept in memory only)

use super::session::{GameStatus, Session};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses, index 0 = solved in one
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    /// Count a finished game; sessions still in progress are ignored
    pub fn record(&mut self, session: &Session) {
        match session.status() {
            GameStatus::InProgress => {}
            GameStatus::Lost => self.total_games += 1,
            GameStatus::Won => {
                self.total_games += 1;
                self.games_won += 1;
                let guesses = session.attempt_index();
                if self.guess_distribution.len() < guesses {
                    self.guess_distribution.resize(guesses, 0);
                }
                self.guess_distribution[guesses - 1] += 1;
            }
        }
    }

    /// Percentage of finished games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games > 0 {
            self.games_won as f64 / self.total_games as f64 * 100.0
        } else {
            0.0
        }
    }
}
