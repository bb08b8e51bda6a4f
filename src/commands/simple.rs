//! Simple interactive CLI mode
//!
//! Text-based game without TUI: each line typed is one guess.

use crate::engine::{GameEngine, Key, Session, Statistics, SubmitResult};
use crate::output::{print_board, print_keyboard, print_outcome};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(engine: GameEngine) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Word Guess - Text Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden word. After each guess:\n");
    println!("  {} letter is in the right spot", "green ".black().on_green());
    println!("  {} letter is in the word elsewhere", "yellow".black().on_yellow());
    println!("  {} letter is not in the word\n", " gray ".white().on_bright_black());
    println!("Commands: 'quit' to exit, 'new' for new game\n");

    play(engine, &mut io::stdin().lock())
}

/// Game loop over a line source; ends on 'quit', a declined replay or end of input
fn play(mut engine: GameEngine, reader: &mut impl BufRead) -> Result<()> {
    let mut stats = Statistics::default();
    announce(engine.session());

    loop {
        let Some(input) = get_user_input(reader, "Guess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                engine.reset();
                println!("\n🔄 New game started!");
                announce(engine.session());
                continue;
            }
            _ => {}
        }

        match enter_guess(engine.session_mut(), &input) {
            SubmitResult::Blocked => {
                println!("Game is over. Type 'new' to play again or 'quit' to exit.\n");
            }
            SubmitResult::WrongLength { expected, .. } => {
                println!("{}\n", format!("Word must be {expected} letters long.").red());
            }
            SubmitResult::Accepted { status, .. } => {
                let session = engine.session();
                print_board(session);
                print_keyboard(session.letter_states());

                if status.is_over() {
                    stats.record(session);
                    print_outcome(session);
                    println!(
                        "  Games: {} | Win Rate: {:.0}%\n",
                        stats.total_games,
                        stats.win_rate()
                    );

                    let answer = get_user_input(reader, "Play again? (yes/no)")?;
                    match answer.as_deref().map(str::to_lowercase).as_deref() {
                        Some("yes" | "y") => {
                            engine.reset();
                            println!("\n🔄 New game started!");
                            announce(engine.session());
                        }
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    }
                }
            }
        }
    }
}

/// Replace the current input with `line` and submit it
///
/// Whitespace is ignored. A line with more letters than the target is
/// reported as a wrong length without touching the session, since the
/// engine would otherwise silently truncate it.
fn enter_guess(session: &mut Session, line: &str) -> SubmitResult {
    let letters: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();

    if session.accepts_input() && letters.len() > session.target_word_length() {
        return SubmitResult::WrongLength {
            expected: session.target_word_length(),
            actual: letters.len(),
        };
    }

    for _ in 0..session.current_input().len() {
        session.handle_key(Key::Backspace);
    }
    for c in letters {
        session.handle_key(Key::Letter(c));
    }

    session
        .handle_key(Key::Enter)
        .unwrap_or(SubmitResult::Blocked)
}

fn announce(session: &Session) {
    println!(
        "\nThe word has {} letters. You have {} attempts.",
        session.target_word_length().to_string().bright_cyan().bold(),
        session.max_attempts()
    );
    print_board(session);
}

/// Get user input with a prompt; `None` once the input is closed
fn get_user_input(reader: &mut impl BufRead, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::engine::{GameConfig, GameStatus};
    use std::io::Cursor;

    fn session(target: &str) -> Session {
        Session::with_target(Word::new(target).unwrap(), GameConfig::new())
    }

    fn engine() -> GameEngine {
        GameEngine::new(&["crane"], GameConfig::new()).unwrap()
    }

    #[test]
    fn user_input_none_at_end_of_input() {
        let mut reader = Cursor::new("  slate \n");
        assert_eq!(
            get_user_input(&mut reader, "Guess").unwrap(),
            Some("slate".to_string())
        );
        assert_eq!(get_user_input(&mut reader, "Guess").unwrap(), None);
    }

    #[test]
    fn blank_line_is_not_end_of_input() {
        let mut reader = Cursor::new("\n");
        assert_eq!(
            get_user_input(&mut reader, "Guess").unwrap(),
            Some(String::new())
        );
    }

    #[test]
    fn play_stops_when_input_closes_mid_game() {
        assert!(play(engine(), &mut Cursor::new("slate\n")).is_ok());
        assert!(play(engine(), &mut Cursor::new("")).is_ok());
    }

    #[test]
    fn play_stops_when_input_closes_at_replay_prompt() {
        assert!(play(engine(), &mut Cursor::new("crane\n")).is_ok());
    }

    #[test]
    fn play_replays_then_quits() {
        assert!(play(engine(), &mut Cursor::new("crane\nyes\ncrane\nno\n")).is_ok());
        assert!(play(engine(), &mut Cursor::new("new\nquit\n")).is_ok());
    }

    #[test]
    fn enter_guess_submits_line() {
        let mut s = session("crane");
        let result = enter_guess(&mut s, "Slate");
        assert!(matches!(
            result,
            SubmitResult::Accepted {
                status: GameStatus::InProgress,
                ..
            }
        ));
        assert_eq!(s.rows()[0].word(), "slate");
    }

    #[test]
    fn enter_guess_too_long_is_not_truncated() {
        let mut s = session("crane");
        let result = enter_guess(&mut s, "cranes");
        assert_eq!(
            result,
            SubmitResult::WrongLength {
                expected: 5,
                actual: 6
            }
        );
        assert_eq!(s.attempt_index(), 0);
    }

    #[test]
    fn enter_guess_replaces_leftover_input() {
        let mut s = session("crane");
        assert!(matches!(
            enter_guess(&mut s, "cra"),
            SubmitResult::WrongLength { actual: 3, .. }
        ));
        assert_eq!(s.current_input(), "cra");

        let result = enter_guess(&mut s, "crane");
        assert!(matches!(
            result,
            SubmitResult::Accepted {
                status: GameStatus::Won,
                ..
            }
        ));
    }

    #[test]
    fn enter_guess_ignores_whitespace() {
        let mut s = session("crane");
        enter_guess(&mut s, " c r a n e ");
        assert_eq!(s.status(), GameStatus::Won);
    }

    #[test]
    fn enter_guess_after_game_over_is_blocked() {
        let mut s = session("crane");
        enter_guess(&mut s, "crane");
        assert_eq!(enter_guess(&mut s, "slate"), SubmitResult::Blocked);
        assert_eq!(enter_guess(&mut s, "toolong"), SubmitResult::Blocked);
    }
}
