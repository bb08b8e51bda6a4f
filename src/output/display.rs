//! Display functions for game state and command results

use super::formatters::{create_progress_bar, guess_row, input_row, keyboard_row, tile};
use crate::commands::CheckResult;
use crate::engine::{GameStatus, KEYBOARD_LAYOUT, LetterStates, Session};
use colored::Colorize;

/// Print the board: completed rows, the row being typed, then empty rows
pub fn print_board(session: &Session) {
    let width = session.target_word_length();

    println!();
    for row in session.rows() {
        println!("  {}", guess_row(row));
    }
    if session.accepts_input() {
        println!("  {}", input_row(session.current_input(), width));
    }
    let drawn = session.rows().len() + usize::from(session.accepts_input());
    for _ in drawn..session.max_attempts() {
        println!("  {}", input_row("", width));
    }

    println!(
        "\n  Attempts: [{}] {}/{}",
        create_progress_bar(session.attempt_index(), session.max_attempts(), 12).cyan(),
        session.attempt_index(),
        session.max_attempts()
    );
}

/// Print the keyboard coloured by letter state
pub fn print_keyboard(states: &LetterStates) {
    println!();
    for (indent, row) in KEYBOARD_LAYOUT.iter().enumerate() {
        println!("  {}{}", " ".repeat(indent * 2), keyboard_row(row, states));
    }
    println!();
}

/// Print the win or loss banner once a game is over
pub fn print_outcome(session: &Session) {
    let Some(target) = session.revealed_target() else {
        return;
    };

    println!("\n{}", "═".repeat(60).bright_cyan());
    match session.status() {
        GameStatus::Won => println!(
            "  {} The word was: {}",
            "🎉 Correct!".bright_green().bold(),
            target.to_uppercase().bright_yellow().bold()
        ),
        GameStatus::Lost => println!(
            "  {} The word was: {}",
            "❌ Out of attempts.".red().bold(),
            target.to_uppercase().bright_yellow().bold()
        ),
        GameStatus::InProgress => {}
    }
    println!("{}", "═".repeat(60).bright_cyan());

    println!();
    for row in session.rows() {
        println!("  {}", row.feedback().to_emoji());
    }
    println!();
}

/// Print the result of checking a single guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Target: {}  Guess: {}",
        result.target.to_uppercase().bright_yellow().bold(),
        result.guess.to_uppercase().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    let tiles: Vec<String> = result
        .guess
        .chars()
        .zip(result.feedback.kinds())
        .map(|(letter, &kind)| tile(letter, Some(kind)).to_string())
        .collect();
    println!("\n  {}", tiles.join(" "));
    println!("  {}\n", result.feedback.to_emoji());

    if result.feedback.is_perfect() {
        println!("{}", "✅ Exact match!".green().bold());
    } else {
        println!(
            "{} correct, {} present",
            result.feedback.count_correct().to_string().green().bold(),
            result.feedback.count_present().to_string().yellow().bold()
        );
    }
}
