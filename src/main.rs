//! Word Guess - CLI
//!
//! Word-guessing game with TUI and plain text modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, builder::RangedU64ValueParser};
use log::info;
use wordle_game::{
    commands::{check_guess, run_simple},
    engine::{GameConfig, GameEngine, MAX_ATTEMPTS, MAX_ATTEMPTS_LIMIT},
    output::print_check_result,
    wordlists::{WORDS, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word with per-letter feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of guesses allowed per game (1 to 20)
    #[arg(
        short = 'a',
        long,
        global = true,
        default_value_t = MAX_ATTEMPTS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_ATTEMPTS_LIMIT as u64)
    )]
    attempts: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode (one guess per line, no TUI)
    Simple,

    /// Score a single guess against a target word
    Check {
        /// The hidden word
        target: String,

        /// The guess to score
        guess: String,
    },
}

/// Load the word list selected by the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<String>> {
    match wordlist_mode {
        "embedded" => Ok(WORDS.iter().map(|&w| w.to_string()).collect()),
        path => load_from_file(path).with_context(|| format!("failed to read word list {path}")),
    }
}

/// Start logging for the text modes
///
/// The TUI owns the terminal and stderr lines would draw over the board, so
/// play mode installs no logger and `RUST_LOG` has no effect there.
fn init_logger(command: &Commands) {
    if !matches!(command, Commands::Play) {
        env_logger::try_init().unwrap_or(());
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = GameConfig::new().with_max_attempts(cli.attempts);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logger(&command);

    match command {
        Commands::Play => run_play_command(&cli.wordlist, config),
        Commands::Simple => run_simple_command(&cli.wordlist, config),
        Commands::Check { target, guess } => run_check_command(&target, &guess),
    }
}

fn build_engine(wordlist_mode: &str, config: GameConfig) -> Result<GameEngine> {
    let words = load_wordlist(wordlist_mode)?;
    let engine = GameEngine::new(words.as_slice(), config)
        .with_context(|| format!("cannot start a game from word list '{wordlist_mode}'"))?;
    info!(
        "Loaded {} usable words, {} attempts per game",
        engine.word_count(),
        config.max_attempts
    );
    Ok(engine)
}

fn run_play_command(wordlist_mode: &str, config: GameConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let engine = build_engine(wordlist_mode, config)?;
    run_tui(App::new(engine))
}

fn run_simple_command(wordlist_mode: &str, config: GameConfig) -> Result<()> {
    let engine = build_engine(wordlist_mode, config)?;
    run_simple(engine)
}

fn run_check_command(target: &str, guess: &str) -> Result<()> {
    let result = check_guess(target, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempts_default() {
        let cli = Cli::try_parse_from(["wordle_game"]).unwrap();
        assert_eq!(cli.attempts, MAX_ATTEMPTS);
        assert!(cli.command.is_none());
    }

    #[test]
    fn attempts_within_range() {
        let cli = Cli::try_parse_from(["wordle_game", "-a", "20", "simple"]).unwrap();
        assert_eq!(cli.attempts, 20);
        assert!(matches!(cli.command, Some(Commands::Simple)));
    }

    #[test]
    fn play_mode_installs_no_logger() {
        init_logger(&Commands::Play);
        assert_eq!(log::max_level(), log::LevelFilter::Off);
    }

    #[test]
    fn attempts_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["wordle_game", "-a", "0"]).is_err());
        assert!(Cli::try_parse_from(["wordle_game", "-a", "21"]).is_err());
        assert!(Cli::try_parse_from(["wordle_game", "--attempts", "18446744073709551615"]).is_err());
    }
}
