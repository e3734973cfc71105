use crate::game::{RejectReason, Session};
use crate::game_state::{GameInterface, UserAction};
use clap::Parser;
use std::io::BufRead;

/// Word Scramble: make as many words as you can from the letters of a root word
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited list of root words
    #[arg(short = 'w', long = "words")]
    pub words_path: Option<String>,

    /// Path to a newline-delimited English word list used to check guesses
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary_path: Option<String>,

    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Where to write the log file
    #[arg(long = "log-file")]
    pub log_file: Option<String>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

const NEW_GAME_COMMAND: &str = ":new";
const EXIT_COMMAND: &str = ":quit";

pub enum LineInput {
    Guess(String),
    NewGame,
    Exit,
}

fn parse_line(line: &str) -> LineInput {
    match line.trim().to_lowercase().as_str() {
        NEW_GAME_COMMAND => LineInput::NewGame,
        EXIT_COMMAND => LineInput::Exit,
        _ => LineInput::Guess(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}

/// Read one line; end of input and read errors both end the game.
pub fn read_line_input<R: BufRead>(reader: &mut R) -> LineInput {
    println!("\nEnter a word ('{NEW_GAME_COMMAND}' for a new root word, '{EXIT_COMMAND}' to quit):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => LineInput::Exit,
        Ok(_) => parse_line(&input),
        Err(e) => {
            log::warn!("Failed to read input: {e}");
            LineInput::Exit
        }
    }
}

pub fn display_new_game(session: &Session) {
    println!("Root word: {}", session.root_word().to_uppercase());
    println!("Make as many words as possible from the letters of this word.");
}

pub fn display_accepted(word: &str, points: u64, session: &Session) {
    println!("+{points} for '{word}'");
    display_used_words(session);
}

pub fn display_used_words(session: &Session) {
    println!("Your words ({} points):", session.score());
    for word in session.used_words() {
        println!("  [{}] {}", word.chars().count(), word);
    }
}

pub fn display_rejected(guess: &str, reason: RejectReason) {
    println!("{} ('{}')", reason.title(), guess.trim());
    println!("{}", reason.message());
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the `GameInterface` trait.
/// Wraps a `BufRead` so tests can drive it from a `Cursor`.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_new_game(&mut self, session: &Session) {
        display_new_game(session);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        match read_line_input(&mut self.reader) {
            LineInput::Guess(guess) => Some(UserAction::Guess(guess)),
            LineInput::NewGame => Some(UserAction::NewGame),
            LineInput::Exit => Some(UserAction::Exit),
        }
    }

    fn display_accepted(&mut self, word: &str, points: u64, session: &Session) {
        display_accepted(word, points, session);
    }

    fn display_rejected(&mut self, guess: &str, reason: RejectReason) {
        display_rejected(guess, reason);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}
