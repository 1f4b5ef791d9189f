use crate::session::{GameInterface, Session, UserAction};
use crate::validator::Alert;
use clap::Parser;
use std::io::BufRead;

/// Word Scramble: make new words from the letters of a root word
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited list of root words
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Path to a newline-delimited dictionary of recognized words
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary_path: Option<String>,

    /// Seed for root word selection, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use the line-oriented interface instead of the full-screen one
    #[arg(long)]
    pub plain: bool,

    /// Log at info level (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

pub const RESTART_COMMAND: &str = ":restart";
pub const EXIT_COMMAND: &str = ":exit";

/// Read one line of input. EOF and read errors count as exit.
pub fn read_action<R: BufRead>(reader: &mut R) -> UserAction {
    println!("\nEnter your word ('{RESTART_COMMAND}' for a new root word, '{EXIT_COMMAND}' to quit):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => return UserAction::Exit,
        Ok(_) => {}
    }

    match input.trim() {
        RESTART_COMMAND => UserAction::Restart,
        EXIT_COMMAND => UserAction::Exit,
        _ => UserAction::Submit(input),
    }
}

pub fn display_session(session: &Session) {
    println!("Root word: {}", session.root_word);
    println!("Your current score: {}", session.score);
    for word in &session.used_words {
        println!("  ({}) {}", word.chars().count(), word);
    }
}

pub fn display_rejection(alert: &Alert) {
    println!("{}", alert.title);
    println!("{}", alert.message);
}

/// Line-oriented implementation of [`GameInterface`] over any `BufRead`.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn read_action(&mut self) -> Option<UserAction> {
        Some(read_action(&mut self.reader))
    }

    fn display_session(&mut self, session: &Session) {
        display_session(session);
    }

    fn display_accepted(&mut self, word: &str, points: usize, session: &Session) {
        println!("Added '{word}' (+{points})");
        display_session(session);
    }

    fn display_rejection(&mut self, alert: &Alert) {
        display_rejection(alert);
    }

    fn display_restart(&mut self, session: &Session) {
        println!("New game started.");
        display_session(session);
    }

    fn display_exit_message(&mut self) {
        println!("Exiting.");
    }
}
