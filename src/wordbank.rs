use crate::error::GameError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_ROOT_WORDS: &str = include_str!("resources/start.txt");
pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary.txt");

fn normalize_entry(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    if !word.is_empty() && word.chars().all(char::is_alphabetic) {
        Some(word)
    } else {
        None
    }
}

/// Parse a newline-delimited word list, skipping blank and non-alphabetic lines.
pub fn load_words_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize_entry).collect()
}

pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, GameError> {
    let path = path.as_ref();
    let io_err = |source| GameError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize_entry(&line.map_err(io_err)?) {
            words.push(word);
        }
    }
    Ok(words)
}
