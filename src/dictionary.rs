//! Spell-check oracle used by the validator.
//!
//! The validator only needs a yes/no answer for "is this a real word", so any
//! host facility can be plugged in by implementing [`Dictionary`]. Closures of
//! the shape `Fn(&str, &str) -> bool` implement it directly.
//!
//! [`WordListDictionary`] lists base words and also recognizes their regular
//! inflections (plural/third person `-s`/`-es`/`-ies`, past `-ed`, gerund
//! `-ing`), the way an affix-aware spell checker would.

use crate::{debug_log, info_log};
use crate::error::GameError;
use crate::wordbank::{EMBEDDED_DICTIONARY, load_words_from_file, load_words_from_str};
use std::collections::HashSet;
use std::path::Path;

/// Language tag passed to every dictionary lookup.
pub const VALIDATION_LANGUAGE: &str = "en";

/// Platform word lists tried, in order, before the bundled one.
pub const SYSTEM_WORD_LISTS: [&str; 2] = ["/usr/share/dict/words", "/usr/dict/words"];

/// Shortest stem an inflected form may reduce to.
const MIN_STEM_LENGTH: usize = 2;

pub trait Dictionary {
    fn is_recognized_word(&self, word: &str, language: &str) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_recognized_word(&self, word: &str, language: &str) -> bool {
        self(word, language)
    }
}

/// Dictionary backed by an in-memory word list for a single language.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: HashSet<String>,
}

impl WordListDictionary {
    pub fn new<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(|w| w.into().to_lowercase())
            .collect();
        debug_log!("WordListDictionary::new() - {} words for '{}'", words.len(), language);
        Self {
            language: language.to_string(),
            words,
        }
    }

    /// The bundled English word list.
    pub fn embedded() -> Self {
        Self::new(VALIDATION_LANGUAGE, load_words_from_str(EMBEDDED_DICTIONARY))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        Ok(Self::new(VALIDATION_LANGUAGE, load_words_from_file(path)?))
    }

    /// First readable, non-empty list in `paths`.
    pub fn first_available<P: AsRef<Path>>(paths: &[P]) -> Option<Self> {
        paths.iter().find_map(|path| match Self::from_file(path) {
            Ok(dict) if !dict.is_empty() => {
                info_log!("Using word list {}", path.as_ref().display());
                Some(dict)
            }
            Ok(_) => None,
            Err(_e) => {
                debug_log!("Word list unavailable: {}", _e);
                None
            }
        })
    }

    /// The platform English word list if there is one, else the bundled list.
    pub fn default_english() -> Self {
        Self::first_available(&SYSTEM_WORD_LISTS).unwrap_or_else(Self::embedded)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    fn is_recognized_word(&self, word: &str, language: &str) -> bool {
        if language != self.language {
            return false;
        }
        self.words.contains(word)
            || candidate_stems(word)
                .iter()
                .any(|stem| stem.chars().count() >= MIN_STEM_LENGTH && self.words.contains(stem))
    }
}

/// Drop a trailing doubled consonant: "plann" -> "plan", "runn" -> "run".
fn undouble(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    let (last, prev) = (chars.next()?, chars.next()?);
    if last == prev && !"aeiou".contains(last) {
        Some(stem[..stem.len() - last.len_utf8()].to_string())
    } else {
        None
    }
}

/// Base forms `word` could be a regular inflection of.
fn candidate_stems(word: &str) -> Vec<String> {
    let mut stems = Vec::new();

    if let Some(stem) = word.strip_suffix("ies") {
        stems.push(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("es") {
        stems.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix('s')
        && !stem.ends_with('s')
    {
        stems.push(stem.to_string());
    }

    if let Some(stem) = word.strip_suffix("ied") {
        stems.push(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("ed") {
        stems.push(stem.to_string());
        stems.push(format!("{stem}e"));
        stems.extend(undouble(stem));
    }

    if let Some(stem) = word.strip_suffix("ing") {
        stems.push(stem.to_string());
        stems.push(format!("{stem}e"));
        stems.extend(undouble(stem));
    }

    stems
}
