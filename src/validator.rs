//! Word validation pipeline.
//!
//! A submitted word is normalized and then run through four checks in a fixed
//! order. The first failing check decides the rejection reason; later checks
//! are not evaluated.
//!
//! 1. originality (`AlreadyUsed`)
//! 2. possibility (`NotPossible`)
//! 3. dictionary lookup (`NotRecognized`)
//! 4. degenerate word (`TooTrivial`)

use crate::debug_log;
use crate::dictionary::{Dictionary, VALIDATION_LANGUAGE};

/// Words of this many characters or fewer are rejected as trivial.
pub const MIN_WORD_LENGTH_EXCLUSIVE: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReasonCode {
    AlreadyUsed,
    NotPossible,
    NotRecognized,
    TooTrivial,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted(String),
    Rejected(ReasonCode),
}

/// Title/message pair shown to the player for a rejection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl ReasonCode {
    pub fn title(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Word used already",
            Self::NotPossible => "Word not possible",
            Self::NotRecognized => "Word not recognized",
            Self::TooTrivial => "Word can't be added",
        }
    }

    pub fn message(self, root_word: &str) -> String {
        match self {
            Self::AlreadyUsed => "Be more original!".to_string(),
            Self::NotPossible => format!("You can't spell that word from '{root_word}'!"),
            Self::NotRecognized => "You can't just make them up, you know!".to_string(),
            Self::TooTrivial => "You can't just enter key word or any short words".to_string(),
        }
    }

    pub fn alert(self, root_word: &str) -> Alert {
        Alert {
            title: self.title().to_string(),
            message: self.message(root_word),
        }
    }
}

/// Lowercase and strip surrounding whitespace and newlines.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

pub fn is_original<S: AsRef<str>>(word: &str, used_words: &[S]) -> bool {
    !used_words.iter().any(|used| used.as_ref() == word)
}

/// Every letter of `word` appears somewhere in `root_word`.
///
/// Letters may be reused: "aa" is possible from "cat".
pub fn is_possible(word: &str, root_word: &str) -> bool {
    word.chars().all(|letter| root_word.contains(letter))
}

pub fn is_recognized(word: &str, dictionary: &dyn Dictionary) -> bool {
    dictionary.is_recognized_word(word, VALIDATION_LANGUAGE)
}

/// Neither the root word itself nor a word of two characters or fewer.
pub fn is_substantial(word: &str, root_word: &str) -> bool {
    word != root_word && word.chars().count() > MIN_WORD_LENGTH_EXCLUSIVE
}

/// Classify a raw submission.
///
/// Returns `None` when the input is empty after normalization; that case is a
/// silent no-op rather than a rejection.
pub fn validate<S: AsRef<str>>(
    candidate: &str,
    root_word: &str,
    used_words: &[S],
    dictionary: &dyn Dictionary,
) -> Option<ValidationOutcome> {
    let word = normalize(candidate);
    if word.is_empty() {
        return None;
    }

    let outcome = if !is_original(&word, used_words) {
        ValidationOutcome::Rejected(ReasonCode::AlreadyUsed)
    } else if !is_possible(&word, root_word) {
        ValidationOutcome::Rejected(ReasonCode::NotPossible)
    } else if !is_recognized(&word, dictionary) {
        ValidationOutcome::Rejected(ReasonCode::NotRecognized)
    } else if !is_substantial(&word, root_word) {
        ValidationOutcome::Rejected(ReasonCode::TooTrivial)
    } else {
        ValidationOutcome::Accepted(word)
    };
    debug_log!("validate() - '{}' against '{}': {:?}", candidate, root_word, outcome);
    Some(outcome)
}
