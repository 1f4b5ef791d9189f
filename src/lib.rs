// Library interface for word-scramble
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod logging;
pub mod root_word;
pub mod session;
pub mod tui;
pub mod validator;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use dictionary::{Dictionary, VALIDATION_LANGUAGE, WordListDictionary};
pub use error::GameError;
pub use root_word::{RootWordProvider, choose_root_word};
pub use session::{Action, GameInterface, Outcome, Session, UserAction, game_loop, reduce};
pub use validator::{Alert, ReasonCode, ValidationOutcome, normalize, validate};
pub use wordbank::{load_words_from_file, load_words_from_str};
