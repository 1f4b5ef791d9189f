use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop the game before (or instead of) play.
///
/// Rejected words are not errors; see [`crate::validator::ReasonCode`].
#[derive(Debug, Error)]
pub enum GameError {
    #[error("root word corpus is empty")]
    EmptyCorpus,

    #[error("failed to read word list '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
