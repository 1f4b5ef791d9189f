use crate::error::GameError;
use crate::info_log;
use rand::prelude::*;

/// Pick one word uniformly at random from `corpus`.
pub fn choose_root_word<R: Rng + ?Sized>(corpus: &[String], rng: &mut R) -> Result<String, GameError> {
    corpus.choose(rng).cloned().ok_or(GameError::EmptyCorpus)
}

/// Owns the root-word corpus and the RNG used to draw from it.
///
/// Entries are lowercased on construction, which fails on an empty corpus.
pub struct RootWordProvider {
    corpus: Vec<String>,
    rng: StdRng,
}

impl RootWordProvider {
    /// `seed` makes the draw sequence reproducible; `None` seeds from the OS.
    pub fn new(corpus: Vec<String>, seed: Option<u64>) -> Result<Self, GameError> {
        let corpus: Vec<String> = corpus
            .iter()
            .map(|word| word.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        if corpus.is_empty() {
            return Err(GameError::EmptyCorpus);
        }
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        info_log!("RootWordProvider::new() - {} candidate root words", corpus.len());
        Ok(Self { corpus, rng })
    }

    pub fn next_root_word(&mut self) -> Result<String, GameError> {
        choose_root_word(&self.corpus, &mut self.rng)
    }

    pub fn corpus_len(&self) -> usize {
        self.corpus.len()
    }
}
