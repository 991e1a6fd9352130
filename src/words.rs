//! Word/hint dataset
//!
//! The dataset is loaded once at startup through a [`WordSource`]. Whatever
//! happens during loading, the session always ends up with a usable
//! [`WordList`]: a failed or empty load degrades to the single fallback pair.

use async_trait::async_trait;
use rand::Rng;
use std::path::{Path, PathBuf};

use crate::types::WordPair;

/// Errors that can occur while loading a word list
#[derive(Debug, thiserror::Error)]
pub enum WordSourceError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse word list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Word list is empty")]
    Empty,
}

/// Anything that can produce the list of word pairs
#[async_trait]
pub trait WordSource: Send + Sync {
    async fn load(&self) -> Result<Vec<WordPair>, WordSourceError>;

    /// Short label for logs
    fn name(&self) -> &str;
}

/// Italian word list shipped with the game
const BUILTIN_WORDS: &[(&str, &str)] = &[
    ("Pizzeria", "Ristorante"),
    ("Aeroporto", "Stazione"),
    ("Spiaggia", "Mare"),
    ("Biblioteca", "Libreria"),
    ("Ospedale", "Clinica"),
    ("Stazione", "Fermata"),
    ("Museo", "Galleria"),
    ("Palestra", "Fitness"),
    ("Castello", "Fortezza"),
    ("Supermercato", "Negozio"),
    ("Cinema", "Teatro"),
    ("Scuola", "Classe"),
    ("Ristorante", "Trattoria"),
    ("Teatro", "Spettacolo"),
    ("Parco", "Giardino"),
];

pub fn builtin_pairs() -> Vec<WordPair> {
    BUILTIN_WORDS
        .iter()
        .map(|(word, hint)| WordPair::new(*word, *hint))
        .collect()
}

pub struct BuiltinWords;

#[async_trait]
impl WordSource for BuiltinWords {
    async fn load(&self) -> Result<Vec<WordPair>, WordSourceError> {
        Ok(builtin_pairs())
    }

    fn name(&self) -> &str {
        "builtin"
    }
}

/// JSON file containing an array of `{ "word": ..., "hint": ... }` objects
pub struct JsonFileWords {
    path: PathBuf,
}

impl JsonFileWords {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl WordSource for JsonFileWords {
    async fn load(&self) -> Result<Vec<WordPair>, WordSourceError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| WordSourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        let pairs: Vec<WordPair> = serde_json::from_str(&raw)?;
        Ok(pairs)
    }

    fn name(&self) -> &str {
        "json-file"
    }
}

/// The dataset a session draws from
#[derive(Debug, Clone)]
pub struct WordList {
    pairs: Vec<WordPair>,
    /// Why the list fell back to the synthetic pair, if it did
    degraded: Option<String>,
}

impl WordList {
    /// Build a list from loaded pairs. Blank words are dropped; an empty
    /// result degrades to the fallback pair.
    pub fn new(pairs: Vec<WordPair>) -> Self {
        let pairs: Vec<WordPair> = pairs
            .into_iter()
            .filter(|p| !p.word.trim().is_empty())
            .collect();

        if pairs.is_empty() {
            Self::fallback(WordSourceError::Empty.to_string())
        } else {
            Self {
                pairs,
                degraded: None,
            }
        }
    }

    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            pairs: vec![WordPair::fallback()],
            degraded: Some(reason.into()),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded.is_some()
    }

    pub fn degraded_reason(&self) -> Option<&str> {
        self.degraded.as_deref()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Uniform draw over the list
    pub fn draw<R: Rng>(&self, rng: &mut R) -> WordPair {
        if self.pairs.is_empty() {
            return WordPair::fallback();
        }
        self.pairs[rng.random_range(0..self.pairs.len())].clone()
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::new(builtin_pairs())
    }
}

/// Load the dataset once. Never fails: errors are logged and degrade the list.
pub async fn load_word_list(source: &dyn WordSource) -> WordList {
    match source.load().await {
        Ok(pairs) => {
            let list = WordList::new(pairs);
            match list.degraded_reason() {
                Some(reason) => tracing::warn!(
                    "Word source {} unusable ({}), using fallback pair",
                    source.name(),
                    reason
                ),
                None => tracing::info!(
                    "Loaded {} word pairs from {}",
                    list.len(),
                    source.name()
                ),
            }
            list
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load words from {}: {}. Using fallback pair.",
                source.name(),
                e
            );
            WordList::fallback(e.to_string())
        }
    }
}
