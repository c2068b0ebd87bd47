//! Raw word cleaning and tokenization.
//!
//! Each raw word is lowercased, stripped of configured punctuation and of
//! digits, checked against the stop-word set, then split into word tokens
//! and document boundary markers.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use paratdm_core::{Error, NormalizerConfig, Result};

/// A normalized unit of text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// Lowercase ASCII letters only.
    Word(String),
    /// End of the current document.
    Boundary,
}

impl Token {
    pub fn word(text: impl Into<String>) -> Self {
        Self::Word(text.into())
    }

    pub fn as_word(&self) -> Option<&str> {
        match self {
            Self::Word(w) => Some(w),
            Self::Boundary => None,
        }
    }

    pub fn is_boundary(&self) -> bool {
        matches!(self, Self::Boundary)
    }
}

/// Turns raw whitespace-split words into a token stream.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: NormalizerConfig,
    splitter: Regex,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Result<Self> {
        let marker = config.boundary_marker;
        if marker.is_ascii_alphanumeric() || marker.is_whitespace() {
            return Err(Error::Config(format!(
                "boundary marker must be a punctuation character, got {:?}",
                marker
            )));
        }
        if config.punctuation.contains(marker) {
            return Err(Error::Config(format!(
                "boundary marker {:?} is also listed as punctuation",
                marker
            )));
        }
        let pattern = format!("[^a-z{}]+", regex::escape(&marker.to_string()));
        let splitter = Regex::new(&pattern)
            .map_err(|e| Error::Config(format!("invalid boundary marker: {}", e)))?;
        Ok(Self { config, splitter })
    }

    /// Lowercase, then delete punctuation and digits.
    pub fn clean(&self, raw: &str) -> String {
        raw.to_lowercase()
            .chars()
            .filter(|c| !c.is_ascii_digit() && !self.config.punctuation.contains(*c))
            .collect()
    }

    fn is_stop_word(&self, word: &str) -> bool {
        self.config.stop_words.contains(word)
    }

    /// Normalize one raw word, appending its tokens to `out`.
    pub fn push_tokens(&self, raw: &str, out: &mut Vec<Token>) {
        let cleaned = self.clean(raw);
        if cleaned.is_empty() || self.is_stop_word(&cleaned) {
            return;
        }

        let marker = self.config.boundary_marker;
        for fragment in self.splitter.split(&cleaned) {
            // Letters attached to a marker are kept as written.
            let marked = fragment.contains(marker);
            for (i, piece) in fragment.split(marker).enumerate() {
                if i > 0 {
                    out.push(Token::Boundary);
                }
                if piece.is_empty() || (!marked && self.is_stop_word(piece)) {
                    continue;
                }
                out.push(Token::word(piece));
            }
        }
    }

    /// Normalize a whole sequence of raw words.
    pub fn tokenize<I, S>(&self, raw_words: I) -> Vec<Token>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = Vec::new();
        let mut raw_count = 0usize;
        for raw in raw_words {
            raw_count += 1;
            self.push_tokens(raw.as_ref(), &mut tokens);
        }
        debug!(
            "Normalized {} raw words into {} tokens ({} boundaries)",
            raw_count,
            tokens.len(),
            tokens.iter().filter(|t| t.is_boundary()).count()
        );
        tokens
    }
}
