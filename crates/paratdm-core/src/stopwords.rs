//! Default stop-word list and stop-word file loading.

use std::collections::BTreeSet;
use std::path::Path;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::{Error, Result};

/// Stop words suppressed when no other list is configured.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "able", "about", "across", "all", "almost", "also", "am", "among", "an", "and",
    "any", "are", "as", "at", "be", "because", "been", "but", "by", "can", "cannot",
    "could", "dear", "did", "do", "does", "either", "else", "ever", "every", "for",
    "from", "get", "got", "had", "has", "have", "he", "her", "hers", "him", "his", "how",
    "however", "i", "if", "in", "into", "is", "it", "its", "just", "least", "let", "like",
    "likely", "may", "me", "might", "most", "must", "my", "neither", "no", "nor", "not",
    "of", "[of", "off", "often", "on", "only", "or", "other", "our", "own", "rather",
    "said", "say", "says", "she", "should", "since", "so", "some", "than", "that", "the",
    "their", "them", "then", "there", "these", "they", "this", "tis", "to", "too", "twas",
    "us", "wants", "was", "we", "were", "what", "when", "where", "which", "while", "who",
    "whom", "why", "will", "with", "would", "yet", "you", "your",
];

static DEFAULT_SET: Lazy<BTreeSet<String>> =
    Lazy::new(|| DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect());

/// The default stop words as an owned set.
pub fn default_stop_words() -> BTreeSet<String> {
    DEFAULT_SET.clone()
}

/// Load a stop-word file.
///
/// Entries are separated by any whitespace and lowercased. Lines starting
/// with `#` are comments.
pub fn load_stop_words(path: &Path) -> Result<BTreeSet<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("cannot read stop words {}: {}", path.display(), e))
    })?;
    let words = parse_stop_words(&content);
    debug!("Loaded {} stop words from {}", words.len(), path.display());
    Ok(words)
}

fn parse_stop_words(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .flat_map(str::split_whitespace)
        .map(str::to_lowercase)
        .collect()
}
