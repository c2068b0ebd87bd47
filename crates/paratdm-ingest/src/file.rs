//! Corpus file reading.

use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::info;

use paratdm_core::{Error, Result};

/// Raw whitespace-split words of one corpus plus its fingerprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCorpus {
    pub words: Vec<String>,
    /// SHA-256 of the source text, hex encoded.
    pub sha256: String,
}

impl RawCorpus {
    pub fn from_text(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_string).collect(),
            sha256: content_hash(text),
        }
    }
}

/// Read a corpus file. A missing or non-UTF-8 file is fatal.
pub fn read_corpus(path: &Path) -> Result<RawCorpus> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::CorpusUnreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let corpus = RawCorpus::from_text(&text);
    info!(
        "Read corpus {} ({} bytes, {} raw words)",
        path.display(),
        text.len(),
        corpus.words.len()
    );
    Ok(corpus)
}

/// Compute SHA-256 content hash.
pub fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_any_whitespace() {
        let corpus = RawCorpus::from_text("The cats;\nsat\t on  mats");
        assert_eq!(corpus.words, vec!["The", "cats;", "sat", "on", "mats"]);
    }

    #[test]
    fn test_read_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paragraphs.txt");
        std::fs::write(&path, "one two ; three").unwrap();
        let corpus = read_corpus(&path).unwrap();
        assert_eq!(corpus.words.len(), 4);
        assert_eq!(corpus.sha256, content_hash("one two ; three"));
    }

    #[test]
    fn test_missing_corpus_is_fatal() {
        let err = read_corpus(Path::new("/nonexistent/paragraphs.txt")).unwrap_err();
        assert!(matches!(err, Error::CorpusUnreadable { .. }));
    }

    #[test]
    fn test_content_hash_is_stable() {
        assert_eq!(
            content_hash(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_ne!(content_hash("a"), content_hash("b"));
    }
}
