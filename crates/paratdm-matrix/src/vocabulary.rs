//! Corpus-wide vocabulary: the column order of the term-document matrix.

use std::collections::HashMap;

use serde::Serialize;

use paratdm_core::VocabularyPolicy;

use crate::aggregate::Aggregation;

/// Ordered, deduplicated representative terms. Fixed once built.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Vocabulary {
    terms: Vec<String>,
    stems: Vec<String>,
    #[serde(skip)]
    by_term: HashMap<String, usize>,
    #[serde(skip)]
    by_stem: HashMap<String, usize>,
}

impl Vocabulary {
    /// Select vocabulary terms from the whole-corpus aggregation.
    pub fn from_aggregation(corpus: &Aggregation, policy: VocabularyPolicy) -> Self {
        let take = match policy {
            VocabularyPolicy::Representatives => corpus.len(),
            VocabularyPolicy::LeadingHalf => corpus.len() / 2,
        };

        let mut vocabulary = Self::default();
        for entry in corpus.entries().iter().take(take) {
            if vocabulary.by_term.contains_key(&entry.representative) {
                continue;
            }
            let position = vocabulary.terms.len();
            vocabulary.by_term.insert(entry.representative.clone(), position);
            vocabulary.by_stem.entry(entry.stem.clone()).or_insert(position);
            vocabulary.terms.push(entry.representative.clone());
            vocabulary.stems.push(entry.stem.clone());
        }
        vocabulary
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Stem of the term at each position.
    pub fn stems(&self) -> &[String] {
        &self.stems
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// First position whose term is exactly `term`.
    pub fn position_of_term(&self, term: &str) -> Option<usize> {
        self.by_term.get(term).copied()
    }

    /// First position whose term has stem `stem`.
    pub fn position_of_stem(&self, stem: &str) -> Option<usize> {
        self.by_stem.get(stem).copied()
    }
}
