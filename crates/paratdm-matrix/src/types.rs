//! Run report types.

use serde::Serialize;

use paratdm_core::{MatchPolicy, VocabularyPolicy};

/// Summary of one pipeline run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub documents: usize,
    /// Word tokens across all documents, markers excluded.
    pub tokens: usize,
    pub vocabulary_size: usize,
    pub distinct_stems: usize,
    pub unmatched_terms: usize,
    pub unmatched_per_document: Vec<usize>,
    pub vocabulary_policy: VocabularyPolicy,
    pub match_policy: MatchPolicy,
    /// Empty when the run did not start from raw corpus text.
    pub corpus_sha256: String,
    pub duration_ms: u64,
}
