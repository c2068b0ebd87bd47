//! End-to-end pipeline: raw words -> tokens -> documents -> matrix.

use std::time::Instant;

use tracing::{debug, info};

use paratdm_core::{MatchPolicy, Result, TdmConfig, VocabularyPolicy};
use paratdm_ingest::{Corpus, Normalizer, RawCorpus, StemCache};

use crate::aggregate::Aggregation;
use crate::matrix::TermDocumentMatrix;
use crate::types::RunReport;
use crate::vocabulary::Vocabulary;

/// Matrix plus the report describing how it was built.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub matrix: TermDocumentMatrix,
    pub report: RunReport,
}

/// Turns a corpus of raw words into a term-document matrix.
#[derive(Debug, Clone)]
pub struct TdmPipeline {
    normalizer: Normalizer,
    vocabulary_policy: VocabularyPolicy,
    match_policy: MatchPolicy,
}

impl TdmPipeline {
    pub fn new(config: &TdmConfig) -> Result<Self> {
        Ok(Self {
            normalizer: Normalizer::new(config.normalizer.clone())?,
            vocabulary_policy: config.vocabulary_policy,
            match_policy: config.match_policy,
        })
    }

    /// Normalize and segment raw words.
    pub fn segment<I, S>(&self, raw_words: I) -> Corpus
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = self.normalizer.tokenize(raw_words);
        Corpus::segment(&tokens)
    }

    /// Build the matrix for already segmented documents.
    pub fn build(&self, corpus: &Corpus) -> TermDocumentMatrix {
        let mut stems = StemCache::new();
        let document_stems: Vec<Vec<String>> = corpus
            .documents
            .iter()
            .map(|doc| doc.tokens.iter().map(|t| stems.stem(t)).collect())
            .collect();
        debug!("Stemmed {} distinct tokens", stems.len());

        let document_aggregations: Vec<Aggregation> = corpus
            .documents
            .iter()
            .zip(&document_stems)
            .map(|(doc, doc_stems)| Aggregation::build(doc.tokens.iter().zip(doc_stems)))
            .collect();

        let corpus_aggregation = Aggregation::build(
            corpus
                .documents
                .iter()
                .zip(&document_stems)
                .flat_map(|(doc, doc_stems)| doc.tokens.iter().zip(doc_stems)),
        );

        let vocabulary = Vocabulary::from_aggregation(&corpus_aggregation, self.vocabulary_policy);
        info!(
            "Vocabulary: {} terms from {} distinct stems ({} policy)",
            vocabulary.len(),
            corpus_aggregation.len(),
            self.vocabulary_policy
        );

        TermDocumentMatrix::assemble(
            vocabulary,
            corpus_aggregation,
            document_aggregations,
            self.match_policy,
        )
    }

    /// Run the whole pipeline over raw words.
    pub fn run<I, S>(&self, raw_words: I) -> PipelineRun
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = Instant::now();
        let corpus = self.segment(raw_words);
        let matrix = self.build(&corpus);

        let report = RunReport {
            documents: matrix.document_count(),
            tokens: corpus.token_count(),
            vocabulary_size: matrix.vocabulary.len(),
            distinct_stems: matrix.corpus_aggregation.len(),
            unmatched_terms: matrix.coverage.unmatched_total,
            unmatched_per_document: matrix.coverage.unmatched_per_document.clone(),
            vocabulary_policy: self.vocabulary_policy,
            match_policy: self.match_policy,
            corpus_sha256: String::new(),
            duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            "Built {} x {} term-document matrix in {}ms",
            report.documents, report.vocabulary_size, report.duration_ms
        );

        PipelineRun { matrix, report }
    }

    /// Run over a corpus read from disk, recording its fingerprint.
    pub fn run_corpus(&self, raw: &RawCorpus) -> PipelineRun {
        let mut run = self.run(&raw.words);
        run.report.corpus_sha256 = raw.sha256.clone();
        run
    }
}
