//! Projection of document aggregations onto the vocabulary.

use ndarray::Array2;
use serde::Serialize;
use tracing::warn;

use paratdm_core::MatchPolicy;

use crate::aggregate::Aggregation;
use crate::vocabulary::Vocabulary;

/// Frequency vector of one document, aligned to vocabulary positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermVector {
    pub document: usize,
    pub counts: Vec<u32>,
    /// Representatives of this document that found no vocabulary column.
    pub unmatched: Vec<String>,
}

impl TermVector {
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Positions with a non-zero count.
    pub fn nonzero_positions(&self) -> Vec<usize> {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, c)| **c > 0)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Builds term vectors against a fixed vocabulary.
pub struct MatrixBuilder<'a> {
    vocabulary: &'a Vocabulary,
    policy: MatchPolicy,
}

impl<'a> MatrixBuilder<'a> {
    pub fn new(vocabulary: &'a Vocabulary, policy: MatchPolicy) -> Self {
        Self { vocabulary, policy }
    }

    /// Vectorize one document.
    ///
    /// Each entry sets (never adds to) the first matching column. Entries
    /// with no matching column are dropped from the vector and listed in
    /// [`TermVector::unmatched`].
    pub fn vectorize(&self, document: usize, aggregation: &Aggregation) -> TermVector {
        let mut counts = vec![0u32; self.vocabulary.len()];
        let mut unmatched = Vec::new();

        for entry in aggregation.entries() {
            let position = match self.policy {
                MatchPolicy::SurfaceForm => self.vocabulary.position_of_term(&entry.representative),
                MatchPolicy::Stem => self.vocabulary.position_of_stem(&entry.stem),
            };
            match position {
                Some(i) => counts[i] = entry.count,
                None => unmatched.push(entry.representative.clone()),
            }
        }

        TermVector {
            document,
            counts,
            unmatched,
        }
    }
}

/// How much of the documents' content the vocabulary failed to cover.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    pub unmatched_total: usize,
    pub unmatched_per_document: Vec<usize>,
}

impl CoverageReport {
    fn from_rows(rows: &[TermVector]) -> Self {
        let unmatched_per_document: Vec<usize> = rows.iter().map(|r| r.unmatched.len()).collect();
        Self {
            unmatched_total: unmatched_per_document.iter().sum(),
            unmatched_per_document,
        }
    }
}

/// The term-document matrix of one run, with the aggregations it came from.
#[derive(Debug, Clone, Serialize)]
pub struct TermDocumentMatrix {
    pub vocabulary: Vocabulary,
    pub rows: Vec<TermVector>,
    pub document_aggregations: Vec<Aggregation>,
    pub corpus_aggregation: Aggregation,
    pub coverage: CoverageReport,
}

impl TermDocumentMatrix {
    /// Vectorize every document aggregation against `vocabulary`.
    pub fn assemble(
        vocabulary: Vocabulary,
        corpus_aggregation: Aggregation,
        document_aggregations: Vec<Aggregation>,
        policy: MatchPolicy,
    ) -> Self {
        let builder = MatrixBuilder::new(&vocabulary, policy);
        let rows: Vec<TermVector> = document_aggregations
            .iter()
            .enumerate()
            .map(|(i, agg)| builder.vectorize(i, agg))
            .collect();

        let coverage = CoverageReport::from_rows(&rows);
        if coverage.unmatched_total > 0 {
            warn!(
                "{} document terms have no vocabulary column ({:?} matching)",
                coverage.unmatched_total, policy
            );
        }

        Self {
            vocabulary,
            rows,
            document_aggregations,
            corpus_aggregation,
            coverage,
        }
    }

    /// Header record: the vocabulary terms.
    pub fn header(&self) -> &[String] {
        self.vocabulary.terms()
    }

    pub fn document_count(&self) -> usize {
        self.rows.len()
    }

    /// `(representative, count)` pairs of document `index`, in aggregation order.
    pub fn document_terms(&self, index: usize) -> Option<Vec<(&str, u32)>> {
        self.document_aggregations.get(index).map(|agg| {
            agg.entries()
                .iter()
                .map(|e| (e.representative.as_str(), e.count))
                .collect()
        })
    }

    /// Dense documents x vocabulary view for downstream numeric consumers.
    pub fn to_array(&self) -> Array2<u32> {
        Array2::from_shape_fn((self.rows.len(), self.vocabulary.len()), |(i, j)| {
            self.rows[i].counts[j]
        })
    }
}
