//! Full pipeline runs over small corpora: raw text in, matrix out.

use paratdm_core::{MatchPolicy, NormalizerConfig, TdmConfig, VocabularyPolicy};
use paratdm_ingest::RawCorpus;
use paratdm_matrix::TdmPipeline;

fn config(match_policy: MatchPolicy, vocabulary_policy: VocabularyPolicy) -> TdmConfig {
    TdmConfig {
        normalizer: NormalizerConfig::without_stop_words(),
        match_policy,
        vocabulary_policy,
        ..TdmConfig::default()
    }
}

const SCENARIO: &str = "The cats ; sat ; The cat runs";

#[test]
fn test_three_documents_surface_matching() {
    let pipeline = TdmPipeline::new(&config(
        MatchPolicy::SurfaceForm,
        VocabularyPolicy::Representatives,
    ))
    .unwrap();
    let run = pipeline.run_corpus(&RawCorpus::from_text(SCENARIO));
    let matrix = &run.matrix;

    assert_eq!(matrix.document_count(), 3);
    assert_eq!(matrix.header(), ["the", "cat", "sat", "runs"]);
    assert_eq!(matrix.vocabulary.stems(), ["the", "cat", "sat", "run"]);

    // "cats" is the document's own representative; the corpus chose "cat".
    assert_eq!(matrix.rows[0].counts, vec![1, 0, 0, 0]);
    assert_eq!(matrix.rows[0].unmatched, vec!["cats"]);
    assert_eq!(matrix.rows[1].counts, vec![0, 0, 1, 0]);
    assert_eq!(matrix.rows[2].counts, vec![1, 1, 0, 1]);

    assert_eq!(run.report.unmatched_terms, 1);
    assert_eq!(run.report.unmatched_per_document, vec![1, 0, 0]);
    for row in &matrix.rows {
        assert_eq!(row.len(), matrix.vocabulary.len());
    }
}

#[test]
fn test_three_documents_stem_matching() {
    let pipeline =
        TdmPipeline::new(&config(MatchPolicy::Stem, VocabularyPolicy::Representatives)).unwrap();
    let run = pipeline.run(SCENARIO.split_whitespace());
    let matrix = &run.matrix;

    assert_eq!(matrix.rows[0].counts, vec![1, 1, 0, 0]);
    assert_eq!(matrix.rows[1].counts, vec![0, 0, 1, 0]);
    assert_eq!(matrix.rows[2].counts, vec![1, 1, 0, 1]);
    assert_eq!(run.report.unmatched_terms, 0);

    // non-zero positions are exactly each document's surviving stems
    for (row, agg) in matrix.rows.iter().zip(&matrix.document_aggregations) {
        let mut expected: Vec<usize> = agg
            .entries()
            .iter()
            .filter_map(|e| matrix.vocabulary.position_of_stem(&e.stem))
            .collect();
        expected.sort_unstable();
        assert_eq!(row.nonzero_positions(), expected);
    }
}

#[test]
fn test_leading_half_vocabulary() {
    let pipeline = TdmPipeline::new(&config(
        MatchPolicy::SurfaceForm,
        VocabularyPolicy::LeadingHalf,
    ))
    .unwrap();
    let run = pipeline.run(SCENARIO.split_whitespace());

    assert_eq!(run.matrix.header(), ["the", "cat"]);
    assert_eq!(run.matrix.rows[2].counts, vec![1, 1]);
    // "sat" and "runs" lost their columns
    assert_eq!(run.report.unmatched_per_document, vec![1, 1, 1]);
}

#[test]
fn test_paragraph_corpus_with_default_stop_words() {
    let text = "Stemming reduces inflected words to their roots; \
                The stemmer strips suffixes from words, and stemmed words cluster. \
                Clustering (of 16 paragraphs!) groups similar roots;";
    let pipeline = TdmPipeline::new(&TdmConfig::default()).unwrap();
    let run = pipeline.run_corpus(&RawCorpus::from_text(text));

    assert_eq!(run.report.documents, 2);
    assert_eq!(run.report.corpus_sha256.len(), 64);
    let terms = run.matrix.document_terms(0).unwrap();
    assert!(terms.iter().all(|(t, _)| *t != "to" && *t != "their"));
    assert!(terms.contains(&("roots", 1)));

    let top = run.matrix.corpus_aggregation.top_terms(1);
    assert_eq!(top[0].representative, "words");
    assert_eq!(top[0].count, 3);
}
