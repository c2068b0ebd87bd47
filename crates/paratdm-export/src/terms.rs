//! Plain-text listings of aggregated terms.

use std::io::Write;

use paratdm_core::{Error, Result};
use paratdm_matrix::{Aggregation, TermDocumentMatrix};

/// Per-document `(representative, count)` listing, one block per document.
///
/// ```text
/// Paragraph 1:
///   cats 1
/// ```
pub fn write_document_terms<W: Write>(matrix: &TermDocumentMatrix, mut out: W) -> Result<()> {
    for (i, agg) in matrix.document_aggregations.iter().enumerate() {
        writeln!(out, "Paragraph {}:", i + 1).map_err(output_error)?;
        for entry in agg.entries() {
            writeln!(out, "  {} {}", entry.representative, entry.count).map_err(output_error)?;
        }
    }
    Ok(())
}

/// The `n` most frequent terms of an aggregation, one per line.
pub fn write_top_terms<W: Write>(aggregation: &Aggregation, n: usize, mut out: W) -> Result<()> {
    for entry in aggregation.top_terms(n) {
        writeln!(out, "{}\t{}\t{}", entry.representative, entry.stem, entry.count)
            .map_err(output_error)?;
    }
    Ok(())
}

fn output_error(e: std::io::Error) -> Error {
    Error::Output(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use paratdm_core::{NormalizerConfig, TdmConfig};
    use paratdm_matrix::TdmPipeline;

    fn matrix() -> TermDocumentMatrix {
        let config = TdmConfig {
            normalizer: NormalizerConfig::without_stop_words(),
            ..TdmConfig::default()
        };
        TdmPipeline::new(&config)
            .unwrap()
            .run("hopping hop ; falling".split(' '))
            .matrix
    }

    #[test]
    fn test_document_listing() {
        let mut out = Vec::new();
        write_document_terms(&matrix(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Paragraph 1:\n  hop 2\nParagraph 2:\n  falling 1\n"
        );
    }

    #[test]
    fn test_top_terms_listing() {
        let m = matrix();
        let mut out = Vec::new();
        write_top_terms(&m.corpus_aggregation, 1, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "hop\thop\t2\n");
    }
}
