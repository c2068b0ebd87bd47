//! Delimited-text matrix writer: one header record, one record per document.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::info;

use paratdm_core::{Error, OutputConfig, Result, WriteMode};
use paratdm_matrix::TermDocumentMatrix;

/// Writes the vocabulary header followed by every term vector.
#[derive(Debug, Clone, Default)]
pub struct CsvMatrixWriter {
    config: OutputConfig,
}

impl CsvMatrixWriter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Write to any sink. Records are flushed before returning.
    pub fn write_to<W: Write>(&self, matrix: &TermDocumentMatrix, sink: W) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.config.delimiter)
            .from_writer(sink);

        writer.write_record(matrix.header()).map_err(csv_error)?;
        for row in &matrix.rows {
            writer
                .write_record(row.counts.iter().map(|c| c.to_string()))
                .map_err(csv_error)?;
        }
        writer
            .flush()
            .map_err(|e| Error::Output(format!("flush failed: {}", e)))?;
        Ok(())
    }

    /// Write to a file, replacing or extending it per the configured mode.
    ///
    /// In append mode each run adds its own header record, since the
    /// vocabulary of one run says nothing about the columns of another.
    pub fn write_path(&self, matrix: &TermDocumentMatrix, path: &Path) -> Result<()> {
        let mut options = OpenOptions::new();
        options.create(true);
        match self.config.write_mode {
            WriteMode::Truncate => options.write(true).truncate(true),
            WriteMode::Append => options.append(true),
        };
        let file = options
            .open(path)
            .map_err(|e| Error::Output(format!("cannot open {}: {}", path.display(), e)))?;

        self.write_to(matrix, file)?;
        info!(
            "Wrote {} x {} matrix to {} ({})",
            matrix.document_count(),
            matrix.vocabulary.len(),
            path.display(),
            self.config.write_mode
        );
        Ok(())
    }
}

fn csv_error(e: csv::Error) -> Error {
    Error::Csv(e.to_string())
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
            .run("The cats ; sat ; The cat runs".split(' '))
            .matrix
    }

    #[test]
    fn test_header_then_rows() {
        let mut out = Vec::new();
        CsvMatrixWriter::default().write_to(&matrix(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "the,cat,sat,runs\n1,0,0,0\n0,0,1,0\n1,1,0,1\n");
    }

    #[test]
    fn test_custom_delimiter() {
        let writer = CsvMatrixWriter::new(OutputConfig {
            delimiter: b'\t',
            ..OutputConfig::default()
        });
        let mut out = Vec::new();
        writer.write_to(&matrix(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("the\tcat\tsat\truns\n"));
    }

    #[test]
    fn test_unwritable_path_reports_output_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("tdm.csv");
        let err = CsvMatrixWriter::default().write_path(&matrix(), &path).unwrap_err();
        assert!(matches!(err, Error::Output(_)));
    }
}
