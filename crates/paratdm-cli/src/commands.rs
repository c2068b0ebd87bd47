//! Subcommand implementations.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use tracing::info;

use paratdm_core::{load_stop_words, MatchPolicy, TdmConfig, VocabularyPolicy, WriteMode};
use paratdm_export::{
    write_document_terms, write_report, write_top_terms, CsvMatrixWriter, ExportedReport,
};
use paratdm_ingest::{read_corpus, stem};
use paratdm_matrix::{PipelineRun, TdmPipeline};

use crate::InputArgs;

/// Config file (or defaults), then environment, then command-line flags.
fn load_config(input: &InputArgs) -> anyhow::Result<TdmConfig> {
    let base = match &input.config {
        Some(path) => TdmConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => TdmConfig::default(),
    };
    let mut config = TdmConfig::from_env(base).context("applying environment overrides")?;

    if let Some(path) = &input.stop_words {
        config.normalizer.stop_words = load_stop_words(path)?;
    }
    if input.match_stem {
        config.match_policy = MatchPolicy::Stem;
    }
    if input.leading_half {
        config.vocabulary_policy = VocabularyPolicy::LeadingHalf;
    }
    Ok(config)
}

fn run_pipeline(input: &InputArgs, config: &TdmConfig) -> anyhow::Result<PipelineRun> {
    let raw = read_corpus(&input.corpus)?;
    let pipeline = TdmPipeline::new(config).context("invalid normalizer configuration")?;
    Ok(pipeline.run_corpus(&raw))
}

pub fn matrix(
    input: &InputArgs,
    output: Option<&Path>,
    append: bool,
    report: Option<&Path>,
) -> anyhow::Result<()> {
    let mut config = load_config(input)?;
    if append {
        config.output.write_mode = WriteMode::Append;
    }
    let run = run_pipeline(input, &config)?;
    let writer = CsvMatrixWriter::new(config.output.clone());

    match output {
        Some(path) => writer
            .write_path(&run.matrix, path)
            .with_context(|| format!("writing matrix to {}", path.display()))?,
        None => writer.write_to(&run.matrix, std::io::stdout().lock())?,
    }

    if let Some(path) = report {
        write_report(&ExportedReport::new(&run.report, output), path)?;
    }
    if run.report.unmatched_terms > 0 {
        info!(
            "{} document terms had no vocabulary column; --match-stem matches by stem",
            run.report.unmatched_terms
        );
    }
    Ok(())
}

pub fn terms(input: &InputArgs) -> anyhow::Result<()> {
    let config = load_config(input)?;
    let run = run_pipeline(input, &config)?;
    write_document_terms(&run.matrix, std::io::stdout().lock())?;
    Ok(())
}

pub fn top(input: &InputArgs, count: usize) -> anyhow::Result<()> {
    let config = load_config(input)?;
    let run = run_pipeline(input, &config)?;
    write_top_terms(&run.matrix.corpus_aggregation, count, std::io::stdout().lock())?;
    Ok(())
}

pub fn stem_words(words: &[String]) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    for word in words {
        let lower = word.to_lowercase();
        writeln!(out, "{} -> {}", word, stem(&lower))?;
    }
    Ok(())
}
