//! paratdm — paragraph corpus to term-document matrix.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "paratdm", version, about = "Build a term-document matrix from delimited paragraphs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the vocabulary header and one frequency row per document.
    Matrix {
        #[command(flatten)]
        input: InputArgs,
        /// Output file; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Append to the output file instead of replacing it.
        #[arg(long)]
        append: bool,
        /// Write a JSON run report to this file.
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Print each document's aggregated terms and counts.
    Terms {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print the most frequent terms of the whole corpus.
    Top {
        #[command(flatten)]
        input: InputArgs,
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },
    /// Print the stem of each word.
    Stem {
        #[arg(required = true)]
        words: Vec<String>,
    },
}

#[derive(Args, Debug, Clone)]
struct InputArgs {
    /// Corpus file: whitespace-separated words, documents ended by ';'.
    corpus: PathBuf,
    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Stop-word file, replacing the configured list.
    #[arg(long)]
    stop_words: Option<PathBuf>,
    /// Match document terms to vocabulary columns by stem.
    #[arg(long)]
    match_stem: bool,
    /// Keep only the first half of the corpus terms as vocabulary.
    #[arg(long)]
    leading_half: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Matrix {
            input,
            output,
            append,
            report,
        } => commands::matrix(&input, output.as_deref(), append, report.as_deref()),
        Command::Terms { input } => commands::terms(&input),
        Command::Top { input, count } => commands::top(&input, count),
        Command::Stem { words } => commands::stem_words(&words),
    }
}
