//! paratdm matrix — stem aggregation, vocabulary, term-document matrix.
//!
//! The pipeline is synchronous and deterministic: the same raw words and
//! configuration always produce the same matrix.

pub mod aggregate;
pub mod matrix;
pub mod pipeline;
pub mod types;
pub mod vocabulary;

pub use aggregate::{Aggregation, TermEntry};
pub use matrix::{CoverageReport, MatrixBuilder, TermDocumentMatrix, TermVector};
pub use pipeline::{PipelineRun, TdmPipeline};
pub use types::RunReport;
pub use vocabulary::Vocabulary;
