//! paratdm export — serialization adapters for term-document matrices.
//!
//! The matrix is always fully built before any writer runs; a failed write
//! is reported to the caller and leaves the in-memory matrix untouched.

pub mod csv_writer;
pub mod report;
pub mod terms;

pub use csv_writer::CsvMatrixWriter;
pub use report::{write_report, ExportedReport};
pub use terms::{write_document_terms, write_top_terms};
