//! JSON run report.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use paratdm_core::{Error, Result};
use paratdm_matrix::RunReport;

/// A run report stamped with its export time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedReport<'a> {
    pub generated_at: DateTime<Utc>,
    /// Matrix destination, if one was written.
    pub output: Option<String>,
    #[serde(flatten)]
    pub run: &'a RunReport,
}

impl<'a> ExportedReport<'a> {
    pub fn new(run: &'a RunReport, output: Option<&Path>) -> Self {
        Self {
            generated_at: Utc::now(),
            output: output.map(|p| p.display().to_string()),
            run,
        }
    }
}

/// Write the report as pretty-printed JSON, replacing any existing file.
pub fn write_report(report: &ExportedReport<'_>, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)
        .map_err(|e| Error::Output(format!("cannot write report {}: {}", path.display(), e)))?;
    info!("Wrote run report to {}", path.display());
    Ok(())
}
