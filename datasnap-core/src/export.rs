//! Report Writer: serialized output for profile reports

use crate::errors::Result;
use crate::report::ProfileReport;
use std::io::Write;

/// Writes the per-column summaries as CSV, one record per column.
///
/// Undefined statistics serialize as empty fields. The file-level metadata
/// is not part of the row-oriented output; use [`to_json`] for the full
/// report.
pub fn write_csv<W: Write>(report: &ProfileReport, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for summary in &report.columns {
        csv_writer.serialize(summary)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Renders the full report (summaries plus metadata) as pretty JSON.
pub fn to_json(report: &ProfileReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
