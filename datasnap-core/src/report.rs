//! File Aggregator: whole-table profiling
//!
//! Drives the column profiler over every column, then combines the results
//! with a single row pass into a [`ProfileReport`]. The report is created
//! fresh per invocation and never aliases the input table.

use crate::profiler::{profile, ColumnSummary};
use crate::table::Table;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Whole-file metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub row_count: usize,
    pub column_count: usize,
    /// Rows with at least one null or empty cell, each counted once.
    pub rows_with_missing: usize,
    /// Rows in which every cell is null or empty. Zero-column tables
    /// report 0.
    pub rows_all_missing: usize,
}

/// The complete output of one profiling run: per-column summaries in input
/// column order, plus file-level metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileReport {
    pub columns: Vec<ColumnSummary>,
    pub metadata: FileMetadata,
}

/// Profiles every column and aggregates file-level metadata.
///
/// Columns are independent, so profiling fans out across them; the indexed
/// collect preserves input column order in the report.
pub fn summarize(table: &Table) -> ProfileReport {
    let columns: Vec<ColumnSummary> = table.columns().par_iter().map(profile).collect();

    let mut rows_with_missing = 0;
    let mut rows_all_missing = 0;
    for row in 0..table.row_count() {
        let mut any_missing = false;
        let mut all_missing = table.column_count() > 0;
        for column in table.columns() {
            if column.cells()[row].is_missing() {
                any_missing = true;
            } else {
                all_missing = false;
            }
        }
        if any_missing {
            rows_with_missing += 1;
        }
        if all_missing {
            rows_all_missing += 1;
        }
    }

    ProfileReport {
        columns,
        metadata: FileMetadata {
            row_count: table.row_count(),
            column_count: table.column_count(),
            rows_with_missing,
            rows_all_missing,
        },
    }
}
