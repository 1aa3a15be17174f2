//! Table Loader: CSV input into the tagged table model
//!
//! The loader decides every cell's tag exactly once, at this boundary:
//! trim → emptiness check → null-token check → finite-number parse → text.
//! Values that survive the emptiness check keep their original untrimmed
//! text, so downstream uniqueness and top-value computation see the source
//! bytes as written.

use crate::errors::Result;
use crate::table::{Cell, Column, Table};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Null markers recognized by default. CSV has no native null, so explicit
/// tokens stand in for it; the empty string is deliberately absent here,
/// empties get their own tag.
static DEFAULT_NULL_TOKENS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "NA", "N/A", "na", "n/a", "null", "NULL", "None", "none", "NaN", "nan", "NAN", "#N/A",
        "#NA",
    ]
    .into_iter()
    .collect()
});

/// Options for reading a CSV file into a [`Table`].
#[derive(Debug, Clone)]
pub struct CsvOptions {
    pub delimiter: u8,
    /// When `false`, column names are synthesized as `column_0`, `column_1`, ...
    pub has_headers: bool,
    /// Optional cap on the number of data rows read.
    pub nrows: Option<usize>,
    /// Tokens that tag as [`Cell::Null`] (compared after trimming).
    pub null_tokens: HashSet<String>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
            nrows: None,
            null_tokens: DEFAULT_NULL_TOKENS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Reads a CSV file into a table.
pub fn read_csv(path: impl AsRef<Path>, options: &CsvOptions) -> Result<Table> {
    let file = File::open(path.as_ref())?;
    let table = read_from(file, options)?;
    debug!(
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded {}",
        path.as_ref().display()
    );
    Ok(table)
}

/// Reads CSV data from any reader into a table.
pub fn read_from<R: Read>(reader: R, options: &CsvOptions) -> Result<Table> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(options.has_headers)
        .from_reader(reader);

    let mut names: Vec<String> = if options.has_headers {
        csv_reader.headers()?.iter().map(str::to_string).collect()
    } else {
        Vec::new()
    };
    let mut cells: Vec<Vec<Cell>> = names.iter().map(|_| Vec::new()).collect();

    for (index, record) in csv_reader.records().enumerate() {
        if options.nrows.is_some_and(|limit| index >= limit) {
            break;
        }
        let record = record?;
        if names.is_empty() {
            // Headerless input: the first record fixes the width.
            names = (0..record.len()).map(|i| format!("column_{}", i)).collect();
            cells = names.iter().map(|_| Vec::new()).collect();
        }
        for (slot, field) in cells.iter_mut().zip(record.iter()) {
            slot.push(tag_cell(field, &options.null_tokens));
        }
    }

    let columns = names
        .into_iter()
        .zip(cells)
        .map(|(name, cells)| Column::new(name, cells))
        .collect();
    Table::new(columns)
}

/// Tags one raw field.
fn tag_cell(field: &str, null_tokens: &HashSet<String>) -> Cell {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Cell::Empty;
    }
    if null_tokens.contains(trimmed) {
        return Cell::Null;
    }
    match trimmed.parse::<f64>() {
        // Non-finite spellings ("inf", "infinity") stay text; the engine
        // then never sees a value without a total order.
        Ok(value) if value.is_finite() => Cell::Numeric(value),
        _ => Cell::Text(field.to_string()),
    }
}
