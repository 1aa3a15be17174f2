//! In-memory table model with tagged cell values
//!
//! Every cell is tagged exactly once at the loader boundary as one of
//! [`Numeric`](Cell::Numeric), [`Text`](Cell::Text), [`Null`](Cell::Null)
//! or [`Empty`](Cell::Empty). The profiling engine only pattern-matches
//! the tag and never re-inspects raw strings.

use crate::errors::{DataSnapError, Result};

/// A single cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// A finite number parsed from the source field.
    Numeric(f64),
    /// A non-empty, non-numeric value, kept untrimmed.
    Text(String),
    /// An explicit null marker from the source format.
    Null,
    /// An empty or whitespace-only field.
    Empty,
}

impl Cell {
    /// Returns `true` for null and empty cells.
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Null | Cell::Empty)
    }
}

/// A named, ordered sequence of cells for one field.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// An ordered collection of equal-length columns.
///
/// Construction validates the shape, so the profiling engine can assume a
/// rectangular table and never fails mid-computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Builds a table from columns, rejecting ragged column sets.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map(Column::len).unwrap_or(0);
        if let Some(bad) = columns.iter().find(|c| c.len() != row_count) {
            return Err(DataSnapError::InvalidInput(format!(
                "column '{}' has {} rows, expected {}",
                bad.name(),
                bad.len(),
                row_count
            )));
        }
        Ok(Self { columns, row_count })
    }

    /// Creates a table with no columns and no rows.
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            row_count: 0,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
