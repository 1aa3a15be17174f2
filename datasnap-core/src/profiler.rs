//! Column Profiler: classification and per-column statistics
//!
//! [`profile`] is a total pure function: every column, including fully
//! empty or fully missing ones, produces a valid summary. Statistics that
//! cannot be computed are reported as `None`, never as zero or a sentinel.

use crate::table::{Cell, Column};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Column classification.
///
/// A column is `Numeric` iff every non-missing cell carries the numeric
/// tag. Mixed columns are `Categorical`: numeric treatment is all-or-nothing,
/// a single stray token forces the whole column into categorical handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Numeric => write!(f, "numeric"),
            ColumnKind::Categorical => write!(f, "categorical"),
        }
    }
}

/// Flat per-column summary record, suitable for direct row-oriented output.
///
/// Invariant: `count + null_count + empty_count` equals the column length,
/// and exactly one of the stat blocks (numeric: `mean`..`max`, categorical:
/// `top_value`/`top_freq`) is populated, per `dtype`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    pub dtype: ColumnKind,
    /// Non-null, non-empty cells.
    pub count: usize,
    pub null_count: usize,
    pub empty_count: usize,
    /// `null_count + empty_count`.
    pub missing_count: usize,
    /// Distinct non-missing values.
    pub unique_count: usize,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// Sample standard deviation (n-1 denominator); requires `count >= 2`.
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub top_value: Option<String>,
    pub top_freq: Option<usize>,
}

/// Profiles one column in isolation.
pub fn profile(column: &Column) -> ColumnSummary {
    let cells = column.cells();

    let null_count = cells.iter().filter(|c| matches!(c, Cell::Null)).count();
    let empty_count = cells.iter().filter(|c| matches!(c, Cell::Empty)).count();
    let count = cells.len() - null_count - empty_count;

    let dtype = classify(cells);

    let mut summary = ColumnSummary {
        name: column.name().to_string(),
        dtype,
        count,
        null_count,
        empty_count,
        missing_count: null_count + empty_count,
        unique_count: 0,
        mean: None,
        median: None,
        std: None,
        min: None,
        max: None,
        top_value: None,
        top_freq: None,
    };

    match dtype {
        ColumnKind::Numeric => {
            let values: Vec<f64> = cells
                .iter()
                .filter_map(|c| match c {
                    Cell::Numeric(v) => Some(*v),
                    _ => None,
                })
                .collect();
            summary.unique_count = unique_numeric(&values);
            fill_numeric_stats(&mut summary, values);
        }
        ColumnKind::Categorical => {
            let keys: Vec<String> = cells.iter().filter_map(value_key).collect();
            summary.unique_count = keys.iter().collect::<HashSet<_>>().len();
            fill_categorical_stats(&mut summary, &keys);
        }
    }

    summary
}

/// Decides the column classification from the tag sequence alone.
///
/// A column with zero non-missing cells is vacuously numeric; all of its
/// statistics are undefined either way.
pub fn classify(cells: &[Cell]) -> ColumnKind {
    let all_numeric = cells
        .iter()
        .filter(|c| !c.is_missing())
        .all(|c| matches!(c, Cell::Numeric(_)));
    if all_numeric {
        ColumnKind::Numeric
    } else {
        ColumnKind::Categorical
    }
}

/// Categorical key of a non-missing cell.
///
/// Numeric cells inside a mixed column contribute the canonical decimal
/// rendering of the parsed value, so "1" and "1.0" coincide.
fn value_key(cell: &Cell) -> Option<String> {
    match cell {
        Cell::Numeric(v) => Some(v.to_string()),
        Cell::Text(s) => Some(s.clone()),
        Cell::Null | Cell::Empty => None,
    }
}

fn unique_numeric(values: &[f64]) -> usize {
    // Loader guarantees finite values, so bit equality is value equality
    // once negative zero is folded in.
    values
        .iter()
        .map(|&v| if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() })
        .collect::<HashSet<u64>>()
        .len()
}

fn fill_numeric_stats(summary: &mut ColumnSummary, mut values: Vec<f64>) {
    if values.is_empty() {
        return;
    }

    values.sort_by(f64::total_cmp);
    let n = values.len();

    let mean = values.iter().sum::<f64>() / n as f64;
    let median = if n % 2 == 1 {
        values[n / 2]
    } else {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    };

    summary.mean = Some(mean);
    summary.median = Some(median);
    summary.min = Some(values[0]);
    summary.max = Some(values[n - 1]);

    // Sample standard deviation is undefined below two observations.
    if n >= 2 {
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        summary.std = Some(variance.sqrt());
    }
}

fn fill_categorical_stats(summary: &mut ColumnSummary, keys: &[String]) {
    if keys.is_empty() {
        return;
    }

    // (occurrences, first-occurrence index); the index breaks frequency ties
    // deterministically in favor of the earliest value.
    let mut frequencies: HashMap<&str, (usize, usize)> = HashMap::new();
    for (index, key) in keys.iter().enumerate() {
        let entry = frequencies.entry(key.as_str()).or_insert((0, index));
        entry.0 += 1;
    }

    if let Some((top, (freq, _))) = frequencies
        .into_iter()
        .min_by_key(|&(_, (freq, first))| (std::cmp::Reverse(freq), first))
    {
        summary.top_value = Some(top.to_string());
        summary.top_freq = Some(freq);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test]
    fn test_numeric_column_with_null_and_empty() {
        // [1, 2, 3, null, ""]
        let column = Column::new(
            "a",
            vec![
                Cell::Numeric(1.0),
                Cell::Numeric(2.0),
                Cell::Numeric(3.0),
                Cell::Null,
                Cell::Empty,
            ],
        );
        let summary = profile(&column);

        assert_eq!(summary.dtype, ColumnKind::Numeric);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.null_count, 1);
        assert_eq!(summary.empty_count, 1);
        assert_eq!(summary.missing_count, 2);
        assert_eq!(summary.mean, Some(2.0));
        assert_eq!(summary.median, Some(2.0));
        assert_eq!(summary.min, Some(1.0));
        assert_eq!(summary.max, Some(3.0));
        assert_eq!(summary.std, Some(1.0));
        assert_eq!(summary.top_value, None);
        assert_eq!(summary.top_freq, None);
    }

    #[test]
    fn test_categorical_top_value_and_unique() {
        let column = Column::new(
            "color",
            vec![text("red"), text("blue"), text("red"), text("green")],
        );
        let summary = profile(&column);

        assert_eq!(summary.dtype, ColumnKind::Categorical);
        assert_eq!(summary.top_value.as_deref(), Some("red"));
        assert_eq!(summary.top_freq, Some(2));
        assert_eq!(summary.unique_count, 3);
        assert_eq!(summary.mean, None);
    }

    #[test]
    fn test_single_stray_token_forces_categorical() {
        let column = Column::new(
            "mixed",
            vec![Cell::Numeric(1.0), Cell::Numeric(2.0), text("x")],
        );
        let summary = profile(&column);

        assert_eq!(summary.dtype, ColumnKind::Categorical);
        assert_eq!(summary.unique_count, 3);
        assert_eq!(summary.top_freq, Some(1));
        // First-occurrence tie-break among all-frequency-1 values.
        assert_eq!(summary.top_value.as_deref(), Some("1"));
    }

    #[test]
    fn test_tie_break_uses_first_occurrence() {
        let column = Column::new(
            "flag",
            vec![text("no"), text("yes"), text("yes"), text("no")],
        );
        let summary = profile(&column);

        assert_eq!(summary.top_value.as_deref(), Some("no"));
        assert_eq!(summary.top_freq, Some(2));
    }

    #[test]
    fn test_std_undefined_below_two_values() {
        let column = Column::new("a", vec![Cell::Numeric(5.0), Cell::Null]);
        let summary = profile(&column);

        assert_eq!(summary.count, 1);
        assert_eq!(summary.mean, Some(5.0));
        assert_eq!(summary.median, Some(5.0));
        assert_eq!(summary.min, Some(5.0));
        assert_eq!(summary.max, Some(5.0));
        assert_eq!(summary.std, None);
    }

    #[test]
    fn test_all_missing_column() {
        let column = Column::new("a", vec![Cell::Null, Cell::Empty, Cell::Empty]);
        let summary = profile(&column);

        assert_eq!(summary.dtype, ColumnKind::Numeric);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.null_count, 1);
        assert_eq!(summary.empty_count, 2);
        assert_eq!(summary.unique_count, 0);
        assert_eq!(summary.mean, None);
        assert_eq!(summary.std, None);
        assert_eq!(summary.top_value, None);
    }

    #[test]
    fn test_even_length_median() {
        let column = Column::new(
            "a",
            vec![
                Cell::Numeric(4.0),
                Cell::Numeric(1.0),
                Cell::Numeric(3.0),
                Cell::Numeric(2.0),
            ],
        );
        let summary = profile(&column);

        assert_eq!(summary.median, Some(2.5));
        assert_eq!(summary.min, Some(1.0));
        assert_eq!(summary.max, Some(4.0));
    }

    #[test]
    fn test_untrimmed_text_values_stay_distinct() {
        let column = Column::new("a", vec![text(" red "), text("red")]);
        let summary = profile(&column);

        assert_eq!(summary.unique_count, 2);
        assert_eq!(summary.top_value.as_deref(), Some(" red "));
        assert_eq!(summary.top_freq, Some(1));
    }

    #[test]
    fn test_numeric_unique_compares_parsed_values() {
        // "1" and "1.0" both tag as Numeric(1.0) at the boundary.
        let column = Column::new(
            "a",
            vec![Cell::Numeric(1.0), Cell::Numeric(1.0), Cell::Numeric(2.0)],
        );
        let summary = profile(&column);

        assert_eq!(summary.unique_count, 2);
        assert_eq!(summary.count, 3);
    }

    #[test]
    fn test_count_partition_invariant() {
        let column = Column::new(
            "a",
            vec![Cell::Numeric(1.0), Cell::Null, Cell::Empty, text("z")],
        );
        let summary = profile(&column);

        assert_eq!(
            summary.count + summary.null_count + summary.empty_count,
            column.len()
        );
        assert_eq!(summary.missing_count, summary.null_count + summary.empty_count);
    }
}
