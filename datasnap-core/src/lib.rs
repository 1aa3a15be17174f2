//! DataSnap: per-column and whole-file profiling for CSV-like tabular data
//!
//! The engine consumes an already-parsed [`Table`] of tagged cells and
//! produces an immutable [`ProfileReport`]: one flat summary per column
//! (type classification, missingness, cardinality, numeric or categorical
//! statistics) plus file-level metadata. Loading CSV input and rendering
//! the report are thin collaborators around that engine.
//!
//! ```
//! use datasnap_core::{read_from, summarize, CsvOptions};
//!
//! let csv = "x,color\n1,red\n2,blue\nNA,red\n";
//! let table = read_from(csv.as_bytes(), &CsvOptions::default()).unwrap();
//! let report = summarize(&table);
//!
//! assert_eq!(report.metadata.row_count, 3);
//! assert_eq!(report.columns[0].null_count, 1);
//! assert_eq!(report.columns[1].top_value.as_deref(), Some("red"));
//! ```

pub mod data_source;
pub mod errors;
pub mod export;
pub mod profiler;
pub mod report;
pub mod table;

// Re-exports
pub use data_source::{read_csv, read_from, CsvOptions};
pub use errors::{DataSnapError, Result};
pub use export::{to_json, write_csv};
pub use profiler::{profile, ColumnKind, ColumnSummary};
pub use report::{summarize, FileMetadata, ProfileReport};
pub use table::{Cell, Column, Table};
