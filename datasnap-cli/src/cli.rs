use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use datasnap_core::{read_csv, summarize, to_json, write_csv, ColumnKind, CsvOptions, ProfileReport};
use std::fs::File;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "datasnap-cli")]
#[command(about = "DataSnap CLI for CSV profiling and data-quality triage")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Profile a CSV file (per-column stats + null/empty counts)
    Summarize {
        /// Input CSV path; prompts interactively when omitted
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Only read this many rows (for large files)
        #[arg(short, long)]
        nrows: Option<usize>,
        #[arg(short, long, default_value = ",")]
        delimiter: char,
        /// Treat the first record as data, not column names
        #[arg(long)]
        no_header: bool,
        /// Path to save the per-column summary CSV
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print the full report as JSON instead of the terminal view
        #[arg(long)]
        json: bool,
    },
}

pub fn summarize_command(
    file: Option<PathBuf>,
    nrows: Option<usize>,
    delimiter: char,
    no_header: bool,
    output: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    if !delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character");
    }

    let path = match file {
        Some(path) => path,
        None => match prompt_for_path()? {
            Some(path) => path,
            None => {
                println!("No file provided. Exiting.");
                return Ok(());
            }
        },
    };

    info!("Profiling {}", path.display());

    let options = CsvOptions {
        delimiter: delimiter as u8,
        has_headers: !no_header,
        nrows,
        ..CsvOptions::default()
    };
    let table = read_csv(&path, &options)?;
    let report = summarize(&table);

    if json {
        println!("{}", to_json(&report)?);
    } else {
        render_report(&report);
    }

    if let Some(output_path) = output {
        let file = File::create(&output_path)?;
        write_csv(&report, file)?;
        info!("Per-column summary saved to {}", output_path.display());
    }

    Ok(())
}

/// Prompts for a CSV path on stdin until an existing file is given.
///
/// Returns `None` on EOF or when the user enters `q`, `quit`, or nothing.
fn prompt_for_path() -> Result<Option<PathBuf>> {
    use std::io::{self, BufRead, Write};

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("Enter path to CSV file (or 'q' to quit): ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let input = line.trim();
        if input.is_empty() || input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit")
        {
            return Ok(None);
        }

        let path = PathBuf::from(input);
        if path.is_file() {
            return Ok(Some(path));
        }
        println!("File not found: {}. Try again.", input);
    }
}

fn render_report(report: &ProfileReport) {
    let meta = &report.metadata;

    println!("📊 File Summary");
    println!("===============");
    println!("Total rows: {}", meta.row_count);
    println!("Total columns: {}", meta.column_count);
    println!("Rows with ANY null/empty: {}", meta.rows_with_missing);
    println!("Rows with ALL null/empty: {}", meta.rows_all_missing);
    println!();
    println!("📋 Per-Column Summary");
    println!("=====================");

    for summary in &report.columns {
        println!(
            "{} [{}] count={} null={} empty={} unique={}",
            summary.name,
            summary.dtype,
            summary.count,
            summary.null_count,
            summary.empty_count,
            summary.unique_count
        );
        match summary.dtype {
            ColumnKind::Numeric => println!(
                "    mean={} median={} std={} min={} max={}",
                fmt_stat(summary.mean),
                fmt_stat(summary.median),
                fmt_stat(summary.std),
                fmt_stat(summary.min),
                fmt_stat(summary.max)
            ),
            ColumnKind::Categorical => println!(
                "    top={} freq={}",
                summary.top_value.as_deref().unwrap_or("-"),
                summary
                    .top_freq
                    .map(|f| f.to_string())
                    .unwrap_or_else(|| "-".to_string())
            ),
        }
    }
}

fn fmt_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.4}", v),
        None => "-".to_string(),
    }
}
