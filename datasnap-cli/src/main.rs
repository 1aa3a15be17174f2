mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Summarize {
            file,
            nrows,
            delimiter,
            no_header,
            output,
            json,
        } => cli::summarize_command(file, nrows, delimiter, no_header, output, json),
    }
}
