//! covtab CLI
//!
//! Reads a textual gcov coverage report from standard input (or a file
//! given on the command line) and prints an aligned per-file and
//! per-function summary table.

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use covtab::aggregator::summarize;
use covtab::output::write_table;

/// Summarize a textual gcov coverage report as an aligned table
#[derive(Parser, Debug)]
#[command(name = "covtab")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Coverage report to read instead of standard input
    report: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // The whole report is buffered before any output is produced
    let input = read_report(cli.report.as_deref())?;
    let summaries = summarize(input.lines())?;
    write_table(&summaries, io::stdout().lock())?;

    Ok(())
}

/// Read the whole report, from a file if one was given
fn read_report(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => io::read_to_string(io::stdin().lock()).context("failed to read standard input"),
    }
}
