//! CLI tool to build the bonus report from an employee records file.
//!
//! Usage:
//!   bonus-report <employees.csv>
//!   bonus-report <employees.csv> -o <report.txt>
//!
//! If no output file is specified, writes `bonus_report.txt` in the
//! current directory.

use bonus_report::{DEFAULT_OUTPUT_PATH, ReportConfig, run};
use clap::Parser;
use std::process;
use tracing::Level;

/// Write a report of employees whose score earns a bonus.
#[derive(Parser)]
#[command(name = "bonus-report")]
struct Cli {
    /// Employee records file (comma-separated, first line is a header)
    input: String,

    /// Write the report to this file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: String,

    /// Show paths and record counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_level(false)
        .init();

    if cli.verbose {
        eprintln!("Input:  {}", cli.input);
        eprintln!("Output: {}", cli.output);
    }

    let config = ReportConfig::new(&cli.input).with_output(&cli.output);
    match run(&config) {
        Ok(summary) => {
            if cli.verbose {
                eprintln!(
                    "Records: {} in -> {} out ({} skipped)",
                    summary.data_lines, summary.report_lines, summary.skipped
                );
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
