//! Loader → Transformer → Writer, run once.

use crate::error::ReportError;
use crate::loader::load_lines;
use crate::transform::transform;
use crate::writer::{DEFAULT_OUTPUT_PATH, write_report};
use std::path::PathBuf;
use tracing::debug;

/// Where to read records from and where to write the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ReportConfig {
    /// Read from `input` and write to [`DEFAULT_OUTPUT_PATH`] in the
    /// working directory.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}

/// Counts from a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub data_lines: usize,
    pub report_lines: usize,
    pub skipped: usize,
    pub output: PathBuf,
}

/// Run the whole pipeline.
///
/// Read, missing-header and write failures are returned as-is; malformed records are
/// skipped inside the Transformer and only show up in the counts.
pub fn run(config: &ReportConfig) -> Result<RunSummary, ReportError> {
    let lines = load_lines(&config.input)?;
    let summary = transform(&lines);
    write_report(&summary.lines, &config.output)?;

    debug!(
        input = %config.input.display(),
        output = %config.output.display(),
        data_lines = summary.data_lines,
        report_lines = summary.lines.len(),
        skipped = summary.skipped,
        "report complete"
    );

    Ok(RunSummary {
        data_lines: summary.data_lines,
        report_lines: summary.lines.len(),
        skipped: summary.skipped,
        output: config.output.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_config_defaults_to_bonus_report_txt() {
        let config = ReportConfig::new("employees.csv");
        assert_eq!(config.input, PathBuf::from("employees.csv"));
        assert_eq!(config.output, PathBuf::from("bonus_report.txt"));
    }

    #[test]
    fn test_config_with_output() {
        let config = ReportConfig::new("in.csv").with_output("out/report.txt");
        assert_eq!(config.output, PathBuf::from("out/report.txt"));
    }

    #[test]
    fn test_run_counts() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("employees.csv");
        let output = dir.path().join("report.txt");
        fs::write(
            &input,
            "id,name,dept,score\n1,Alice,Eng,4.8\n2,Bob,Sales,4.2\n3,Carol,Eng,4.5\n4,Dan,Eng,bad\n",
        )
        .unwrap();

        let summary = run(&ReportConfig::new(&input).with_output(&output)).unwrap();
        assert_eq!(
            summary,
            RunSummary {
                data_lines: 4,
                report_lines: 1,
                skipped: 1,
                output: output.clone(),
            }
        );
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "ID: 1, Name: Alice gets a bonus of $5000\n"
        );
    }

    #[test]
    fn test_run_empty_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("empty.csv");
        let output = dir.path().join("report.txt");
        fs::write(&input, "").unwrap();

        let config = ReportConfig::new(&input).with_output(&output);
        assert!(matches!(run(&config), Err(ReportError::MissingHeader { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn test_run_carriage_return_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("employees.csv");
        let output = dir.path().join("report.txt");
        fs::write(&input, "id,name,dept,score\r1,Alice,Eng,4.8\r").unwrap();

        run(&ReportConfig::new(&input).with_output(&output)).unwrap();
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "ID: 1, Name: Alice gets a bonus of $5000\n"
        );
    }

    #[test]
    fn test_run_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.txt");
        let config = ReportConfig::new(dir.path().join("missing.csv")).with_output(&output);

        assert!(matches!(run(&config), Err(ReportError::Read { .. })));
        assert!(!output.exists());
    }
}
