//! Transformer stage: turn data lines into report lines.
//!
//! The first line is a header and is skipped without being looked at. Every
//! other line is parsed on its own; a line that fails to parse is dropped
//! with a diagnostic notice and the rest of the input is unaffected.

use crate::record::EmployeeRecord;
use tracing::{debug, warn};

/// Result of running the Transformer over one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformSummary {
    /// Report lines, in input order.
    pub lines: Vec<String>,
    /// Number of lines after the header.
    pub data_lines: usize,
    /// Number of data lines dropped as malformed.
    pub skipped: usize,
}

/// Build the report from the loaded input lines.
pub fn transform<S: AsRef<str>>(input: &[S]) -> TransformSummary {
    let mut summary = TransformSummary::default();

    for (index, line) in input.iter().enumerate().skip(1) {
        summary.data_lines += 1;
        match EmployeeRecord::parse(line.as_ref()) {
            Ok(record) => {
                if let Some(report_line) = record.report_line() {
                    summary.lines.push(report_line);
                }
            }
            Err(_) => {
                summary.skipped += 1;
                debug!(line = index + 1, "malformed record");
                warn!("Skipped a bad line");
            }
        }
    }

    summary
}
