//! Writer stage: persist the report.

use crate::error::ReportError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Report file name used when no output path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "bonus_report.txt";

/// Write `lines` to `path`, one per line, replacing any existing file.
///
/// An empty report still creates an empty file. A failure part way through
/// leaves whatever was already written in place.
pub fn write_report<S: AsRef<str>>(lines: &[S], path: &Path) -> Result<(), ReportError> {
    let write_err = |source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut out = BufWriter::new(File::create(path).map_err(write_err)?);
    for line in lines {
        writeln!(out, "{}", line.as_ref()).map_err(write_err)?;
    }
    out.flush().map_err(write_err)?;

    debug!(path = %path.display(), lines = lines.len(), "wrote report");
    Ok(())
}
