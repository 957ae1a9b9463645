//! Loader stage: read the input file into memory.

use crate::error::ReportError;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read every line of `path`, header included.
///
/// `\n`, `\r\n` and a lone `\r` all end a line; terminators are removed.
/// Any I/O failure, including content that is not valid UTF-8, is returned as
/// [`ReportError::Read`]. A file with no lines at all has no header and is
/// rejected with [`ReportError::MissingHeader`].
pub fn load_lines(path: &Path) -> Result<Vec<String>, ReportError> {
    let text = fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let lines: Vec<String> = text
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(str::to_string)
        .collect();
    if lines.is_empty() {
        return Err(ReportError::MissingHeader {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), lines = lines.len(), "loaded input");
    Ok(lines)
}
