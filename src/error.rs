//! Error types for the report pipeline.

use std::io;
use std::path::PathBuf;

/// A failure that ends the run.
///
/// Raised only by the I/O stages. Nothing in the library recovers from it;
/// the binary reports it and exits.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("cannot read input file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write report file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("input file '{}' is empty: no header line", .path.display())]
    MissingHeader { path: PathBuf },
}

/// A data line that could not be turned into a record.
///
/// Missing fields and unparseable scores are treated the same way, so the
/// error carries no kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("malformed record")]
pub struct MalformedRecord;
