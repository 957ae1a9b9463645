//! # bonus-report
//!
//! Reads a comma-delimited file of employee records and writes a report of
//! everyone who earns a bonus.
//!
//! ## Overview
//!
//! The run is three stages, each executed once:
//! - **Loader**: read the input file into memory
//! - **Transformer**: skip the header, parse each data line, keep the
//!   employees whose score is strictly above 4.5
//! - **Writer**: write one report line per qualifying employee
//!
//! A data line that cannot be parsed is dropped with a diagnostic notice.
//! Failing to read the input or write the report ends the run.
//!
//! ## Example
//!
//! ```
//! use bonus_report::transform;
//!
//! let input = [
//!     "id,name,dept,score",
//!     "1,Alice,Eng,4.8",
//!     "2,Bob,Sales,4.2",
//!     "3,Carol,Eng,4.5",
//!     "4,Dan,Eng,bad",
//! ];
//!
//! let summary = transform(&input);
//! assert_eq!(summary.lines, vec!["ID: 1, Name: Alice gets a bonus of $5000"]);
//! assert_eq!(summary.skipped, 1);
//! ```

pub mod error;
pub mod loader;
pub mod pipeline;
pub mod record;
pub mod transform;
pub mod writer;

pub use error::{MalformedRecord, ReportError};
pub use loader::load_lines;
pub use pipeline::{ReportConfig, RunSummary, run};
pub use record::{BONUS_AMOUNT, BONUS_THRESHOLD, DELIMITER, EmployeeRecord};
pub use transform::{TransformSummary, transform};
pub use writer::{DEFAULT_OUTPUT_PATH, write_report};
