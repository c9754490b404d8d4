//! Error types for the entire application.
//!
//! We use `thiserror` for the library error type, and `anyhow` for
//! application-level error propagation in main.rs.

use thiserror::Error;

/// Errors that can occur while parsing a coverage report.
///
/// Unrecognized lines are not errors; they are silently skipped. These
/// variants cover genuine input inconsistencies that abort the run.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("malformed percentage in line: {line:?}")]
    MalformedPercentage { line: String },

    #[error("metric line before any File/Function header: {line:?}")]
    MetricWithoutScope { line: String },
}
