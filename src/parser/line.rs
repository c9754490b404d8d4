//! Line classifier for gcov text reports.
//!
//! Each input line is tested against the six recognized grammars in a
//! fixed order; the first match wins. Anything else classifies as
//! `Other` and is discarded downstream without error.

use crate::utils::error::ParseError;
use log::trace;

/// Which of the four percentage metrics a line carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    LinesExecuted,
    BranchesExecuted,
    TakenAtLeastOnce,
    CallsExecuted,
}

/// One classified input line
#[derive(Debug, Clone, PartialEq)]
pub enum LineEvent {
    /// `File '<name>'` - opens a new file scope
    FileHeader(String),

    /// `Function '<name>'` - opens a new function scope
    FunctionHeader(String),

    /// `<label>:<pct>% of <n>` - updates the current scope
    Metric(MetricKind, f64),

    /// Anything else, including blank lines
    Other,
}

/// Metric line prefixes, in recognition order
const METRIC_PREFIXES: &[(&str, MetricKind)] = &[
    ("Lines executed:", MetricKind::LinesExecuted),
    ("Branches executed:", MetricKind::BranchesExecuted),
    ("Taken at least once:", MetricKind::TakenAtLeastOnce),
    ("Calls executed:", MetricKind::CallsExecuted),
];

/// Classify a single raw input line.
///
/// Leading and trailing whitespace is ignored. Patterns are checked in
/// listed order (file header, function header, then the four metrics).
///
/// # Errors
/// * `ParseError::MalformedPercentage` - a metric prefix matched but the
///   percentage text does not parse as a float
pub fn classify(raw: &str) -> Result<LineEvent, ParseError> {
    let line = raw.trim();

    if let Some(name) = capture_quoted(line, "File '") {
        return Ok(LineEvent::FileHeader(name.to_string()));
    }

    if let Some(name) = capture_quoted(line, "Function '") {
        return Ok(LineEvent::FunctionHeader(name.to_string()));
    }

    for (prefix, kind) in METRIC_PREFIXES {
        let Some(rest) = line.strip_prefix(prefix) else {
            continue;
        };
        // A metric prefix without a "% of " tail is not a metric line.
        let Some(end) = rest.rfind("% of ") else {
            break;
        };
        let pct: f64 = rest[..end]
            .trim()
            .parse()
            .map_err(|_| ParseError::MalformedPercentage { line: line.to_string() })?;
        return Ok(LineEvent::Metric(*kind, pct));
    }

    trace!("Ignoring unrecognized line: {line:?}");
    Ok(LineEvent::Other)
}

/// Capture the scope name from a header line.
///
/// The name is everything between the opening quote (part of `prefix`)
/// and the last quote on the line, so names containing quotes survive.
/// A header with no closing quote captures nothing.
fn capture_quoted<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(prefix)?;
    let end = rest.rfind('\'')?;
    Some(&rest[..end])
}
