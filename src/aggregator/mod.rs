//! Fold classified report lines into ordered summary records.
//!
//! The "current scope" is the most recently opened record; metric lines
//! always update it. Records keep the order their headers appeared in,
//! which mirrors the report structure (a file followed by its functions).

pub mod summary;

// Re-export main types
pub use summary::{ScopeKind, Summary};

use crate::parser::{classify, LineEvent};
use crate::utils::error::ParseError;
use log::debug;

/// Build the ordered summary sequence from raw report lines.
///
/// # Errors
/// * `ParseError::MalformedPercentage` - unparseable percentage text
/// * `ParseError::MetricWithoutScope` - a metric line arrived before any
///   `File '...'` or `Function '...'` header
pub fn summarize<I, S>(lines: I) -> Result<Vec<Summary>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut summaries: Vec<Summary> = Vec::new();

    for raw in lines {
        let line = raw.as_ref();
        match classify(line)? {
            LineEvent::FileHeader(name) => {
                summaries.push(Summary::new(ScopeKind::File, name));
            }
            LineEvent::FunctionHeader(name) => {
                summaries.push(Summary::new(ScopeKind::Function, name));
            }
            LineEvent::Metric(kind, pct) => {
                let current =
                    summaries
                        .last_mut()
                        .ok_or_else(|| ParseError::MetricWithoutScope {
                            line: line.trim().to_string(),
                        })?;
                current.set_metric(kind, pct);
            }
            LineEvent::Other => {}
        }
    }

    debug!("Aggregated {} coverage scopes", summaries.len());
    Ok(summaries)
}
