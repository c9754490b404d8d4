//! Report line classification.
//!
//! This module handles:
//! - Recognizing `File '...'` / `Function '...'` header lines
//! - Recognizing the four percentage metric lines
//! - Discarding everything else

pub mod line;

// Re-export main types
pub use line::{classify, LineEvent, MetricKind};
