//! Table rendering for summary records.
//!
//! This module handles turning the aggregated records into the final
//! aligned text table and streaming it to a writer.

pub mod table;

// Re-export main functions
pub use table::{render_table, write_table};
