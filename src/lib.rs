//! covtab
//!
//! Condensed tabular summaries of textual gcov coverage reports.
//!
//! Feed the human-readable output of `gcov` through `covtab` and get one
//! aligned row per file and per function, with the lines / branches /
//! taken / calls percentages side by side.
//!
//! This crate provides the core implementation for the `covtab` CLI tool.

pub mod aggregator;
pub mod output;
pub mod parser;
pub mod utils;
