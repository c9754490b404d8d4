//! Per-scope coverage summary records.

use crate::parser::MetricKind;

/// Kind of scope a summary row describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    File,
    Function,
}

impl ScopeKind {
    /// Label shown in the first table column
    pub fn label(self) -> &'static str {
        match self {
            ScopeKind::File => "file",
            ScopeKind::Function => "func",
        }
    }
}

/// Coverage percentages for one file or function.
///
/// Each metric stays `None` until its line shows up in the report;
/// "not measured" is distinct from "measured as zero" and renders
/// differently.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub kind: ScopeKind,

    /// File path or function identifier, verbatim from the header line
    pub name: String,

    pub lines_executed: Option<f64>,
    pub branches_executed: Option<f64>,
    pub taken_at_least_once: Option<f64>,
    pub calls_executed: Option<f64>,
}

impl Summary {
    /// Open a new scope with no metrics recorded yet
    pub fn new(kind: ScopeKind, name: String) -> Self {
        Self {
            kind,
            name,
            lines_executed: None,
            branches_executed: None,
            taken_at_least_once: None,
            calls_executed: None,
        }
    }

    /// Record one metric; a repeated metric line overwrites the earlier value
    pub fn set_metric(&mut self, kind: MetricKind, pct: f64) {
        match kind {
            MetricKind::LinesExecuted => self.lines_executed = Some(pct),
            MetricKind::BranchesExecuted => self.branches_executed = Some(pct),
            MetricKind::TakenAtLeastOnce => self.taken_at_least_once = Some(pct),
            MetricKind::CallsExecuted => self.calls_executed = Some(pct),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_summary_has_no_metrics() {
        let summary = Summary::new(ScopeKind::File, "a.c".to_string());
        assert!(summary.lines_executed.is_none());
        assert!(summary.branches_executed.is_none());
        assert!(summary.taken_at_least_once.is_none());
        assert!(summary.calls_executed.is_none());
    }

    #[test]
    fn test_set_metric_targets_the_right_field() {
        let mut summary = Summary::new(ScopeKind::Function, "f".to_string());
        summary.set_metric(MetricKind::BranchesExecuted, 25.0);
        assert_eq!(summary.branches_executed, Some(25.0));
        assert!(summary.lines_executed.is_none());
    }

    #[test]
    fn test_labels() {
        assert_eq!(ScopeKind::File.label(), "file");
        assert_eq!(ScopeKind::Function.label(), "func");
    }
}
