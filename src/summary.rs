//! Run-level aggregate statistics.
//!
//! Derived by filtering the finding lists; consumers use them for exit
//! codes and report footers.

use serde::{Deserialize, Serialize};

use crate::check::{count_severity, Finding, Severity};

/// Aggregate counts for one review run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewSummary {
    /// Number of files reviewed (findings or not).
    pub files_reviewed: usize,
    pub total_findings: usize,
    pub errors: usize,
    pub warnings: usize,
    pub info: usize,
}

impl ReviewSummary {
    /// Build a summary from per-file results.
    pub fn from_reports(reports: &[(String, Vec<Finding>)]) -> Self {
        let mut summary = Self {
            files_reviewed: reports.len(),
            ..Default::default()
        };

        for (_, findings) in reports {
            summary.total_findings += findings.len();
            summary.errors += count_severity(findings, Severity::Error);
            summary.warnings += count_severity(findings, Severity::Warning);
            summary.info += count_severity(findings, Severity::Info);
        }

        summary
    }

    /// Whether any error-severity finding was produced.
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}
