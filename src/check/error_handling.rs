//! Detection of risky operations without error handling.

use crate::syntax::ModuleFacts;

use super::patterns::RISKY_MARKERS;
use super::{CheckName, Finding, Severity};

const SUGGESTION: &str =
    "Add try/except blocks around database operations, file I/O, or external API calls";

/// Flag functions that perform risky operations with no try construct
/// anywhere in their subtree.
///
/// Functions with no risky markers are never flagged; the check targets
/// risk, not blanket try/except enforcement.
pub fn check_error_handling(facts: &ModuleFacts) -> Vec<Finding> {
    let mut findings = Vec::new();

    for func in &facts.functions {
        let has_risky_ops = RISKY_MARKERS.iter().any(|m| func.text.contains(m));
        if has_risky_ops && !func.body.has_try {
            findings.push(Finding::new(
                CheckName::ErrorHandling,
                Severity::Warning,
                func.span.start_line,
                format!(
                    "Function '{}' performs risky operations without error handling",
                    func.name
                ),
                SUGGESTION,
            ));
        }
    }

    findings
}
