//! Detection of hardcoded secrets in raw source text.
//!
//! Line-based: runs even when the file does not parse.

use super::patterns::{ENV_LOOKUP_MARKERS, SECRET_PATTERNS};
use super::{CheckName, Finding, Severity};

const SUGGESTION: &str = "Use environment variables or config files for sensitive data";

/// Scan source lines for secret-like assignments.
///
/// Comment lines and environment-lookup lines are never flagged. Patterns
/// are independent: a line matching several categories yields a finding per
/// category.
pub fn check_hardcoded_secrets(content: &str) -> Vec<Finding> {
    let mut findings = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_number = idx + 1;

        if line.trim_start().starts_with('#') {
            continue;
        }
        if ENV_LOOKUP_MARKERS.iter().any(|m| line.contains(m)) {
            continue;
        }

        for pattern in SECRET_PATTERNS.iter() {
            if pattern.regex.is_match(line) {
                findings.push(Finding::new(
                    CheckName::HardcodedSecrets,
                    Severity::Error,
                    line_number,
                    format!(
                        "Potential hardcoded {} detected",
                        pattern.label.to_lowercase()
                    ),
                    SUGGESTION,
                ));
            }
        }
    }

    findings
}
