//! Detection of overlong functions.

use crate::syntax::ModuleFacts;

use super::{CheckName, Finding, Severity};

/// Maximum acceptable function length in lines.
pub const MAX_FUNCTION_LINES: usize = 50;

const SUGGESTION: &str =
    "Consider breaking this function into smaller, more focused functions";

/// Flag functions strictly longer than [`MAX_FUNCTION_LINES`].
pub fn check_function_length(facts: &ModuleFacts) -> Vec<Finding> {
    let mut findings = Vec::new();

    for func in &facts.functions {
        let length = func.length();
        if length > MAX_FUNCTION_LINES {
            findings.push(Finding::new(
                CheckName::FunctionLength,
                Severity::Warning,
                func.span.start_line,
                format!(
                    "Function '{}' is {} lines long (max {} recommended)",
                    func.name, length, MAX_FUNCTION_LINES
                ),
                SUGGESTION,
            ));
        }
    }

    findings
}
