//! Detection of missing docstrings.

use crate::syntax::ModuleFacts;

use super::{CheckName, Finding, Severity};

/// Bodies with fewer statements than this are considered trivial and exempt.
pub const MIN_DOCUMENTED_STATEMENTS: usize = 3;

const SUGGESTION: &str =
    "Add a docstring describing what the function does, its parameters, and return value";

/// Flag public, non-trivial functions whose body does not start with a
/// docstring. Missing documentation never blocks anything: always info.
pub fn check_documentation(facts: &ModuleFacts) -> Vec<Finding> {
    let mut findings = Vec::new();

    for func in &facts.functions {
        if func.is_private() || func.body.statement_count < MIN_DOCUMENTED_STATEMENTS {
            continue;
        }

        if !func.body.has_docstring {
            findings.push(Finding::new(
                CheckName::Documentation,
                Severity::Info,
                func.span.start_line,
                format!("Function '{}' is missing a docstring", func.name),
                SUGGESTION,
            ));
        }
    }

    findings
}
