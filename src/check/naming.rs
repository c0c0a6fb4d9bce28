//! Naming convention checks for functions and simple assignment targets.

use crate::syntax::ModuleFacts;

use super::patterns::SNAKE_CASE;
use super::{CheckName, Finding, Severity};

const FUNCTION_SUGGESTION: &str =
    "Rename to follow snake_case convention (e.g., 'my_function')";
const VARIABLE_SUGGESTION: &str =
    "Use snake_case for variables (e.g., 'my_variable') or UPPER_CASE for constants";

/// Whether a name is fully upper-case (constant convention): at least one
/// uppercase letter and no lowercase letters.
fn is_upper_case(name: &str) -> bool {
    name.chars().any(|c| c.is_uppercase()) && !name.chars().any(|c| c.is_lowercase())
}

/// Flag function names and simple assignment targets that do not follow
/// snake_case. Dunder function names are exempt; upper-case assignment
/// targets are treated as constants.
pub fn check_naming_conventions(facts: &ModuleFacts) -> Vec<Finding> {
    let mut findings = Vec::new();

    for func in &facts.functions {
        if !SNAKE_CASE.is_match(&func.name) && !func.is_dunder() {
            findings.push(Finding::new(
                CheckName::NamingConventions,
                Severity::Info,
                func.span.start_line,
                format!("Function '{}' should use snake_case naming", func.name),
                FUNCTION_SUGGESTION,
            ));
        }
    }

    for assign in &facts.assignments {
        if !SNAKE_CASE.is_match(&assign.target) && !is_upper_case(&assign.target) {
            findings.push(Finding::new(
                CheckName::NamingConventions,
                Severity::Info,
                assign.line,
                format!("Variable '{}' should use snake_case naming", assign.target),
                VARIABLE_SUGGESTION,
            ));
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::parse_module;

    #[test]
    fn test_camel_case_function_flagged() {
        let facts = parse_module("def myFunction():\n    pass\n").unwrap();
        let findings = check_naming_conventions(&facts);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Info);
        assert!(findings[0].message.contains("myFunction"));
    }

    #[test]
    fn test_snake_case_function_clean() {
        let facts = parse_module("def my_function():\n    pass\n").unwrap();
        assert!(check_naming_conventions(&facts).is_empty());
    }

    #[test]
    fn test_dunder_function_exempt() {
        let facts = parse_module("def __init__(self):\n    pass\n").unwrap();
        assert!(check_naming_conventions(&facts).is_empty());
    }

    #[test]
    fn test_single_underscore_function_still_flagged() {
        // _helper fails the pattern (leading underscore) and is not a dunder
        let facts = parse_module("def _helper():\n    pass\n").unwrap();
        assert_eq!(check_naming_conventions(&facts).len(), 1);
    }

    #[test]
    fn test_variable_targets() {
        let source = "userName = 1\nmy_var = 2\nMAX_RETRIES = 3\n";
        let facts = parse_module(source).unwrap();
        let findings = check_naming_conventions(&facts);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("userName"));
        assert_eq!(findings[0].line, 1);
    }

    #[test]
    fn test_is_upper_case() {
        assert!(is_upper_case("MAX_RETRIES"));
        assert!(is_upper_case("X1"));
        assert!(!is_upper_case("Mixed"));
        assert!(!is_upper_case("_"));
        assert!(!is_upper_case("lower"));
    }

    #[test]
    fn test_function_findings_precede_variable_findings() {
        let source = "badVar = 1\n\ndef badFunc():\n    pass\n";
        let facts = parse_module(source).unwrap();
        let findings = check_naming_conventions(&facts);
        assert_eq!(findings.len(), 2);
        assert!(findings[0].message.contains("badFunc"));
        assert!(findings[1].message.contains("badVar"));
    }
}
