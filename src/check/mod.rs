//! The review rule engine: five independent checkers and their runner.

mod documentation;
mod error_handling;
mod function_length;
mod naming;
pub mod patterns;
mod secrets;
mod types;

pub use documentation::{check_documentation, MIN_DOCUMENTED_STATEMENTS};
pub use error_handling::check_error_handling;
pub use function_length::{check_function_length, MAX_FUNCTION_LINES};
pub use naming::check_naming_conventions;
pub use secrets::check_hardcoded_secrets;
pub use types::{count_severity, has_errors, CheckName, Finding, Severity};

use std::path::Path;

use crate::config::ReviewConfig;
use crate::syntax;

/// Runs the checkers against one file at a time.
///
/// A `Reviewer` holds no per-file state and may be reused across files;
/// every call returns a fresh finding list.
pub struct Reviewer {
    config: ReviewConfig,
}

impl Reviewer {
    /// Create a reviewer with every check enabled.
    pub fn new() -> Self {
        Self {
            config: ReviewConfig::default(),
        }
    }

    /// Create a reviewer honoring a config's check enables.
    pub fn with_config(config: ReviewConfig) -> Self {
        Self { config }
    }

    /// Review one file and return its findings in checker order:
    /// secrets, error handling, function length, documentation, naming.
    ///
    /// Files without the recognized source extension yield an empty list.
    /// When the source does not parse, tree-based checks are skipped and
    /// the text-based secrets scan still runs.
    pub fn review_file(&self, path: &str, content: &str) -> Vec<Finding> {
        let mut findings = Vec::new();

        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        if syntax::for_extension(ext).is_none() {
            return findings;
        }

        if self.config.is_check_enabled(CheckName::HardcodedSecrets) {
            findings.extend(check_hardcoded_secrets(content));
        }

        if let Ok(facts) = syntax::parse_module(content) {
            if self.config.is_check_enabled(CheckName::ErrorHandling) {
                findings.extend(check_error_handling(&facts));
            }
            if self.config.is_check_enabled(CheckName::FunctionLength) {
                findings.extend(check_function_length(&facts));
            }
            if self.config.is_check_enabled(CheckName::Documentation) {
                findings.extend(check_documentation(&facts));
            }
            if self.config.is_check_enabled(CheckName::NamingConventions) {
                findings.extend(check_naming_conventions(&facts));
            }
        }

        findings
    }
}

impl Default for Reviewer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAD_SOURCE: &str = r#"
api_key = "sk-1234567890abcdef"

def saveUserData(user_data):
    db.session.add(user_data)
    db.session.commit()
    return user_data.id
"#;

    #[test]
    fn test_review_file_runs_checks_in_order() {
        let reviewer = Reviewer::new();
        let findings = reviewer.review_file("app.py", BAD_SOURCE);

        let checks: Vec<CheckName> = findings.iter().map(|f| f.check).collect();
        assert_eq!(
            checks,
            vec![
                CheckName::HardcodedSecrets,
                CheckName::ErrorHandling,
                CheckName::Documentation,
                CheckName::NamingConventions,
            ]
        );
    }

    #[test]
    fn test_non_python_path_yields_nothing() {
        let reviewer = Reviewer::new();
        assert!(reviewer.review_file("main.go", BAD_SOURCE).is_empty());
        assert!(reviewer.review_file("README", BAD_SOURCE).is_empty());
    }

    #[test]
    fn test_repeated_calls_are_deterministic() {
        let reviewer = Reviewer::new();
        let first = reviewer.review_file("app.py", BAD_SOURCE);
        let second = reviewer.review_file("app.py", BAD_SOURCE);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.check, b.check);
            assert_eq!(a.line, b.line);
            assert_eq!(a.message, b.message);
        }
    }

    #[test]
    fn test_no_cross_file_leakage() {
        let reviewer = Reviewer::new();
        let dirty = reviewer.review_file("app.py", BAD_SOURCE);
        assert!(!dirty.is_empty());
        let clean = reviewer.review_file("ok.py", "def tiny():\n    return 1\n");
        assert!(clean.is_empty());
    }

    #[test]
    fn test_malformed_source_still_scans_secrets() {
        let source = "password = \"hunter22\"\ndef broken(:\n    x = \"unterminated\n";
        let reviewer = Reviewer::new();
        let findings = reviewer.review_file("bad.py", source);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].check, CheckName::HardcodedSecrets);
        assert_eq!(findings[0].line, 1);
    }

    #[test]
    fn test_disabled_check_is_skipped() {
        let mut config = crate::config::ReviewConfig::default();
        config.checks.insert(CheckName::HardcodedSecrets, false);
        let reviewer = Reviewer::with_config(config);
        let findings = reviewer.review_file("app.py", BAD_SOURCE);
        assert!(findings
            .iter()
            .all(|f| f.check != CheckName::HardcodedSecrets));
        assert!(!findings.is_empty());
    }
}
