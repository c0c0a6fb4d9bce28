//! Core types for review findings.

use serde::{Deserialize, Serialize};

/// Severity levels for findings.
///
/// Ordered by display priority: errors first, then warnings, then info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// All severities in display order.
    pub const ALL: [Severity; 3] = [Severity::Error, Severity::Warning, Severity::Info];
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            _ => Err(format!("unknown severity: {}", s)),
        }
    }
}

/// The five review checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckName {
    #[serde(rename = "hardcoded_secrets")]
    HardcodedSecrets,
    #[serde(rename = "error_handling")]
    ErrorHandling,
    #[serde(rename = "function_length")]
    FunctionLength,
    #[serde(rename = "documentation")]
    Documentation,
    #[serde(rename = "naming_conventions")]
    NamingConventions,
}

impl CheckName {
    /// All checks in execution order.
    pub const ALL: [CheckName; 5] = [
        CheckName::HardcodedSecrets,
        CheckName::ErrorHandling,
        CheckName::FunctionLength,
        CheckName::Documentation,
        CheckName::NamingConventions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckName::HardcodedSecrets => "hardcoded_secrets",
            CheckName::ErrorHandling => "error_handling",
            CheckName::FunctionLength => "function_length",
            CheckName::Documentation => "documentation",
            CheckName::NamingConventions => "naming_conventions",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "hardcoded_secrets" => Some(CheckName::HardcodedSecrets),
            "error_handling" => Some(CheckName::ErrorHandling),
            "function_length" => Some(CheckName::FunctionLength),
            "documentation" => Some(CheckName::Documentation),
            "naming_conventions" => Some(CheckName::NamingConventions),
            _ => None,
        }
    }
}

impl std::fmt::Display for CheckName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single review finding.
///
/// Findings are value records: created once by a checker, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub check: CheckName,
    pub severity: Severity,
    /// 1-based source line. Function-definition line for tree-based checks,
    /// match line for text-based checks.
    pub line: usize,
    pub message: String,
    /// Remediation text; empty string means no suggestion.
    pub suggestion: String,
}

impl Finding {
    pub fn new(
        check: CheckName,
        severity: Severity,
        line: usize,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            check,
            severity,
            line,
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }

    pub fn has_suggestion(&self) -> bool {
        !self.suggestion.is_empty()
    }
}

/// Check if any finding in a slice carries error severity.
pub fn has_errors(findings: &[Finding]) -> bool {
    findings.iter().any(|f| f.severity == Severity::Error)
}

/// Count findings of a given severity.
pub fn count_severity(findings: &[Finding], severity: Severity) -> usize {
    findings.iter().filter(|f| f.severity == severity).count()
}
