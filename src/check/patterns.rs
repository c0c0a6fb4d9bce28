//! Static pattern tables shared by the checkers.
//!
//! Detection rules are data, not code: adding a secret category or a risky
//! call marker is an edit to one of the tables below.

use lazy_static::lazy_static;
use regex::Regex;

/// A secret-assignment pattern paired with its human label.
pub struct SecretPattern {
    pub regex: Regex,
    pub label: &'static str,
}

lazy_static! {
    /// Ordered secret-assignment patterns, matched case-insensitively.
    ///
    /// Deliberately conservative: false positives are tolerated because
    /// leaked credentials are far more expensive than a noisy review.
    pub static ref SECRET_PATTERNS: Vec<SecretPattern> = vec![
        SecretPattern {
            regex: Regex::new(r#"(?i)api_key\s*=\s*["'][^"']{10,}["']"#).unwrap(),
            label: "API key",
        },
        SecretPattern {
            regex: Regex::new(r#"(?i)password\s*=\s*["'][^"']{3,}["']"#).unwrap(),
            label: "Password",
        },
        SecretPattern {
            regex: Regex::new(r#"(?i)secret\s*=\s*["'][^"']{10,}["']"#).unwrap(),
            label: "Secret",
        },
        SecretPattern {
            regex: Regex::new(r#"(?i)token\s*=\s*["'][^"']{10,}["']"#).unwrap(),
            label: "Token",
        },
        SecretPattern {
            regex: Regex::new(r#"(?i)key\s*=\s*["'][^"']{20,}["']"#).unwrap(),
            label: "Key",
        },
        SecretPattern {
            regex: Regex::new(r#"["'][A-Za-z0-9]{32,}["']"#).unwrap(),
            label: "Potential secret string",
        },
    ];

    /// snake_case identifier pattern shared by the naming checks.
    pub static ref SNAKE_CASE: Regex = Regex::new(r"^[a-z][a-z0-9_]*$").unwrap();
}

/// Substrings that mark a line as an environment-variable lookup.
/// Lines using these idioms are never flagged by the secrets scan.
pub const ENV_LOOKUP_MARKERS: &[&str] = &["os.getenv", "os.environ"];

/// Call substrings that conventionally warrant a try/except wrapper:
/// database access, file I/O, outbound HTTP, JSON parsing, numeric coercion.
pub const RISKY_MARKERS: &[&str] = &[
    "db.session",
    "open(",
    "requests.",
    "urllib.",
    "json.loads",
    "int(",
    "float(",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_patterns_compile() {
        assert_eq!(SECRET_PATTERNS.len(), 6);
    }

    #[test]
    fn test_password_pattern_matches() {
        let p = &SECRET_PATTERNS[1];
        assert_eq!(p.label, "Password");
        assert!(p.regex.is_match(r#"password = "xyz""#));
        assert!(p.regex.is_match(r#"PASSWORD = 'hunter22'"#));
        // Fewer than 3 chars is below the threshold
        assert!(!p.regex.is_match(r#"password = "ab""#));
    }

    #[test]
    fn test_generic_pattern_requires_32_chars() {
        let p = SECRET_PATTERNS.last().unwrap();
        assert!(p.regex.is_match(r#"x = "abcdefghijklmnopqrstuvwxyz123456""#));
        assert!(!p.regex.is_match(r#"x = "short""#));
    }

    #[test]
    fn test_snake_case_pattern() {
        assert!(SNAKE_CASE.is_match("my_function"));
        assert!(SNAKE_CASE.is_match("f2"));
        assert!(!SNAKE_CASE.is_match("myFunction"));
        assert!(!SNAKE_CASE.is_match("_private"));
        assert!(!SNAKE_CASE.is_match("MAX_RETRIES"));
    }
}
