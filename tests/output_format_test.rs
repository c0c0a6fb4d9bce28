//! Tests for the rendered output formats.
//!
//! These tests verify the Markdown review comment and the JSON report
//! structure against the fixtures in testdata/.

use std::path::PathBuf;

use pyreview::report::{build_json_report, FileReport, JsonReport};
use pyreview::summary::ReviewSummary;
use pyreview::{format_review_comment, Reviewer};

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

/// Review every fixture and return per-file reports in path order.
fn run_reports() -> Vec<FileReport> {
    let reviewer = Reviewer::new();

    let mut paths: Vec<PathBuf> = std::fs::read_dir(testdata_path())
        .expect("should read testdata dir")
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().map(|e| e == "py").unwrap_or(false))
        .collect();
    paths.sort();

    paths
        .into_iter()
        .map(|p| {
            let content = std::fs::read_to_string(&p).expect("should read fixture");
            let path_str = p.to_string_lossy().to_string();
            let findings = reviewer.review_file(&path_str, &content);
            (path_str, findings)
        })
        .collect()
}

fn run_and_get_json() -> JsonReport {
    let reports = run_reports();
    let summary = ReviewSummary::from_reports(&reports);
    build_json_report(&reports, &summary)
}

#[test]
fn test_json_report_structure() {
    let report = run_and_get_json();

    assert!(!report.version.is_empty(), "version should not be empty");
    assert_eq!(report.files_reviewed, 3);
    assert!(report.total_findings > 0, "fixtures should produce findings");
    assert_eq!(
        report.total_findings,
        report.findings_by_severity.error
            + report.findings_by_severity.warning
            + report.findings_by_severity.info
    );
    assert_eq!(report.findings.len(), report.total_findings);
}

#[test]
fn test_json_findings_format() {
    let report = run_and_get_json();

    let known_checks = [
        "hardcoded_secrets",
        "error_handling",
        "function_length",
        "documentation",
        "naming_conventions",
    ];

    for f in &report.findings {
        assert!(!f.file.is_empty(), "file should not be empty");
        assert!(!f.message.is_empty(), "message should not be empty");
        assert!(f.line >= 1, "line numbers are 1-based");
        assert!(
            f.severity == "error" || f.severity == "warning" || f.severity == "info",
            "severity should be error/warning/info, got {}",
            f.severity
        );
        assert!(
            known_checks.contains(&f.check.as_str()),
            "unknown check: {}",
            f.check
        );
    }
}

#[test]
fn test_json_serialization_roundtrip() {
    let report = run_and_get_json();

    let json = serde_json::to_string_pretty(&report).expect("should serialize to JSON");
    let parsed: JsonReport = serde_json::from_str(&json).expect("should deserialize from JSON");

    assert_eq!(parsed.files_reviewed, report.files_reviewed);
    assert_eq!(parsed.total_findings, report.total_findings);
    assert_eq!(parsed.findings.len(), report.findings.len());
}

#[test]
fn test_json_field_names() {
    let report = run_and_get_json();
    let json = serde_json::to_string(&report).expect("should serialize");

    assert!(json.contains("\"version\""));
    assert!(json.contains("\"files_reviewed\""));
    assert!(json.contains("\"total_findings\""));
    assert!(json.contains("\"findings_by_severity\""));
    assert!(json.contains("\"error\""));
    assert!(json.contains("\"warning\""));
    assert!(json.contains("\"info\""));

    // Finding fields
    assert!(json.contains("\"file\""));
    assert!(json.contains("\"check\""));
    assert!(json.contains("\"severity\""));
    assert!(json.contains("\"line\""));
    assert!(json.contains("\"message\""));
}

#[test]
fn test_markdown_comment_for_dirty_file() {
    let reports = run_reports();
    let (path, findings) = reports
        .iter()
        .find(|(p, _)| p.ends_with("bad_code.py"))
        .expect("bad_code.py should be reviewed");

    let comment = format_review_comment(findings, path);

    assert!(comment.contains(&format!("## 🔍 Code Review for `{}`", path)));
    assert!(comment.contains("### ❌ Errors (Must Fix)"));
    assert!(comment.contains("### ⚠️ Warnings (Should Fix)"));
    assert!(comment.contains("### ℹ️ Suggestions (Nice to Have)"));

    // Every finding appears exactly once with its line number
    for f in findings {
        assert_eq!(
            comment.matches(f.message.as_str()).count(),
            1,
            "message should render once: {}",
            f.message
        );
        assert!(comment.contains(&format!("**Line {}**", f.line)));
    }
}

#[test]
fn test_markdown_comment_for_clean_file() {
    let reports = run_reports();
    let (path, findings) = reports
        .iter()
        .find(|(p, _)| p.ends_with("clean.py"))
        .expect("clean.py should be reviewed");

    assert!(findings.is_empty());
    let comment = format_review_comment(findings, path);
    assert!(comment.contains(path));
    assert!(comment.contains("All checks passed!"));
}
