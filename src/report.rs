//! Output formatting for review results.
//!
//! Supports three output formats:
//! - Pretty: colored terminal output for human readability
//! - Markdown: PR-comment flavored text with severity sections
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::{Deserialize, Serialize};

use crate::check::{Finding, Severity};
use crate::summary::ReviewSummary;

/// Findings for one reviewed file.
pub type FileReport = (String, Vec<Finding>);

// =============================================================================
// Markdown Format
// =============================================================================

/// Section headers per severity, in display order.
fn severity_section(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "### ❌ Errors (Must Fix)\n",
        Severity::Warning => "### ⚠️ Warnings (Should Fix)\n",
        Severity::Info => "### ℹ️ Suggestions (Nice to Have)\n",
    }
}

/// Format one file's findings as a Markdown review comment.
///
/// Pure function: the caller decides where the text goes. An empty finding
/// list renders the all-clear line instead of empty sections.
pub fn format_review_comment(findings: &[Finding], path: &str) -> String {
    if findings.is_empty() {
        return format!("✅ **{}**: All checks passed!", path);
    }

    let mut comment = format!("## 🔍 Code Review for `{}`\n\n", path);

    for severity in Severity::ALL {
        let group: Vec<&Finding> = findings.iter().filter(|f| f.severity == severity).collect();
        if group.is_empty() {
            continue;
        }

        comment.push_str(severity_section(severity));
        for finding in group {
            comment.push_str(&format!("- **Line {}**: {}\n", finding.line, finding.message));
            if finding.has_suggestion() {
                comment.push_str(&format!("  💡 *{}*\n", finding.suggestion));
            }
        }
        comment.push('\n');
    }

    comment
}

/// Write results in Markdown format: one review comment per file with
/// findings, separated by horizontal rules.
pub fn write_markdown(reports: &[FileReport]) {
    let comments: Vec<String> = reports
        .iter()
        .filter(|(_, findings)| !findings.is_empty())
        .map(|(path, findings)| format_review_comment(findings, path))
        .collect();

    if comments.is_empty() {
        println!("✅ All files passed review!");
    } else {
        println!("{}", comments.join("\n\n---\n\n"));
    }
}

// =============================================================================
// JSON Format
// =============================================================================

/// JSON report structure.
#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub files_reviewed: usize,
    pub total_findings: usize,
    pub findings_by_severity: SeverityCounts,
    pub findings: Vec<JsonFinding>,
}

/// Per-severity finding counts.
#[derive(Serialize, Deserialize)]
pub struct SeverityCounts {
    pub error: usize,
    pub warning: usize,
    pub info: usize,
}

/// JSON finding structure.
#[derive(Serialize, Deserialize)]
pub struct JsonFinding {
    pub file: String,
    pub check: String,
    pub severity: String,
    pub line: usize,
    pub message: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub suggestion: String,
}

/// Build the JSON report from a run's per-file results.
pub fn build_json_report(reports: &[FileReport], summary: &ReviewSummary) -> JsonReport {
    let findings: Vec<JsonFinding> = reports
        .iter()
        .flat_map(|(path, findings)| {
            findings.iter().map(move |f| JsonFinding {
                file: path.clone(),
                check: f.check.to_string(),
                severity: f.severity.to_string(),
                line: f.line,
                message: f.message.clone(),
                suggestion: f.suggestion.clone(),
            })
        })
        .collect();

    JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        files_reviewed: summary.files_reviewed,
        total_findings: summary.total_findings,
        findings_by_severity: SeverityCounts {
            error: summary.errors,
            warning: summary.warnings,
            info: summary.info,
        },
        findings,
    }
}

/// Write results in JSON format.
pub fn write_json(reports: &[FileReport], summary: &ReviewSummary) -> anyhow::Result<()> {
    let report = build_json_report(reports, summary);
    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    Ok(())
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write results in pretty (human-readable) format.
pub fn write_pretty(reports: &[FileReport], summary: &ReviewSummary) {
    println!();
    print!("  ");
    print!("{}", "pyreview".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    let mut any = false;
    for (path, findings) in reports {
        if findings.is_empty() {
            continue;
        }
        any = true;
        write_file_findings(path, findings);
    }

    if !any {
        println!("  {}", "✓ All files passed review!".green());
        println!();
    }

    write_summary(summary);
}

fn write_file_findings(path: &str, findings: &[Finding]) {
    println!("  {} ({}):", path.blue().bold(), findings.len());
    println!();

    for f in findings {
        write_severity_tag(&f.severity);
        print!("   ");
        print!("{:<20}", f.check.to_string().dimmed());
        println!("{}", format!("line {}", f.line).dimmed());
        println!("            {}", f.message);
        if f.has_suggestion() {
            println!("            {}", f.suggestion.dimmed());
        }
        println!();
    }
}

fn write_severity_tag(severity: &Severity) {
    match severity {
        Severity::Error => print!("    {} ", "ERROR".red()),
        Severity::Warning => print!("    {} ", "WARN ".yellow()),
        Severity::Info => print!("    {} ", "INFO ".blue()),
    }
}

fn write_summary(summary: &ReviewSummary) {
    println!("  {}", "Review summary:".bold());
    println!("    files reviewed   {}", summary.files_reviewed);
    println!("    total findings   {}", summary.total_findings);
    println!("    errors           {}", summary.errors.to_string().red());
    println!("    warnings         {}", summary.warnings.to_string().yellow());
    println!("    suggestions      {}", summary.info.to_string().blue());
    println!();
}
