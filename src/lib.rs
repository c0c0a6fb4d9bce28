//! Pyreview - automated code review for Python source.
//!
//! Pyreview parses Python files with tree-sitter and checks them against
//! five coding standards: no hardcoded secrets, error handling around risky
//! operations, bounded function length, docstrings on public functions, and
//! snake_case naming.
//!
//! # Architecture
//!
//! - `syntax`: tree-sitter backed parsing into fact records
//! - `check`: the five detection rules and the per-file `Reviewer`
//! - `report`: output formatting (pretty, Markdown comment, JSON)
//! - `summary`: run-level aggregate counts
//! - `config`: YAML review configuration
//! - `cli`: command-line front end
//!
//! # Library Use
//!
//! ```no_run
//! use pyreview::{format_review_comment, Reviewer};
//!
//! let reviewer = Reviewer::new();
//! let findings = reviewer.review_file("app.py", "password = \"hunter22\"\n");
//! println!("{}", format_review_comment(&findings, "app.py"));
//! ```

pub mod check;
pub mod cli;
pub mod config;
pub mod report;
pub mod summary;
pub mod syntax;

pub use check::{CheckName, Finding, Reviewer, Severity};
pub use config::ReviewConfig;
pub use report::format_review_comment;
pub use summary::ReviewSummary;
pub use syntax::{ModuleFacts, ParseError, PythonParser};
