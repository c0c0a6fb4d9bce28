//! Syntax tree building for reviewed source files.
//!
//! Wraps tree-sitter parsing behind fact records so the checkers never touch
//! raw tree nodes. Parse failure is a typed error: tree-dependent checks are
//! skipped for that file, text-based checks run regardless.

mod facts;
mod python;

pub use facts::{Assignment, FunctionBody, FunctionDef, ModuleFacts, Span};
pub use python::{ParsedModule, PythonParser};

use once_cell::sync::OnceCell;
use thiserror::Error;

/// Errors from parsing source text.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("language rejected by tree-sitter: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    #[error("source contains syntax errors")]
    Syntax,
    #[error("parser produced no tree")]
    NoTree,
    #[error("query compilation failed: {0}")]
    Query(String),
}

/// File extension the engine reviews.
pub const PYTHON_EXTENSION: &str = "py";

static PARSER: OnceCell<PythonParser> = OnceCell::new();

/// Get the shared parser for a file extension, if the engine reviews it.
pub fn for_extension(ext: &str) -> Option<&'static PythonParser> {
    if ext == PYTHON_EXTENSION {
        Some(PARSER.get_or_init(PythonParser::new))
    } else {
        None
    }
}

/// Parse source text and extract module facts in one step.
pub fn parse_module(source: &str) -> Result<ModuleFacts, ParseError> {
    let parser = PARSER.get_or_init(PythonParser::new);
    let parsed = parser.parse(source)?;
    parser.extract_facts(&parsed)
}
