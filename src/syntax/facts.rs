//! Fact structures extracted from the parse tree.

use std::fmt;

/// Source location span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (0-indexed), used for source ordering.
    pub start_byte: usize,
    /// Start line (1-indexed).
    pub start_line: usize,
    /// End line (1-indexed, inclusive).
    pub end_line: usize,
}

impl Span {
    /// Create a span from a tree-sitter node.
    pub fn from_node(node: tree_sitter::Node) -> Self {
        Self {
            start_byte: node.start_byte(),
            // tree-sitter is 0-indexed
            start_line: node.start_position().row + 1,
            end_line: node.end_position().row + 1,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start_line, self.end_line)
    }
}

/// Information about a function body.
#[derive(Debug, Clone)]
pub struct FunctionBody {
    /// Number of statements in the body block (comments excluded).
    pub statement_count: usize,
    /// Whether the first statement is a standalone string literal.
    pub has_docstring: bool,
    /// Whether a try statement appears anywhere in the function's subtree.
    pub has_try: bool,
}

/// A function definition extracted from source.
#[derive(Debug, Clone)]
pub struct FunctionDef {
    /// The function name.
    pub name: String,
    /// Span of the whole definition.
    pub span: Span,
    /// Full source text of the definition (signature and body).
    pub text: String,
    /// Body facts.
    pub body: FunctionBody,
    /// Count of distinct source lines touched by descendant nodes.
    /// Fallback length measure when the span is degenerate.
    pub touched_lines: usize,
}

impl FunctionDef {
    /// Function length in lines.
    ///
    /// Precise end-line arithmetic when the parser supplies a well-formed
    /// span; otherwise falls back to the distinct-descendant-lines count.
    /// The fallback can undercount one-line functions and overcount
    /// multi-line expressions, so the precise path is always preferred.
    pub fn length(&self) -> usize {
        if self.span.end_line >= self.span.start_line {
            self.span.end_line - self.span.start_line + 1
        } else {
            self.touched_lines
        }
    }

    /// Whether the name uses the private convention (leading underscore).
    pub fn is_private(&self) -> bool {
        self.name.starts_with('_')
    }

    /// Whether the name is a dunder (`__init__`-style) identifier.
    pub fn is_dunder(&self) -> bool {
        self.name.starts_with("__")
    }
}

/// A simple single-name assignment (`x = ...`).
///
/// Destructuring, attribute, and subscript targets are not recorded.
#[derive(Debug, Clone)]
pub struct Assignment {
    /// The target name.
    pub target: String,
    /// 1-indexed line of the assignment.
    pub line: usize,
}

/// All facts extracted from one parsed module.
#[derive(Debug, Clone, Default)]
pub struct ModuleFacts {
    /// Function definitions, in source order, nested definitions included.
    pub functions: Vec<FunctionDef>,
    /// Simple assignments, in source order.
    pub assignments: Vec<Assignment>,
}
