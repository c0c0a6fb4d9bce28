//! Python syntax tree builder using tree-sitter.

use streaming_iterator::StreamingIterator;
use tree_sitter::{Language, Node, Parser, Query, QueryCursor};

use super::{Assignment, FunctionBody, FunctionDef, ModuleFacts, ParseError, Span};

/// Matches every function definition, nested and decorated included.
const FUNCTION_QUERY: &str = r#"
(function_definition
  name: (identifier) @func_name
) @function
"#;

/// Matches assignment statements. Single-name targets are filtered by the
/// `(identifier)` constraint; attribute, subscript, and destructuring
/// targets never capture.
const ASSIGNMENT_QUERY: &str = r#"
(assignment
  left: (identifier) @target
) @assignment
"#;

pub struct PythonParser {
    language: Language,
}

/// Holds a parsed tree and its source for node text extraction.
pub struct ParsedModule {
    pub tree: tree_sitter::Tree,
    pub source: Vec<u8>,
}

impl ParsedModule {
    /// Get text for a tree-sitter node.
    pub fn node_text(&self, node: Node) -> &str {
        node.utf8_text(&self.source).unwrap_or("")
    }
}

/// Visit every node in `node`'s subtree, the node itself included.
///
/// Iterative preorder traversal over an explicit stack; the deep-iteration
/// equivalent of walking with reflection in dynamic languages.
fn walk_subtree<'a, F: FnMut(Node<'a>)>(node: Node<'a>, mut visit: F) {
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        visit(current);
        for i in (0..current.child_count()).rev() {
            if let Some(child) = current.child(i) {
                stack.push(child);
            }
        }
    }
}

/// Whether any node of the given kind appears in the subtree.
fn subtree_contains(node: Node, kind: &str) -> bool {
    let mut found = false;
    walk_subtree(node, |n| {
        if n.kind() == kind {
            found = true;
        }
    });
    found
}

/// Count distinct source lines touched by nodes in the subtree.
fn distinct_lines(node: Node) -> usize {
    let mut lines = std::collections::HashSet::new();
    walk_subtree(node, |n| {
        lines.insert(n.start_position().row);
    });
    lines.len()
}

impl PythonParser {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_python::LANGUAGE.into(),
        }
    }

    /// Parse source text into a tree.
    ///
    /// Malformed source yields `ParseError::Syntax` so callers can skip
    /// tree-dependent checks; tree-sitter itself recovers with ERROR nodes,
    /// and any such node marks the whole parse as failed here.
    pub fn parse(&self, source: &str) -> Result<ParsedModule, ParseError> {
        let mut parser = Parser::new();
        parser.set_language(&self.language)?;
        let tree = parser
            .parse(source.as_bytes(), None)
            .ok_or(ParseError::NoTree)?;

        if tree.root_node().has_error() {
            return Err(ParseError::Syntax);
        }

        Ok(ParsedModule {
            tree,
            source: source.as_bytes().to_vec(),
        })
    }

    /// Extract all facts the checkers consume from a parsed module.
    pub fn extract_facts(&self, parsed: &ParsedModule) -> Result<ModuleFacts, ParseError> {
        Ok(ModuleFacts {
            functions: self.extract_functions(parsed)?,
            assignments: self.extract_assignments(parsed)?,
        })
    }

    fn extract_functions(&self, parsed: &ParsedModule) -> Result<Vec<FunctionDef>, ParseError> {
        let query = Query::new(&self.language, FUNCTION_QUERY)
            .map_err(|e| ParseError::Query(e.to_string()))?;
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, parsed.tree.root_node(), &parsed.source[..]);

        let mut functions = Vec::new();

        while let Some(m) = matches.next() {
            let mut name = String::new();
            let mut func_node = None;

            for capture in m.captures {
                match query.capture_names()[capture.index as usize] {
                    "func_name" => name = parsed.node_text(capture.node).to_string(),
                    "function" => func_node = Some(capture.node),
                    _ => {}
                }
            }

            let (name, node) = match (name, func_node) {
                (n, Some(node)) if !n.is_empty() => (n, node),
                _ => continue,
            };

            let body = match self.function_body(parsed, node) {
                Some(b) => b,
                None => continue,
            };

            functions.push(FunctionDef {
                name,
                span: Span::from_node(node),
                text: parsed.node_text(node).to_string(),
                body,
                touched_lines: distinct_lines(node),
            });
        }

        functions.sort_by_key(|f| f.span.start_byte);
        Ok(functions)
    }

    fn function_body(&self, parsed: &ParsedModule, func_node: Node) -> Option<FunctionBody> {
        let body_node = func_node
            .children(&mut func_node.walk())
            .find(|n| n.kind() == "block")?;

        // Comments appear as block children in the tree but are not
        // statements; filter them before counting.
        let statements: Vec<Node> = body_node
            .children(&mut body_node.walk())
            .filter(|n| n.kind() != "comment")
            .collect();

        let has_docstring = statements
            .first()
            .map(|stmt| {
                stmt.kind() == "expression_statement"
                    && stmt.child(0).map(|c| c.kind() == "string").unwrap_or(false)
            })
            .unwrap_or(false);

        Some(FunctionBody {
            statement_count: statements.len(),
            has_docstring,
            has_try: subtree_contains(func_node, "try_statement"),
        })
    }

    fn extract_assignments(&self, parsed: &ParsedModule) -> Result<Vec<Assignment>, ParseError> {
        let query = Query::new(&self.language, ASSIGNMENT_QUERY)
            .map_err(|e| ParseError::Query(e.to_string()))?;
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, parsed.tree.root_node(), &parsed.source[..]);

        let mut assignments = Vec::new();

        while let Some(m) = matches.next() {
            let mut target = String::new();
            let mut line = 0usize;
            let mut byte = 0usize;

            for capture in m.captures {
                match query.capture_names()[capture.index as usize] {
                    "target" => target = parsed.node_text(capture.node).to_string(),
                    "assignment" => {
                        line = capture.node.start_position().row + 1;
                        byte = capture.node.start_byte();
                    }
                    _ => {}
                }
            }

            if !target.is_empty() && line > 0 {
                assignments.push((byte, Assignment { target, line }));
            }
        }

        assignments.sort_by_key(|(byte, _)| *byte);
        Ok(assignments.into_iter().map(|(_, a)| a).collect())
    }
}

impl Default for PythonParser {
    fn default() -> Self {
        Self::new()
    }
}
