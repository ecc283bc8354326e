use anyhow::{Result, anyhow, bail};
use tree_sitter::{Node, Parser, Tree};

/// File extension of the scanned language's modules.
pub const SOURCE_EXTENSION: &str = ".py";

/// A parsed Python module. The tree borrows nothing, so the source text is
/// kept alongside it for node text lookups.
pub struct ParsedPython {
    pub tree: Tree,
    pub source: String,
}

impl ParsedPython {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }
}

/// Text covered by `node`.
pub fn node_text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    source.get(node.byte_range()).unwrap_or_default()
}

/// Parse Python source code into a syntax tree.
///
/// tree-sitter recovers from syntax errors; a tree that needed recovery is
/// rejected here so that half-parsed modules never reach extraction.
pub fn parse_python_source(source: String, file_path: &str) -> Result<ParsedPython> {
    let language: tree_sitter::Language = tree_sitter_python::LANGUAGE.into();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| anyhow!("Failed to load Python grammar: {}", e))?;

    let tree = parser
        .parse(&source, None)
        .ok_or_else(|| anyhow!("Failed to parse {}", file_path))?;

    let root = tree.root_node();
    if root.has_error() {
        let line = first_error_line(root).unwrap_or(1);
        bail!("Syntax error in {} near line {}", file_path, line);
    }

    Ok(ParsedPython { tree, source })
}

fn first_error_line(node: Node<'_>) -> Option<usize> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position().row + 1);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error()
            && let Some(line) = first_error_line(child)
        {
            return Some(line);
        }
    }
    None
}
