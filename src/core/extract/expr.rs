//! Owned expression trees for call arguments.
//!
//! Argument expressions are lowered out of the tree-sitter tree into a small
//! node taxonomy: string literals, name references, calls, and everything
//! else as an opaque compound. Resolution only ever asks "is there a call or
//! a name anywhere below?" and "which string literals are below?", so this
//! is all the shape it needs. Lowering also mirrors how Python's own `ast`
//! sees the code: parentheses vanish, adjacent plain literals merge, and the
//! attribute side of `obj.attr` is not a name reference.

use std::collections::VecDeque;

use tree_sitter::Node;

use crate::core::parsers::literal::{StringLiteral, decode_fstring_fragment};
use crate::core::parsers::node_text;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A direct string literal, already decoded: `"text"`, `'a' "b"`.
    Str(String),
    /// A bare identifier reference: `code`, `self`.
    Name(String),
    /// A call expression: `_("text")`, `make_code()`.
    Call(CallExpr),
    /// Any other expression, with its expression children in source order.
    Compound(Vec<Expr>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpr {
    /// Callee name when the callee is a bare identifier (`_` in `_("x")`).
    pub name: Option<String>,
    /// Positional arguments.
    pub args: Vec<Expr>,
}

impl Expr {
    /// Breadth-first walk over this node and every node below it.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            queue: VecDeque::from([self]),
        }
    }

    fn children(&self) -> &[Expr] {
        match self {
            Expr::Compound(children) => children,
            Expr::Call(call) => &call.args,
            Expr::Str(_) | Expr::Name(_) => &[],
        }
    }
}

/// Iterator returned by [`Expr::walk`].
pub struct Walk<'a> {
    queue: VecDeque<&'a Expr>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children());
        Some(node)
    }
}

/// Lower a tree-sitter expression node into an [`Expr`].
pub fn lower_expr(node: Node<'_>, source: &str) -> Expr {
    match node.kind() {
        "string" => lower_string(node, source),
        "concatenated_string" => lower_concatenated_string(node, source),
        "identifier" => Expr::Name(node_text(node, source).to_string()),
        "call" => Expr::Call(CallExpr {
            name: node
                .child_by_field_name("function")
                .filter(|f| f.kind() == "identifier")
                .map(|f| node_text(f, source).to_string()),
            args: positional_args(node)
                .into_iter()
                .map(|arg| lower_expr(arg, source))
                .collect(),
        }),
        "parenthesized_expression" => match expression_children(node).into_iter().next() {
            Some(inner) => lower_expr(inner, source),
            None => Expr::Compound(Vec::new()),
        },
        "attribute" => lower_fields(node, source, &["object"]),
        "dictionary" => lower_dictionary(node, source),
        "keyword_argument" | "default_parameter" | "typed_default_parameter" => {
            lower_fields(node, source, &["value"])
        }
        "interpolation" => lower_fields(node, source, &["expression"]),
        "lambda_parameters" => Expr::Compound(
            expression_children(node)
                .into_iter()
                .filter(|child| child.kind() != "identifier")
                .map(|child| lower_expr(child, source))
                .collect(),
        ),
        _ => Expr::Compound(
            expression_children(node)
                .into_iter()
                .map(|child| lower_expr(child, source))
                .collect(),
        ),
    }
}

/// Positional argument nodes of a `call` node, `*args` included.
pub fn positional_args(call: Node<'_>) -> Vec<Node<'_>> {
    let Some(arguments) = call.child_by_field_name("arguments") else {
        return Vec::new();
    };
    if arguments.kind() == "generator_expression" {
        return vec![arguments];
    }
    expression_children(arguments)
        .into_iter()
        .filter(|child| !matches!(child.kind(), "keyword_argument" | "dictionary_splat"))
        .collect()
}

/// `(name, value)` node pairs of the keyword arguments of a `call` node.
/// `**kwargs` expansions carry no name and are not included.
pub fn keyword_args(call: Node<'_>) -> Vec<(Node<'_>, Node<'_>)> {
    let Some(arguments) = call.child_by_field_name("arguments") else {
        return Vec::new();
    };
    expression_children(arguments)
        .into_iter()
        .filter(|child| child.kind() == "keyword_argument")
        .filter_map(|kw| {
            Some((
                kw.child_by_field_name("name")?,
                kw.child_by_field_name("value")?,
            ))
        })
        .collect()
}

/// Named children minus comments.
fn expression_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| !child.is_extra())
        .collect()
}

fn lower_fields(node: Node<'_>, source: &str, fields: &[&str]) -> Expr {
    Expr::Compound(
        fields
            .iter()
            .filter_map(|field| node.child_by_field_name(field))
            .map(|child| lower_expr(child, source))
            .collect(),
    )
}

fn lower_string(node: Node<'_>, source: &str) -> Expr {
    let Some(literal) = StringLiteral::split(node_text(node, source)) else {
        return Expr::Compound(Vec::new());
    };

    if literal.prefix.bytes {
        return Expr::Compound(Vec::new());
    }

    if literal.prefix.formatted {
        let mut parts = Vec::new();
        for child in expression_children(node) {
            match child.kind() {
                "string_content" => parts.push(Expr::Str(decode_fstring_fragment(
                    node_text(child, source),
                    literal.prefix.raw,
                ))),
                "interpolation" => parts.push(lower_expr(child, source)),
                _ => {}
            }
        }
        return Expr::Compound(parts);
    }

    Expr::Str(literal.value())
}

fn lower_concatenated_string(node: Node<'_>, source: &str) -> Expr {
    let pieces: Vec<Expr> = expression_children(node)
        .into_iter()
        .map(|child| lower_expr(child, source))
        .collect();

    if pieces.iter().all(|piece| matches!(piece, Expr::Str(_))) {
        let mut joined = String::new();
        for piece in &pieces {
            if let Expr::Str(text) = piece {
                joined.push_str(text);
            }
        }
        return Expr::Str(joined);
    }

    // Mixed with f-strings: one formatted string whose adjacent literal
    // parts are joined.
    let mut merged: Vec<Expr> = Vec::new();
    for piece in pieces {
        let parts = match piece {
            Expr::Compound(children) => children,
            other => vec![other],
        };
        for part in parts {
            if let Expr::Str(text) = &part
                && let Some(Expr::Str(previous)) = merged.last_mut()
            {
                previous.push_str(text);
                continue;
            }
            merged.push(part);
        }
    }
    merged.retain(|part| !matches!(part, Expr::Str(text) if text.is_empty()));
    Expr::Compound(merged)
}

/// All keys, then all values. A `**mapping` entry has no key.
fn lower_dictionary(node: Node<'_>, source: &str) -> Expr {
    let entries = expression_children(node);
    let keys = entries
        .iter()
        .filter(|entry| entry.kind() == "pair")
        .filter_map(|pair| pair.child_by_field_name("key"));
    let values = entries.iter().filter_map(|entry| match entry.kind() {
        "pair" => entry.child_by_field_name("value"),
        _ => expression_children(*entry).into_iter().next(),
    });
    Expr::Compound(keys.chain(values).map(|n| lower_expr(n, source)).collect())
}
