//! Call-site classification.
//!
//! Walks a parsed module, keeps every call whose callee is a recognized
//! diagnostic function, and lowers its arguments into owned [`Expr`] trees.

use tree_sitter::Node;

use crate::core::extract::expr::{Expr, keyword_args, lower_expr, positional_args};
use crate::core::extract::handler::CallHandler;
use crate::core::parsers::{ParsedPython, node_text};

/// A call to a recognized diagnostic function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    /// Resolved callee name (`error` for `self.modelXbrl.error(...)`).
    pub callee: String,
    /// Positional arguments in order.
    pub args: Vec<Expr>,
    /// Keyword arguments in source order.
    pub keywords: Vec<KeywordArg>,
    /// 1-based line where the call starts.
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordArg {
    pub name: String,
    pub value: Expr,
}

/// A recognized call site with the handler its callee maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedCall {
    pub site: CallSite,
    pub handler: CallHandler,
}

/// Name a call is made through: the attribute name for `obj.name(...)`,
/// the identifier for `name(...)`, nothing for any other callee shape.
pub fn callee_name<'s>(call: Node<'_>, source: &'s str) -> Option<&'s str> {
    let function = call.child_by_field_name("function")?;
    match function.kind() {
        "attribute" => function
            .child_by_field_name("attribute")
            .map(|attr| node_text(attr, source)),
        "identifier" => Some(node_text(function, source)),
        _ => None,
    }
}

/// Every recognized diagnostic call in the module, in document order.
pub fn classify_calls(parsed: &ParsedPython) -> Vec<ClassifiedCall> {
    let source = parsed.source.as_str();
    let mut calls = Vec::new();
    let mut cursor = parsed.root().walk();

    loop {
        let node = cursor.node();
        if node.kind() == "call"
            && let Some(call) = classify_call(node, source)
        {
            calls.push(call);
        }

        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return calls;
            }
        }
    }
}

fn classify_call(node: Node<'_>, source: &str) -> Option<ClassifiedCall> {
    let callee = callee_name(node, source)?;
    let handler = CallHandler::for_callee(callee)?;

    let site = CallSite {
        callee: callee.to_string(),
        args: positional_args(node)
            .into_iter()
            .map(|arg| lower_expr(arg, source))
            .collect(),
        keywords: keyword_args(node)
            .into_iter()
            .map(|(name, value)| KeywordArg {
                name: node_text(name, source).to_string(),
                value: lower_expr(value, source),
            })
            .collect(),
        line: node.start_position().row + 1,
    };

    Some(ClassifiedCall { site, handler })
}
