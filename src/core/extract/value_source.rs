//! Argument resolution: what value does an argument expression stand for?
//!
//! Every diagnostic argument (message code, message text, `log` level) is
//! classified into an [`ArgumentValue`] by the same ordered rules:
//!
//! 1. a direct string literal is its own value;
//! 2. `_("literal")` (the translation wrapper) is the wrapped literal;
//! 3. anything with a call or a name reference somewhere below is dynamic;
//! 4. otherwise the string literal fragments found below, in walk order.
//!
//! The three argument roles then read the classification differently, see
//! [`ArgumentValue::into_message_text`], [`ArgumentValue::into_message_codes`]
//! and [`ArgumentValue::into_severity_level`].
//!
//! # Examples
//!
//! ```ignore
//! error("xbrl:c1", ...)               → Literal("xbrl:c1")
//! error(..., _("Value %(v)s bad"))    → Translatable("Value %(v)s bad")
//! error(code_for(item), ...)          → Dynamic
//! error(("a", "b"), ...)              → Fragments(["a", "b"])
//! error(42, ...)                      → Unresolvable
//! ```

use crate::core::extract::expr::{CallExpr, Expr};

/// Marker text for values that are only known at run time.
pub const DYNAMIC: &str = "(dynamic)";

/// Name of the translation-marking function.
pub const TRANSLATION_WRAPPER: &str = "_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentValue {
    /// A direct string literal.
    Literal(String),
    /// A string literal wrapped in `_()`.
    Translatable(String),
    /// Contains a call or a name reference; not knowable statically.
    Dynamic,
    /// Static aggregate of string literals (tuple, list, `+`, f-string
    /// without interpolations, ...). Never empty.
    Fragments(Vec<String>),
    /// Static, but no string literal anywhere below (numbers, `None`, bytes).
    Unresolvable,
}

impl ArgumentValue {
    /// Classify an argument expression.
    pub fn classify(expr: &Expr) -> Self {
        if let Expr::Str(text) = expr {
            return ArgumentValue::Literal(text.clone());
        }

        if let Some(text) = translatable_literal(expr) {
            return ArgumentValue::Translatable(text.to_string());
        }

        if expr
            .walk()
            .any(|node| matches!(node, Expr::Call(_) | Expr::Name(_)))
        {
            return ArgumentValue::Dynamic;
        }

        let fragments: Vec<String> = expr
            .walk()
            .filter_map(|node| match node {
                Expr::Str(text) => Some(text.clone()),
                _ => None,
            })
            .collect();

        if fragments.is_empty() {
            ArgumentValue::Unresolvable
        } else {
            ArgumentValue::Fragments(fragments)
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, ArgumentValue::Dynamic)
    }

    /// Message text: a literal, a translatable literal or `(dynamic)`.
    ///
    /// Aggregates of fragments are not a message template we can report,
    /// so they yield `None` just like unresolvable expressions.
    pub fn into_message_text(self) -> Option<String> {
        match self {
            ArgumentValue::Literal(text) | ArgumentValue::Translatable(text) => Some(text),
            ArgumentValue::Dynamic => Some(DYNAMIC.to_string()),
            ArgumentValue::Fragments(_) | ArgumentValue::Unresolvable => None,
        }
    }

    /// Message codes: every fragment is a separate code, so a tuple of
    /// literal codes yields one code per element.
    pub fn into_message_codes(self) -> Vec<String> {
        match self {
            ArgumentValue::Literal(code) | ArgumentValue::Translatable(code) => vec![code],
            ArgumentValue::Dynamic => vec![DYNAMIC.to_string()],
            ArgumentValue::Fragments(codes) => codes,
            ArgumentValue::Unresolvable => Vec::new(),
        }
    }

    /// Severity level of a generic `log` call: lower-cased, with multiple
    /// fragments joined by `", "` into one level string.
    pub fn into_severity_level(self) -> String {
        match self {
            ArgumentValue::Literal(level) | ArgumentValue::Translatable(level) => {
                level.to_lowercase()
            }
            ArgumentValue::Dynamic => DYNAMIC.to_string(),
            ArgumentValue::Fragments(levels) => levels
                .iter()
                .map(|level| level.to_lowercase())
                .collect::<Vec<_>>()
                .join(", "),
            ArgumentValue::Unresolvable => String::new(),
        }
    }
}

/// `_("text")` → `"text"`. Only a direct literal as first argument counts.
fn translatable_literal(expr: &Expr) -> Option<&str> {
    match expr {
        Expr::Call(CallExpr {
            name: Some(name),
            args,
        }) if name == TRANSLATION_WRAPPER => match args.first() {
            Some(Expr::Str(text)) => Some(text.as_str()),
            _ => None,
        },
        _ => None,
    }
}

pub fn resolve_message_text(expr: &Expr) -> Option<String> {
    ArgumentValue::classify(expr).into_message_text()
}

pub fn resolve_message_codes(expr: &Expr) -> Vec<String> {
    ArgumentValue::classify(expr).into_message_codes()
}

pub fn resolve_severity_level(expr: &Expr) -> String {
    ArgumentValue::classify(expr).into_severity_level()
}
