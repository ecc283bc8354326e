//! Source parsing for the scanned language.
//!
//! - `python`: tree-sitter based parsing of Python modules
//! - `literal`: decoding of Python string literal tokens

pub mod literal;
pub mod python;

pub use literal::{StringLiteral, StringPrefix};
pub use python::{ParsedPython, SOURCE_EXTENSION, node_text, parse_python_source};
