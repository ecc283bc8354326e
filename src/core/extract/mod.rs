//! Message extraction from parsed modules.
//!
//! - `expr`: owned expression trees lowered from the syntax tree
//! - `handler`: the recognized diagnostic callees and their level rules
//! - `call_site`: finds recognized calls in a module
//! - `value_source`: resolves argument expressions to codes, text and levels
//! - `builder`: assembles catalog records per call site

pub mod builder;
pub mod call_site;
pub mod expr;
pub mod handler;
pub mod value_source;

pub use builder::{MESSAGE_CODES_KEYWORD, MODEL_OBJECT_KEYWORD, build_records};
pub use call_site::{CallSite, ClassifiedCall, KeywordArg, callee_name, classify_calls};
pub use expr::{CallExpr, Expr};
pub use handler::{CallHandler, FixedLevel, GenericLog, LevelHandler};
pub use value_source::{ArgumentValue, DYNAMIC};
