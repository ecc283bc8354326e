//! Data types produced by extraction.
//!
//! - `message`: `MessageRecord` (one catalog entry) and the fixed `Severity` levels

pub mod message;

pub use message::{MessageRecord, Severity};
