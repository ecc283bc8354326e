//! Core extraction pipeline.
//!
//! 1. **Discovery** (`discovery`): roots to scan and the source files below them
//! 2. **Parsing** (`parsers`): Python source → syntax tree
//! 3. **Extraction** (`extract`): recognized call sites → `MessageRecord`s
//! 4. **Emission** (`emit`): sorted catalog document + schema on disk
//!
//! `context` ties the phases together for one run; `pipeline` runs
//! parsing and extraction over many files.

pub mod context;
pub mod data;
pub mod discovery;
pub mod emit;
pub mod extract;
pub mod parsers;
pub mod pipeline;

pub use context::{CatalogContext, CatalogSummary};
pub use data::{MessageRecord, Severity};
pub use pipeline::{ExtractionResult, ParseFailure, extract_file, extract_files, extract_source};
