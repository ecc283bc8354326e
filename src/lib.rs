//! msgcat - diagnostic message catalog generator
//!
//! msgcat scans a tree of Python sources for calls to the diagnostic
//! functions (`info`, `warning`, `error`, `exception` and the generic `log`),
//! extracts the message code, message template, severity level and keyword
//! argument names of every call site, and writes them to a sorted XML
//! catalog together with its schema.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction pipeline (discovery, parsing, extraction, emission)
//! - `logger`: `log` backend setup
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod logger;
pub mod utils;
