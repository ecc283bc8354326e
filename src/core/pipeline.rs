//! Per-file extraction: read, parse, classify, build records.
//!
//! Files are independent, so they are processed in parallel with rayon.
//! Record order coming out of here carries no meaning; the emitter sorts.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::{debug, warn};
use rayon::prelude::*;

use crate::core::data::MessageRecord;
use crate::core::extract::{build_records, classify_calls};
use crate::core::parsers::parse_python_source;

/// A file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub file_path: String,
    pub error: String,
}

/// Records of all scanned files.
#[derive(Debug, Default)]
pub struct ExtractionResult {
    pub records: Vec<MessageRecord>,
    pub parse_failures: Vec<ParseFailure>,
    pub files_scanned: usize,
}

/// Extract records from Python source text. `module` is the base name the
/// records are attributed to.
pub fn extract_source(source: String, module: &str) -> Result<Vec<MessageRecord>> {
    let parsed = parse_python_source(source, module)?;
    Ok(classify_calls(&parsed)
        .iter()
        .flat_map(|call| build_records(call, module))
        .collect())
}

/// Extract records from one file.
pub fn extract_file(path: &Path) -> Result<Vec<MessageRecord>> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;
    let module = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let records = extract_source(source, &module)?;
    debug!("{}: {} records", path.display(), records.len());
    Ok(records)
}

/// Extract records from every file in parallel.
pub fn extract_files(files: &[PathBuf]) -> ExtractionResult {
    let outcomes: Vec<(&PathBuf, Result<Vec<MessageRecord>>)> = files
        .par_iter()
        .map(|path| (path, extract_file(path)))
        .collect();

    let mut result = ExtractionResult {
        files_scanned: files.len(),
        ..Default::default()
    };

    for (path, outcome) in outcomes {
        match outcome {
            Ok(records) => result.records.extend(records),
            Err(e) => {
                warn!("skipping {}: {:#}", path.display(), e);
                result.parse_failures.push(ParseFailure {
                    file_path: path.display().to_string(),
                    error: format!("{:#}", e),
                });
            }
        }
    }

    result
}
