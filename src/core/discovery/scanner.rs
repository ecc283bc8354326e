use std::path::{Path, PathBuf};

use log::warn;
use walkdir::WalkDir;

use crate::core::parsers::SOURCE_EXTENSION;

/// Result of scanning one root.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub files: Vec<PathBuf>,
    /// Entries that could not be read, including symlink loops.
    pub skipped_count: usize,
}

/// Every source file below `root`, at any depth.
///
/// Symlinks are followed so linked plugin directories are scanned too;
/// walkdir detects symlink loops, which are reported and skipped.
pub fn scan_source_files(root: &Path) -> ScanResult {
    let mut result = ScanResult::default();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                warn!("cannot access path: {}", e);
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        if entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(SOURCE_EXTENSION))
        {
            result.files.push(entry.into_path());
        }
    }

    result
}
