//! Plugin requirements manifest parsing.
//!
//! The manifest lists one plugin per line in pip requirements style,
//! optionally pinned (`plugin_name==1.2.3`). Only the importable name
//! matters for locating the plugin.

use std::{fs, path::Path};

use anyhow::{Context, Result};

/// Importable plugin names listed in the manifest, in file order.
pub fn parse_manifest(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(requirement_line)
        .map(|line| importable_name(line).to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Read and parse the manifest at `path`.
pub fn read_manifest(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read plugins manifest: {}", path.display()))?;
    Ok(parse_manifest(&content))
}

/// The requirement on a line, without comments. `None` for blank lines,
/// comment lines and pip options (`-r other.txt`, `--index-url ...`).
fn requirement_line(line: &str) -> Option<&str> {
    let line = match line.find(" #") {
        Some(at) => &line[..at],
        None => line,
    };
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
        None
    } else {
        Some(line)
    }
}

/// The part before the first `=`; `pkg==1.2` and `pkg=1.2` both give `pkg`.
pub fn importable_name(requirement: &str) -> &str {
    match requirement.find('=') {
        Some(at) if at > 0 => requirement[..at].trim(),
        _ => requirement,
    }
}
