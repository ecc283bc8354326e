//! Plugin location lookup.
//!
//! Finding where a plugin package is installed is the job of the host
//! environment; [`PluginLocator`] is the seam. [`SearchPathLocator`] does
//! what an import would: check each search directory in order for a
//! package or a module of that name.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::core::parsers::SOURCE_EXTENSION;

pub trait PluginLocator {
    /// Directory holding the named plugin's sources.
    ///
    /// A name that cannot be found is an error; callers treat it as fatal.
    fn locate(&self, name: &str) -> Result<PathBuf>;
}

/// Resolves plugin names against an ordered list of directories.
#[derive(Debug, Clone, Default)]
pub struct SearchPathLocator {
    search_paths: Vec<PathBuf>,
}

impl SearchPathLocator {
    pub fn new(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }

    fn find_in(dir: &Path, top_level: &str) -> Option<PathBuf> {
        let package = dir.join(top_level);
        if package.join("__init__.py").is_file() {
            return Some(package);
        }
        let module = dir.join(format!("{}{}", top_level, SOURCE_EXTENSION));
        if module.is_file() {
            return Some(dir.to_path_buf());
        }
        None
    }
}

impl PluginLocator for SearchPathLocator {
    fn locate(&self, name: &str) -> Result<PathBuf> {
        // Importing `a.b` binds the top-level package `a`.
        let top_level = name.split('.').next().unwrap_or(name).trim();
        if top_level.is_empty() {
            bail!("Invalid plugin name: {:?}", name);
        }

        if let Some(found) = self
            .search_paths
            .iter()
            .find_map(|dir| Self::find_in(dir, top_level))
        {
            return Ok(found);
        }

        let searched: Vec<String> = self
            .search_paths
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        bail!(
            "Cannot locate plugin '{}' (searched: {})",
            name,
            if searched.is_empty() {
                "no plugin search paths configured".to_string()
            } else {
                searched.join(", ")
            }
        )
    }
}
