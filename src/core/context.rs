//! Catalog run orchestration.
//!
//! `CatalogContext` holds the resolved locations of one run and drives the
//! pipeline: discovery → per-file extraction → emission. Discovery errors
//! abort before any file is parsed and before anything is written.

use std::path::{Path, PathBuf};

use anyhow::Result;
use log::info;

use crate::config::Config;
use crate::core::discovery::{
    DiscoverySettings, PluginLocator, SearchPathLocator, generate_locations,
};
use crate::core::emit::{CatalogTemplate, write_catalog};
use crate::core::pipeline::{ParseFailure, extract_files};

/// Resolved settings of one catalog run. All paths are absolute or relative
/// to the process working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogContext {
    pub discovery: DiscoverySettings,
    pub plugin_search_paths: Vec<PathBuf>,
    /// Directory receiving the catalog and schema.
    pub output_dir: PathBuf,
    pub template: CatalogTemplate,
}

/// Outcome of a catalog run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSummary {
    pub files_scanned: usize,
    /// Records extracted, before rendering.
    pub messages: usize,
    /// Records dropped at render time.
    pub dropped: usize,
    pub skipped_paths: usize,
    pub parse_failures: Vec<ParseFailure>,
    pub catalog_path: PathBuf,
    pub schema_path: PathBuf,
}

impl CatalogContext {
    /// Resolve a configuration against `base_dir`. The output directory is
    /// relative to the package root.
    pub fn from_config(config: &Config, base_dir: &Path) -> Self {
        let package_root = base_dir.join(&config.package_root);
        Self {
            discovery: DiscoverySettings {
                non_library_dir: base_dir.join(&config.non_library_plugins_dir),
                plugins_manifest: base_dir.join(&config.plugins_manifest),
                package_root: package_root.clone(),
            },
            plugin_search_paths: config
                .plugin_search_paths
                .iter()
                .map(|p| base_dir.join(p))
                .collect(),
            output_dir: package_root.join(&config.output_dir),
            template: CatalogTemplate::new(&config.catalog_file_name, &config.schema_file_name),
        }
    }

    /// Run with the search-path plugin locator.
    pub fn run(&self) -> Result<CatalogSummary> {
        let locator = SearchPathLocator::new(self.plugin_search_paths.clone());
        self.run_with_locator(&locator)
    }

    pub fn run_with_locator(&self, locator: &dyn PluginLocator) -> Result<CatalogSummary> {
        let discovery = generate_locations(&self.discovery, locator)?;
        info!(
            "{} source files in {} roots",
            discovery.files.len(),
            discovery.roots.len()
        );

        let extraction = extract_files(&discovery.files);
        let written = write_catalog(&extraction.records, &self.template, &self.output_dir)?;

        Ok(CatalogSummary {
            files_scanned: extraction.files_scanned,
            messages: extraction.records.len(),
            dropped: written.dropped,
            skipped_paths: discovery.skipped_count,
            parse_failures: extraction.parse_failures,
            catalog_path: written.catalog_path,
            schema_path: written.schema_path,
        })
    }
}
