//! Location discovery: which directories to scan and which files they hold.
//!
//! Roots are the package root, the sibling directory of non-library
//! plugins, and the install location of every plugin listed in the plugins
//! manifest. A plugin that cannot be located aborts the run before any file
//! is parsed.
//!
//! - `manifest`: plugin manifest parsing
//! - `locator`: plugin name → directory lookup
//! - `scanner`: recursive source file enumeration

pub mod locator;
pub mod manifest;
pub mod scanner;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use log::info;

pub use locator::{PluginLocator, SearchPathLocator};
pub use manifest::{importable_name, parse_manifest, read_manifest};
pub use scanner::{ScanResult, scan_source_files};

/// Where to look for sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverySettings {
    pub package_root: PathBuf,
    pub non_library_dir: PathBuf,
    pub plugins_manifest: PathBuf,
}

/// Discovered source files.
#[derive(Debug, Default)]
pub struct Discovery {
    pub roots: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Resolve every root to scan.
///
/// The package root, the non-library directory and the manifest must all
/// exist; a run never writes a catalog missing one of its sources.
pub fn resolve_roots(
    settings: &DiscoverySettings,
    locator: &dyn PluginLocator,
) -> Result<Vec<PathBuf>> {
    if !settings.package_root.is_dir() {
        bail!(
            "Package root is not a directory: {}",
            settings.package_root.display()
        );
    }

    let mut roots = vec![settings.package_root.clone()];

    if !settings.non_library_dir.is_dir() {
        bail!(
            "Non-library plugins directory is not a directory: {}",
            settings.non_library_dir.display()
        );
    }
    roots.push(settings.non_library_dir.clone());

    roots.extend(find_plugin_locations(&settings.plugins_manifest, locator)?);

    Ok(roots)
}

/// Install locations of the plugins named in the manifest, in manifest order.
pub fn find_plugin_locations(
    manifest: &Path,
    locator: &dyn PluginLocator,
) -> Result<Vec<PathBuf>> {
    if !manifest.is_file() {
        bail!("Plugins manifest not found: {}", manifest.display());
    }

    read_manifest(manifest)?
        .iter()
        .map(|name| -> Result<PathBuf> {
            let location = locator
                .locate(name)
                .with_context(|| format!("Plugin listed in {}", manifest.display()))?;
            info!("plugin {} at {}", name, location.display());
            Ok(location)
        })
        .collect()
}

/// Enumerate the source files of every root.
pub fn discover_source_files(roots: Vec<PathBuf>) -> Discovery {
    let mut discovery = Discovery::default();

    for root in &roots {
        let scan = scan_source_files(root);
        info!("{} source files under {}", scan.files.len(), root.display());
        discovery.files.extend(scan.files);
        discovery.skipped_count += scan.skipped_count;
    }

    discovery.roots = roots;
    discovery
}

/// Resolve roots, then enumerate their files.
pub fn generate_locations(
    settings: &DiscoverySettings,
    locator: &dyn PluginLocator,
) -> Result<Discovery> {
    let roots = resolve_roots(settings, locator)?;
    Ok(discover_source_files(roots))
}
