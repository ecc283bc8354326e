use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::emit::{CATALOG_FILE_NAME, SCHEMA_FILE_NAME};

pub const CONFIG_FILE_NAME: &str = ".msgcatrc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Root of the package to scan; the catalog is written below it.
    #[serde(default = "default_package_root")]
    pub package_root: String,
    /// Plugins that are not installed as libraries, scanned in place.
    #[serde(default = "default_non_library_plugins_dir")]
    pub non_library_plugins_dir: String,
    /// Requirements-style list of installed plugins.
    #[serde(default = "default_plugins_manifest")]
    pub plugins_manifest: String,
    /// Directories searched, in order, to locate installed plugins.
    #[serde(default)]
    pub plugin_search_paths: Vec<String>,
    /// Output directory, relative to `package_root`.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_catalog_file_name")]
    pub catalog_file_name: String,
    #[serde(default = "default_schema_file_name")]
    pub schema_file_name: String,
}

fn default_package_root() -> String {
    "src".to_string()
}

fn default_non_library_plugins_dir() -> String {
    "non_library_plugins".to_string()
}

fn default_plugins_manifest() -> String {
    "requirements_plugins.txt".to_string()
}

fn default_output_dir() -> String {
    "doc".to_string()
}

fn default_catalog_file_name() -> String {
    CATALOG_FILE_NAME.to_string()
}

fn default_schema_file_name() -> String {
    SCHEMA_FILE_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package_root: default_package_root(),
            non_library_plugins_dir: default_non_library_plugins_dir(),
            plugins_manifest: default_plugins_manifest(),
            plugin_search_paths: Vec::new(),
            output_dir: default_output_dir(),
            catalog_file_name: default_catalog_file_name(),
            schema_file_name: default_schema_file_name(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Output file names must be bare file names; the package root must be set.
    pub fn validate(&self) -> Result<()> {
        if self.package_root.trim().is_empty() {
            bail!("'packageRoot' must not be empty");
        }

        for (field, name) in [
            ("catalogFileName", &self.catalog_file_name),
            ("schemaFileName", &self.schema_file_name),
        ] {
            let path = Path::new(name);
            if name.is_empty() || path.file_name() != Some(path.as_os_str()) {
                bail!("'{}' must be a plain file name, got \"{}\"", field, name);
            }
        }

        if self.catalog_file_name == self.schema_file_name {
            bail!("'catalogFileName' and 'schemaFileName' must differ");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory relative paths in the config resolve against: the config
    /// file's directory, or the start directory when using defaults.
    pub base_dir: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                base_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            base_dir: start_dir.to_path_buf(),
        }),
    }
}
