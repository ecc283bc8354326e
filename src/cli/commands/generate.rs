use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use super::super::args::{GenerateArgs, GenerateCommand};
use super::{CommandResult, CommandSummary, GenerateSummary};
use crate::config::load_config;
use crate::core::CatalogContext;

pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    let start = Instant::now();
    let ctx = build_context(&cmd.args)?;
    let catalog = ctx.run()?;

    Ok(CommandResult {
        parse_error_count: catalog.parse_failures.len(),
        summary: CommandSummary::Generate(GenerateSummary {
            catalog,
            elapsed: start.elapsed(),
        }),
    })
}

/// Resolve the config file, then apply command-line overrides.
///
/// Overriding paths are taken relative to the working directory, except
/// `--output-dir` which stays relative to the package root.
pub fn build_context(args: &GenerateArgs) -> Result<CatalogContext> {
    let loaded = load_config(&args.path)
        .with_context(|| format!("Failed to load config from {}", args.path.display()))?;
    if loaded.from_file {
        info!("using config from {}", loaded.base_dir.display());
    }
    let config = loaded.config;
    let mut ctx = CatalogContext::from_config(&config, &loaded.base_dir);

    if let Some(package_root) = &args.package_root {
        ctx.discovery.package_root = package_root.clone();
        ctx.output_dir = package_root.join(&config.output_dir);
    }
    if let Some(output_dir) = &args.output_dir {
        ctx.output_dir = ctx.discovery.package_root.join(output_dir);
    }
    if let Some(dir) = &args.non_library_dir {
        ctx.discovery.non_library_dir = dir.clone();
    }
    if let Some(manifest) = &args.plugins_manifest {
        ctx.discovery.plugins_manifest = manifest.clone();
    }
    ctx.plugin_search_paths.extend(args.plugin_paths.iter().cloned());

    Ok(ctx)
}
