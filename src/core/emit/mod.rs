//! Catalog emission.
//!
//! Renders every record into a `<message>` element, sorts the elements by
//! their rendered text, wraps them in the template's header and footer and
//! writes the catalog plus its schema.
//!
//! - `template`: header, footer, schema text and output file names
//! - `render`: single record rendering

pub mod render;
pub mod template;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::{info, warn};

use crate::core::data::MessageRecord;

pub use render::render_record;
pub use template::{CATALOG_FILE_NAME, CatalogTemplate, SCHEMA_FILE_NAME};

/// The catalog document in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCatalog {
    pub document: String,
    /// Records written into the document.
    pub rendered: usize,
    /// Records dropped because they could not be rendered.
    pub dropped: usize,
}

/// Paths and counts of a written catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenCatalog {
    pub catalog_path: PathBuf,
    pub schema_path: PathBuf,
    pub rendered: usize,
    pub dropped: usize,
}

/// Render the full catalog document.
///
/// Elements are ordered by their complete rendered text, not by any record
/// field, so the output depends only on the set of records.
pub fn render_catalog(records: &[MessageRecord], template: &CatalogTemplate) -> RenderedCatalog {
    let mut elements = Vec::with_capacity(records.len());
    let mut dropped = 0;

    for record in records {
        match render_record(record) {
            Ok(element) => elements.push(element),
            Err(e) => {
                dropped += 1;
                warn!(
                    "{}:{}: record dropped: {}",
                    record.source_file, record.line_number, e
                );
            }
        }
    }

    elements.sort();

    let body = elements.join("\n\n");
    let mut document =
        String::with_capacity(template.header.len() + body.len() + template.footer.len());
    document.push_str(&template.header);
    document.push_str(&body);
    document.push_str(&template.footer);

    RenderedCatalog {
        document,
        rendered: elements.len(),
        dropped,
    }
}

/// Render the catalog and write it and the schema into `output_dir`,
/// creating the directory when needed. Existing files are overwritten.
pub fn write_catalog(
    records: &[MessageRecord],
    template: &CatalogTemplate,
    output_dir: &Path,
) -> Result<WrittenCatalog> {
    let rendered = render_catalog(records, template);

    fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory: {}", output_dir.display())
    })?;

    let catalog_path = output_dir.join(&template.catalog_file_name);
    fs::write(&catalog_path, &rendered.document)
        .with_context(|| format!("Failed to write catalog: {}", catalog_path.display()))?;
    info!(
        "wrote {} messages to {}",
        rendered.rendered,
        catalog_path.display()
    );

    let schema_path = output_dir.join(&template.schema_file_name);
    fs::write(&schema_path, &template.schema)
        .with_context(|| format!("Failed to write schema: {}", schema_path.display()))?;
    info!("wrote schema to {}", schema_path.display());

    Ok(WrittenCatalog {
        catalog_path,
        schema_path,
        rendered: rendered.rendered,
        dropped: rendered.dropped,
    })
}
