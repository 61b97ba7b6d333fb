//! Generate operation - regenerate C# sources when the schema changed.

use protogen_codegen::Result;
use protogen_codegen_csharp::Generator;
use protogen_schema::SchemaTree;

use crate::{
    reports::{GenerateReport, PreviewEntry},
    settings::Settings,
};

/// Run the regeneration decision and write a new batch if needed.
pub fn generate(tree: &SchemaTree, settings: &Settings) -> Result<GenerateReport> {
    tracing::debug!(
        schema = %settings.schema.display(),
        nodes = tree.root().node_count(),
        version = %settings.producer_version,
        "loaded schema tree"
    );
    let generator = Generator::with_options(tree, settings.options.clone());
    let outcome = generator.generate(
        &settings.output,
        &settings.registry,
        &settings.producer_version,
    )?;

    Ok(GenerateReport::Written {
        output: settings.output.clone(),
        registry: settings.registry.clone(),
        state: outcome.state,
        reason: outcome.reason,
        written: outcome.written.len(),
        removed: outcome.removed,
    })
}

/// Render every unit without touching the filesystem.
pub fn preview(tree: &SchemaTree, settings: &Settings) -> Result<GenerateReport> {
    let generator = Generator::with_options(tree, settings.options.clone());
    let files = generator
        .preview()?
        .into_iter()
        .map(|f| PreviewEntry {
            unit: f.unit,
            content: f.content,
        })
        .collect();
    Ok(GenerateReport::Preview { files })
}
