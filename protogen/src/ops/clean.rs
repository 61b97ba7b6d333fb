//! Clean operation - delete every recorded generated file.

use protogen_codegen::{Result, UnitRenderer, clean as clean_registry};
use protogen_codegen_csharp::CSharpRenderer;

use crate::{reports::CleanReport, settings::Settings};

pub fn clean(settings: &Settings) -> Result<CleanReport> {
    let outcome = clean_registry(&settings.registry, CSharpRenderer.file_extension())?;
    Ok(CleanReport {
        batches: outcome.batches,
        removed: outcome.removed,
    })
}
