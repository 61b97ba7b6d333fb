//! Status operation - summarize the registry.

use protogen_codegen::Registry;
use protogen_codegen_csharp::CSharpRenderer;
use protogen_codegen::UnitRenderer;

use crate::{reports::StatusReport, settings::Settings};

pub fn status(settings: &Settings) -> StatusReport {
    let exists = settings.registry.exists();
    let registry = Registry::load_or_default(&settings.registry);
    let extension = CSharpRenderer.file_extension();

    StatusReport {
        registry_path: settings.registry.clone(),
        exists,
        output_directory: registry.output_directory.clone(),
        producer_version: registry.producer_version.clone(),
        current_version: settings.producer_version.clone(),
        batch_sizes: registry.batches.iter().map(|b| b.len()).collect(),
        missing: registry.missing_files(extension),
    }
}
