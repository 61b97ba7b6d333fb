use std::path::Path;

use protogen_codegen::{
    CleanOutcome, GenerateOutcome, GeneratorOptions, PreviewFile, Result, UnitRenderer, clean,
    generate_or_skip, preview,
};
use protogen_core::Version;
use protogen_schema::SchemaTree;

use crate::CSharpRenderer;

/// C# generator for one schema.
pub struct Generator<'a> {
    tree: &'a SchemaTree,
    options: GeneratorOptions,
    renderer: CSharpRenderer,
}

impl<'a> Generator<'a> {
    pub fn new(tree: &'a SchemaTree) -> Self {
        Self::with_options(tree, GeneratorOptions::default())
    }

    pub fn with_options(tree: &'a SchemaTree, options: GeneratorOptions) -> Self {
        Self {
            tree,
            options,
            renderer: CSharpRenderer,
        }
    }

    pub fn language(&self) -> &'static str {
        self.renderer.language()
    }

    pub fn file_extension(&self) -> &'static str {
        self.renderer.file_extension()
    }

    /// Render every unit without writing anything.
    pub fn preview(&self) -> Result<Vec<PreviewFile>> {
        preview(self.tree, &self.options, &self.renderer)
    }

    /// Regenerate `output_dir` unless it already matches the schema.
    pub fn generate(
        &self,
        output_dir: &Path,
        registry_path: &Path,
        producer_version: &Version,
    ) -> Result<GenerateOutcome> {
        generate_or_skip(
            output_dir,
            registry_path,
            self.tree,
            producer_version,
            &self.options,
            &self.renderer,
        )
    }

    /// Remove every file recorded in the registry.
    pub fn clean(&self, registry_path: &Path) -> Result<CleanOutcome> {
        clean(registry_path, self.file_extension())
    }
}
