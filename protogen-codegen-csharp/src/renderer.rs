use protogen_codegen::{
    builder::CodeBuilder,
    language::{UnitRenderer, normalize_text},
    unit::CompilationUnit,
};

use crate::ast::SourceFile;

/// Renders compilation units as C# source files.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpRenderer;

impl UnitRenderer for CSharpRenderer {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn file_extension(&self) -> &'static str {
        "cs"
    }

    fn render(&self, unit: &CompilationUnit) -> String {
        let mut builder = CodeBuilder::csharp();
        builder.emit(&SourceFile(unit));
        normalize_text(&builder.build())
    }
}
