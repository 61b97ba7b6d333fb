use protogen_codegen::{
    builder::{CodeFragment, Renderable},
    unit::EnumDecl,
};

use super::summary;

/// A `public enum` with explicit member values.
pub struct Enum<'a>(pub &'a EnumDecl);

impl Renderable for Enum<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let decl = self.0;
        let members = decl
            .members
            .iter()
            .map(|m| CodeFragment::line(format!("{} = {},", m.name, m.ordinal)))
            .collect();

        let mut fragments = Vec::new();
        if let Some(doc) = &decl.doc {
            fragments.push(summary(doc));
        }
        fragments.push(CodeFragment::braced(format!("public enum {}", decl.name), members));
        fragments
    }
}
