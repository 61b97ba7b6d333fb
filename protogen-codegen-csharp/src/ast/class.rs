use protogen_codegen::{
    builder::{CodeFragment, Renderable},
    unit::ClassDecl,
};

use super::{Constructor, Property, summary};

/// A `public sealed class`. Constructors come first, then properties, one
/// blank line between members.
pub struct Class<'a>(pub &'a ClassDecl);

impl Renderable for Class<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let class = self.0;

        let members: Vec<Vec<CodeFragment>> = class
            .constructors
            .iter()
            .map(|spec| Constructor::new(&class.name, spec).to_fragments())
            .chain(class.properties.iter().map(|p| Property(p).to_fragments()))
            .collect();

        let mut body = Vec::new();
        for (i, member) in members.into_iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::blank());
            }
            body.extend(member);
        }

        let header = match &class.base {
            Some(base) => format!("public sealed class {} : {}", class.name, base),
            None => format!("public sealed class {}", class.name),
        };

        let mut fragments = Vec::new();
        if let Some(doc) = &class.doc {
            fragments.push(summary(doc));
        }
        fragments.push(CodeFragment::braced(header, body));
        fragments
    }
}
