use protogen_codegen::{
    builder::{CodeFragment, Renderable},
    unit::{self, ConstructorSpec, DelegationTarget},
};

use super::summary;

/// A constructor of the class named `class_name`.
///
/// Delegation goes on its own indented line:
///
/// ```text
/// public Seed(int value)
///     : base(value, 12)
/// {
/// }
/// ```
pub struct Constructor<'a> {
    class_name: &'a str,
    spec: &'a ConstructorSpec,
}

impl<'a> Constructor<'a> {
    pub fn new(class_name: &'a str, spec: &'a ConstructorSpec) -> Self {
        Self { class_name, spec }
    }
}

impl Renderable for Constructor<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let params = self
            .spec
            .params
            .iter()
            .map(|p| format!("{} {}", p.ty, p.name))
            .collect::<Vec<_>>()
            .join(", ");

        let mut fragments = vec![CodeFragment::line(format!(
            "public {}({})",
            self.class_name, params
        ))];
        if let Some(delegation) = &self.spec.delegation {
            let target = match delegation.target {
                DelegationTarget::This => "this",
                DelegationTarget::Base => "base",
            };
            fragments.push(CodeFragment::indent(vec![CodeFragment::line(format!(
                ": {}({})",
                target,
                delegation.args.join(", ")
            ))]));
        }
        fragments.push(CodeFragment::line("{"));
        fragments.push(CodeFragment::line("}"));
        fragments
    }
}

/// A get-only auto property.
pub struct Property<'a>(pub &'a unit::Property);

impl Renderable for Property<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let property = self.0;
        let mut fragments = Vec::new();
        if let Some(doc) = &property.doc {
            fragments.push(summary(doc));
        }
        let initializer = property
            .initializer
            .as_ref()
            .map(|expr| format!(" = {expr};"))
            .unwrap_or_default();
        fragments.push(CodeFragment::line(format!(
            "public {} {} {{ get; }}{}",
            property.ty, property.name, initializer
        )));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use protogen_codegen::{builder::CodeBuilder, unit::TypeRef};

    use super::*;

    fn render(node: &impl Renderable) -> String {
        let mut builder = CodeBuilder::csharp();
        builder.emit(node);
        builder.build()
    }

    #[test]
    fn test_constructor_with_base_delegation() {
        let spec = ConstructorSpec::new()
            .param("value", TypeRef::named("int"))
            .delegate_base(["value", "12"]);
        assert_eq!(
            render(&Constructor::new("Seed", &spec)),
            "public Seed(int value)\n    : base(value, 12)\n{\n}\n"
        );
    }

    #[test]
    fn test_constructor_without_delegation() {
        let spec = ConstructorSpec::new();
        assert_eq!(render(&Constructor::new("Empty", &spec)), "public Empty()\n{\n}\n");
    }

    #[test]
    fn test_property_with_initializer() {
        let property =
            unit::Property::new("Seed", TypeRef::named("Seed")).initializer("new Seed()");
        assert_eq!(
            render(&Property(&property)),
            "public Seed Seed { get; } = new Seed();\n"
        );
    }
}
