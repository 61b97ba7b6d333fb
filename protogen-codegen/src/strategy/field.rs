//! Field generation strategies.
//!
//! A field's strategy is chosen by its declared type (scalar, enum or
//! message) crossed with its label. Every strategy yields the same shape: a
//! sealed class deriving from `Parameter<T>` or `RepeatedParameter<T>` with
//! two constructors, plus the property exposing it on the message.

use protogen_schema::{FieldDecl, FieldType, Label, ScalarKind};

use super::{
    literal::{LiteralError, literal, zero_literal},
    types::scalar_ref,
};
use crate::{
    Error, Result,
    index::{Scope, SchemaIndex, TypeEntry, TypeKind},
    options::GeneratorOptions,
    unit::{ClassDecl, CompilationUnit, ConstructorSpec, Property, TypeRef},
};

pub const PARAMETER: &str = "Parameter";
pub const REPEATED_PARAMETER: &str = "RepeatedParameter";

/// Inputs shared by every field of one message.
#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    pub index: &'a SchemaIndex,
    pub options: &'a GeneratorOptions,
    /// Scope of the owning message.
    pub scope: &'a Scope,
}

/// The strategy selected for one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldStrategy<'a> {
    ScalarSingular(ScalarKind),
    ScalarRepeated(ScalarKind),
    EnumSingular(&'a TypeEntry),
    MessageSingular(&'a TypeEntry),
    NamedRepeated(&'a TypeEntry),
}

/// What one field contributes: the class declaring it and the message property.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldArtifact {
    pub property: Property,
    pub unit: CompilationUnit,
}

/// Base type, element type and first constructor argument of a field class.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldShape {
    pub base: TypeRef,
    pub element: TypeRef,
    pub default: String,
    pub repeated: bool,
    pub usings: Vec<String>,
}

impl<'a> FieldStrategy<'a> {
    pub fn select(field: &FieldDecl, ctx: &FieldContext<'a>) -> Result<Self> {
        if field.label == Label::Required {
            return Err(field_error(field, ctx, "the 'required' label is not supported"));
        }
        let repeated = field.label == Label::Repeated;
        let strategy = match &field.ty {
            FieldType::Scalar(kind) if repeated => FieldStrategy::ScalarRepeated(*kind),
            FieldType::Scalar(kind) => FieldStrategy::ScalarSingular(*kind),
            FieldType::Named(name) => {
                let entry = ctx
                    .index
                    .resolve(&ctx.scope.proto_path, name)
                    .ok_or_else(|| field_error(field, ctx, format!("unknown type '{name}'")))?;
                match entry.kind {
                    _ if repeated => FieldStrategy::NamedRepeated(entry),
                    TypeKind::Enum { .. } => FieldStrategy::EnumSingular(entry),
                    TypeKind::Message => FieldStrategy::MessageSingular(entry),
                }
            }
        };
        Ok(strategy)
    }

    /// Resolve the base type, element type and default argument.
    pub fn shape(&self, field: &FieldDecl, ctx: &FieldContext<'_>) -> Result<FieldShape> {
        let default = field.default_value();
        let shape = match *self {
            FieldStrategy::ScalarSingular(kind) => {
                let converted = match &default {
                    Some(raw) => literal(kind, raw),
                    None => zero_literal(kind),
                };
                let default = converted.map_err(|e| literal_error(e, field, ctx))?;
                singular(scalar_ref(kind), default)
            }
            FieldStrategy::EnumSingular(entry) => {
                let value = match &default {
                    Some(raw) => entry.value(raw).ok_or_else(|| {
                        field_error(
                            field,
                            ctx,
                            format!("default '{raw}' is not a member of '{}'", entry.proto_name),
                        )
                    })?,
                    None => entry.first_value().ok_or_else(|| {
                        let message = format!("enum '{}' has no members", entry.proto_name);
                        field_error(field, ctx, message)
                    })?,
                };
                let default = format!("{}.{}", entry.global_name(), value.name);
                singular(entry.type_ref(), default)
            }
            FieldStrategy::MessageSingular(entry) => {
                reject_default(&default, field, ctx, "message-typed")?;
                singular(entry.type_ref(), format!("new {}()", entry.global_name()))
            }
            FieldStrategy::ScalarRepeated(kind) => {
                reject_default(&default, field, ctx, "repeated")?;
                repeated(scalar_ref(kind))
            }
            FieldStrategy::NamedRepeated(entry) => {
                reject_default(&default, field, ctx, "repeated")?;
                repeated(entry.type_ref())
            }
        };
        Ok(shape)
    }
}

fn singular(element: TypeRef, default: String) -> FieldShape {
    FieldShape {
        base: TypeRef::generic(PARAMETER, vec![element.clone()]),
        element,
        default,
        repeated: false,
        usings: Vec::new(),
    }
}

fn repeated(element: TypeRef) -> FieldShape {
    FieldShape {
        base: TypeRef::generic(REPEATED_PARAMETER, vec![element.clone()]),
        default: format!("Array.Empty<{element}>()"),
        element,
        repeated: true,
        usings: vec!["System".to_string(), "System.Collections.Generic".to_string()],
    }
}

impl FieldShape {
    /// The `()` and value constructors of the field class.
    pub fn constructors(&self, ordinal: u32) -> [ConstructorSpec; 2] {
        let (param, ty) = if self.repeated {
            (
                "values",
                TypeRef::generic("IEnumerable", vec![self.element.clone()]),
            )
        } else {
            ("value", self.element.clone())
        };
        [
            ConstructorSpec::new().delegate_this([self.default.clone()]),
            ConstructorSpec::new()
                .param(param, ty)
                .delegate_base([param.to_string(), ordinal.to_string()]),
        ]
    }
}

/// Build the class and property for one field.
pub fn build_field(field: &FieldDecl, ctx: &FieldContext<'_>) -> Result<FieldArtifact> {
    let namespace = ctx
        .scope
        .fields_namespace
        .clone()
        .ok_or_else(|| field_error(field, ctx, "field declared outside of a message"))?;
    let strategy = FieldStrategy::select(field, ctx)?;
    let shape = strategy.shape(field, ctx)?;

    let class_name = ctx.options.naming.member(&field.name);
    let class = ClassDecl::new(&class_name)
        .doc(format!(
            "{} {} {} = {};",
            field.label, field.ty, field.name, field.ordinal
        ))
        .base(shape.base.clone())
        .constructors(shape.constructors(field.ordinal));

    let mut unit = CompilationUnit::new(namespace, class).using(&ctx.options.runtime_namespace);
    for using in &shape.usings {
        unit.add_using(using);
    }

    let property = Property::new(&class_name, TypeRef::named(&class_name))
        .initializer(format!("new {class_name}()"));

    Ok(FieldArtifact { property, unit })
}

fn reject_default(
    default: &Option<String>,
    field: &FieldDecl,
    ctx: &FieldContext<'_>,
    what: &str,
) -> Result<()> {
    match default {
        Some(_) => Err(field_error(
            field,
            ctx,
            format!("{what} fields cannot declare a default"),
        )),
        None => Ok(()),
    }
}

fn literal_error(err: LiteralError, field: &FieldDecl, ctx: &FieldContext<'_>) -> Error {
    match err {
        LiteralError::Unsupported(kind) => Error::UnsupportedValue { kind },
        invalid @ LiteralError::Invalid { .. } => field_error(field, ctx, invalid.to_string()),
    }
}

fn field_error(field: &FieldDecl, ctx: &FieldContext<'_>, message: impl Into<String>) -> Error {
    Error::schema(format!("field '{}'", ctx.scope.qualify(&field.name)), message)
}

#[cfg(test)]
mod tests {
    use protogen_schema::{NamespaceRemap, SchemaNode};

    use super::*;
    use crate::unit::{DelegationTarget, TypeDecl};

    struct Fixture {
        index: SchemaIndex,
        options: GeneratorOptions,
        scope: Scope,
    }

    impl Fixture {
        fn new() -> Self {
            let mut options = GeneratorOptions::default();
            options.naming =
                crate::naming::NamingRules::new(&[NamespaceRemap::new("demo", "Demo")]);
            let root = SchemaNode::package("demo")
                .child(
                    SchemaNode::enumeration("Mode")
                        .child(SchemaNode::enum_field("FAST", 0))
                        .child(SchemaNode::enum_field("THOROUGH", 1)),
                )
                .child(SchemaNode::enumeration("Empty"))
                .child(SchemaNode::message("Limits"))
                .child(SchemaNode::message("Params"));
            let index = SchemaIndex::build(&root, &options.naming).unwrap();
            let scope = Scope::package("demo", &options.naming).message("Params", &options.naming);
            Self {
                index,
                options,
                scope,
            }
        }

        fn ctx(&self) -> FieldContext<'_> {
            FieldContext {
                index: &self.index,
                options: &self.options,
                scope: &self.scope,
            }
        }
    }

    fn class(artifact: &FieldArtifact) -> &ClassDecl {
        match &artifact.unit.decl {
            TypeDecl::Class(class) => class,
            TypeDecl::Enum(_) => panic!("expected a class"),
        }
    }

    #[test]
    fn test_scalar_singular_with_default() {
        let fixture = Fixture::new();
        let field = FieldDecl::scalar("max_time_in_seconds", 36, ScalarKind::Double)
            .option("default", "inf");
        let artifact = build_field(&field, &fixture.ctx()).unwrap();
        let class = class(&artifact);

        assert_eq!(artifact.unit.namespace, "Demo.ParamsFields");
        assert_eq!(artifact.unit.usings, vec!["Protogen.Runtime"]);
        assert_eq!(class.name, "MaxTimeInSeconds");
        assert_eq!(class.base.as_ref().unwrap().to_string(), "Parameter<double>");

        let this = class.constructors[0].delegation.as_ref().unwrap();
        assert_eq!(this.target, DelegationTarget::This);
        assert_eq!(this.args, vec!["double.PositiveInfinity"]);

        let base = class.constructors[1].delegation.as_ref().unwrap();
        assert_eq!(base.target, DelegationTarget::Base);
        assert_eq!(base.args, vec!["value", "36"]);

        assert_eq!(artifact.property.name, "MaxTimeInSeconds");
        assert_eq!(artifact.property.initializer.as_deref(), Some("new MaxTimeInSeconds()"));
    }

    #[test]
    fn test_scalar_repeated() {
        let fixture = Fixture::new();
        let field = FieldDecl::scalar("weights", 3, ScalarKind::Int64).repeated();
        let artifact = build_field(&field, &fixture.ctx()).unwrap();
        let class = class(&artifact);

        assert_eq!(class.base.as_ref().unwrap().to_string(), "RepeatedParameter<long>");
        assert_eq!(
            class.constructors[0].delegation.as_ref().unwrap().args,
            vec!["Array.Empty<long>()"]
        );
        assert_eq!(class.constructors[1].params[0].name, "values");
        assert_eq!(class.constructors[1].params[0].ty.to_string(), "IEnumerable<long>");
        assert_eq!(
            artifact.unit.usings,
            vec!["Protogen.Runtime", "System", "System.Collections.Generic"]
        );
    }

    #[test]
    fn test_enum_default_and_fallback() {
        let fixture = Fixture::new();

        let explicit = FieldDecl::named("mode", 1, "Mode").option("default", "THOROUGH");
        let artifact = build_field(&explicit, &fixture.ctx()).unwrap();
        assert_eq!(
            class(&artifact).constructors[0].delegation.as_ref().unwrap().args,
            vec!["global::Demo.Mode.Thorough"]
        );
        assert_eq!(artifact.unit.usings, vec!["Protogen.Runtime"]);

        let implicit = FieldDecl::named("mode", 1, "Mode");
        let artifact = build_field(&implicit, &fixture.ctx()).unwrap();
        assert_eq!(
            class(&artifact).constructors[0].delegation.as_ref().unwrap().args,
            vec!["global::Demo.Mode.Fast"]
        );
    }

    #[test]
    fn test_field_named_after_its_type_does_not_shadow_it() {
        let fixture = Fixture::new();
        let field = FieldDecl::named("limits", 9, "Limits");
        let artifact = build_field(&field, &fixture.ctx()).unwrap();
        let class = class(&artifact);

        assert_eq!(class.name, "Limits");
        assert_eq!(
            class.base.as_ref().unwrap().to_string(),
            "Parameter<global::Demo.Limits>"
        );
        assert_eq!(
            class.constructors[0].delegation.as_ref().unwrap().args,
            vec!["new global::Demo.Limits()"]
        );
        assert_eq!(class.constructors[1].params[0].ty.to_string(), "global::Demo.Limits");

        let repeated = FieldDecl::named("mode", 3, "Mode").repeated();
        let artifact = build_field(&repeated, &fixture.ctx()).unwrap();
        assert_eq!(
            self::class(&artifact).base.as_ref().unwrap().to_string(),
            "RepeatedParameter<global::Demo.Mode>"
        );
    }

    #[test]
    fn test_enum_default_must_be_member() {
        let fixture = Fixture::new();
        let field = FieldDecl::named("mode", 1, "Mode").option("default", "SLOW");
        let err = build_field(&field, &fixture.ctx()).unwrap_err();
        assert!(matches!(err, Error::Schema { .. }));
    }

    #[test]
    fn test_enum_without_members_rejected() {
        let fixture = Fixture::new();
        let field = FieldDecl::named("nothing", 1, "Empty");
        assert!(matches!(
            build_field(&field, &fixture.ctx()),
            Err(Error::Schema { .. })
        ));
    }

    #[test]
    fn test_message_field() {
        let fixture = Fixture::new();
        let field = FieldDecl::named("limits", 9, ".demo.Limits");
        let artifact = build_field(&field, &fixture.ctx()).unwrap();
        assert_eq!(
            class(&artifact).constructors[0].delegation.as_ref().unwrap().args,
            vec!["new global::Demo.Limits()"]
        );

        let with_default = FieldDecl::named("limits", 9, "Limits").option("default", "x");
        assert!(matches!(
            build_field(&with_default, &fixture.ctx()),
            Err(Error::Schema { .. })
        ));
    }

    #[test]
    fn test_required_rejected() {
        let fixture = Fixture::new();
        let field = FieldDecl::scalar("seed", 2, ScalarKind::Int32).required();
        let err = build_field(&field, &fixture.ctx()).unwrap_err();
        match err {
            Error::Schema { node, message } => {
                assert_eq!(node, "field 'demo.Params.seed'");
                assert!(message.contains("required"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_type_rejected() {
        let fixture = Fixture::new();
        let field = FieldDecl::named("other", 2, "Nope");
        assert!(matches!(
            build_field(&field, &fixture.ctx()),
            Err(Error::Schema { .. })
        ));
    }

    #[test]
    fn test_singular_bytes_unsupported() {
        let fixture = Fixture::new();
        let field = FieldDecl::scalar("blob", 4, ScalarKind::Bytes);
        assert!(matches!(
            build_field(&field, &fixture.ctx()),
            Err(Error::UnsupportedValue {
                kind: ScalarKind::Bytes
            })
        ));

        let repeated = FieldDecl::scalar("blobs", 5, ScalarKind::Bytes).repeated();
        assert!(build_field(&repeated, &fixture.ctx()).is_ok());
    }

    #[test]
    fn test_invalid_scalar_default() {
        let fixture = Fixture::new();
        let field = FieldDecl::scalar("count", 4, ScalarKind::UInt32).option("default", -1i64);
        assert!(matches!(
            build_field(&field, &fixture.ctx()),
            Err(Error::Schema { .. })
        ));
    }
}
