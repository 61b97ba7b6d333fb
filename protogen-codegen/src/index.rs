//! Schema index: named types and enum ordinals, computed once per schema.
//!
//! The index is built by a pre-pass over the tree and handed to the
//! traversal as explicit context, so one process can generate any number of
//! schemas without sharing state between them.

use std::collections::HashMap;

use protogen_schema::{NodeKind, SchemaNode};

use crate::{
    Result,
    engine::{SchemaVisitor, walk},
    naming::NamingRules,
    unit::TypeRef,
};

/// Where declarations found inside a package or message end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    /// Dot separated proto path of the scope (`operations_research.sat.SatParameters`).
    pub proto_path: String,
    /// Namespace receiving types declared directly in this scope.
    pub namespace: String,
    /// Namespace receiving the per-field classes; only set for message scopes.
    pub fields_namespace: Option<String>,
}

impl Scope {
    pub fn package(path: &str, naming: &NamingRules) -> Self {
        Self {
            proto_path: path.to_string(),
            namespace: naming.namespace(path),
            fields_namespace: None,
        }
    }

    /// The scope opened by a message declared in this scope.
    pub fn message(&self, name: &str, naming: &NamingRules) -> Self {
        let type_name = naming.member(name);
        Self {
            proto_path: self.qualify(name),
            namespace: join(&self.namespace, &format!("{type_name}Types")),
            fields_namespace: Some(join(&self.namespace, &format!("{type_name}Fields"))),
        }
    }

    /// Qualify a name declared in this scope.
    pub fn qualify(&self, name: &str) -> String {
        join(&self.proto_path, name)
    }
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

/// A named type declared somewhere in the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeEntry {
    /// Fully qualified proto name.
    pub proto_name: String,
    /// Namespace of the generated type.
    pub namespace: String,
    /// Name of the generated type.
    pub type_name: String,
    pub kind: TypeKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    /// Enum values in declaration order.
    Enum { values: Vec<EnumValue> },
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    pub proto_name: String,
    pub name: String,
    pub ordinal: i32,
}

impl TypeEntry {
    /// `global::`-qualified C# name. Field classes are named after their
    /// fields, so a bare type name can resolve to the field class itself.
    pub fn global_name(&self) -> String {
        if self.namespace.is_empty() {
            format!("global::{}", self.type_name)
        } else {
            format!("global::{}.{}", self.namespace, self.type_name)
        }
    }

    pub fn type_ref(&self) -> TypeRef {
        TypeRef::named(self.global_name())
    }

    pub fn is_enum(&self) -> bool {
        matches!(self.kind, TypeKind::Enum { .. })
    }

    /// Look up an enum value by its proto name.
    pub fn value(&self, proto_name: &str) -> Option<&EnumValue> {
        match &self.kind {
            TypeKind::Enum { values } => values.iter().find(|v| v.proto_name == proto_name),
            TypeKind::Message => None,
        }
    }

    /// The first declared enum value.
    pub fn first_value(&self) -> Option<&EnumValue> {
        match &self.kind {
            TypeKind::Enum { values } => values.first(),
            TypeKind::Message => None,
        }
    }
}

/// Every named type in one schema, keyed by fully qualified proto name.
#[derive(Debug, Clone, Default)]
pub struct SchemaIndex {
    types: HashMap<String, TypeEntry>,
}

impl SchemaIndex {
    /// Index every enum and message reachable under `root`.
    pub fn build(root: &SchemaNode, naming: &NamingRules) -> Result<Self> {
        let mut builder = IndexBuilder {
            naming,
            scopes: Vec::new(),
            current_enum: None,
            index: SchemaIndex::default(),
        };
        walk(root, &mut builder)?;
        Ok(builder.index)
    }

    pub fn get(&self, proto_name: &str) -> Option<&TypeEntry> {
        self.types.get(proto_name)
    }

    /// Resolve a type reference the way protobuf does: innermost scope first.
    ///
    /// A leading `.` marks a fully qualified reference.
    pub fn resolve(&self, scope: &str, reference: &str) -> Option<&TypeEntry> {
        if let Some(qualified) = reference.strip_prefix('.') {
            return self.get(qualified);
        }
        let mut scope = scope;
        loop {
            if let Some(entry) = self.get(&join(scope, reference)) {
                return Some(entry);
            }
            if scope.is_empty() {
                return None;
            }
            scope = scope.rsplit_once('.').map_or("", |(head, _)| head);
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

struct IndexBuilder<'a> {
    naming: &'a NamingRules,
    scopes: Vec<Scope>,
    current_enum: Option<String>,
    index: SchemaIndex,
}

impl SchemaVisitor for IndexBuilder<'_> {
    fn enter(&mut self, node: &SchemaNode, _ancestors: &[&SchemaNode]) -> Result<()> {
        match &node.kind {
            NodeKind::Package { path } => {
                self.scopes.push(Scope::package(path, self.naming));
            }
            NodeKind::Message { name } => {
                // Messages outside a package are reported by the traversal itself.
                if let Some(scope) = self.scopes.last() {
                    let entry = TypeEntry {
                        proto_name: scope.qualify(name),
                        namespace: scope.namespace.clone(),
                        type_name: self.naming.member(name),
                        kind: TypeKind::Message,
                    };
                    let inner = scope.message(name, self.naming);
                    self.index.types.insert(entry.proto_name.clone(), entry);
                    self.scopes.push(inner);
                }
            }
            NodeKind::Enum { name } => {
                if let Some(scope) = self.scopes.last() {
                    let entry = TypeEntry {
                        proto_name: scope.qualify(name),
                        namespace: scope.namespace.clone(),
                        type_name: self.naming.member(name),
                        kind: TypeKind::Enum { values: Vec::new() },
                    };
                    self.current_enum = Some(entry.proto_name.clone());
                    self.index.types.insert(entry.proto_name.clone(), entry);
                }
            }
            NodeKind::EnumField { name, ordinal } => {
                let entry = self
                    .current_enum
                    .as_ref()
                    .and_then(|key| self.index.types.get_mut(key));
                if let Some(TypeEntry {
                    kind: TypeKind::Enum { values },
                    ..
                }) = entry
                {
                    values.push(EnumValue {
                        proto_name: name.clone(),
                        name: self.naming.member(name),
                        ordinal: *ordinal,
                    });
                }
            }
            NodeKind::Field(_) | NodeKind::FieldVariant { .. } => {}
        }
        Ok(())
    }

    fn exit(&mut self, node: &SchemaNode, ancestors: &[&SchemaNode]) -> Result<()> {
        match &node.kind {
            NodeKind::Package { .. } => {
                self.scopes.pop();
            }
            NodeKind::Message { .. } => {
                let in_package = ancestors
                    .iter()
                    .any(|a| matches!(a.kind, NodeKind::Package { .. }));
                if in_package {
                    self.scopes.pop();
                }
            }
            NodeKind::Enum { .. } => {
                self.current_enum = None;
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use protogen_schema::{NamespaceRemap, SchemaNode};

    use super::*;

    fn naming() -> NamingRules {
        NamingRules::new(&[NamespaceRemap::new("operations_research.sat", "Google.OrTools.Sat")])
    }

    fn schema() -> SchemaNode {
        SchemaNode::package("operations_research.sat")
            .child(
                SchemaNode::enumeration("Status")
                    .child(SchemaNode::enum_field("UNKNOWN", 0))
                    .child(SchemaNode::enum_field("OPTIMAL", 4)),
            )
            .child(
                SchemaNode::message("SatParameters").child(
                    SchemaNode::enumeration("Polarity")
                        .child(SchemaNode::enum_field("POLARITY_TRUE", 0))
                        .child(SchemaNode::enum_field("POLARITY_FALSE", 1)),
                ),
            )
    }

    #[test]
    fn test_scope_namespaces() {
        let naming = naming();
        let package = Scope::package("operations_research.sat", &naming);
        assert_eq!(package.namespace, "Google.OrTools.Sat");
        assert_eq!(package.fields_namespace, None);

        let message = package.message("sat_parameters", &naming);
        assert_eq!(message.proto_path, "operations_research.sat.sat_parameters");
        assert_eq!(message.namespace, "Google.OrTools.Sat.SatParametersTypes");
        assert_eq!(
            message.fields_namespace.as_deref(),
            Some("Google.OrTools.Sat.SatParametersFields")
        );
    }

    #[test]
    fn test_index_collects_types_and_ordinals() {
        let index = SchemaIndex::build(&schema(), &naming()).unwrap();
        assert_eq!(index.len(), 3);

        let status = index.get("operations_research.sat.Status").unwrap();
        assert_eq!(status.namespace, "Google.OrTools.Sat");
        let optimal = status.value("OPTIMAL").unwrap();
        assert_eq!(optimal.name, "Optimal");
        assert_eq!(optimal.ordinal, 4);

        let polarity = index
            .get("operations_research.sat.SatParameters.Polarity")
            .unwrap();
        assert_eq!(polarity.namespace, "Google.OrTools.Sat.SatParametersTypes");
        assert_eq!(polarity.first_value().unwrap().name, "PolarityTrue");
    }

    #[test]
    fn test_resolve_innermost_first() {
        let index = SchemaIndex::build(&schema(), &naming()).unwrap();
        let scope = "operations_research.sat.SatParameters";

        let polarity = index.resolve(scope, "Polarity").unwrap();
        assert_eq!(polarity.proto_name, "operations_research.sat.SatParameters.Polarity");

        let status = index.resolve(scope, "Status").unwrap();
        assert_eq!(status.proto_name, "operations_research.sat.Status");

        let qualified = index.resolve(scope, ".operations_research.sat.Status").unwrap();
        assert_eq!(qualified.proto_name, "operations_research.sat.Status");

        assert!(index.resolve(scope, "Missing").is_none());
    }

    #[test]
    fn test_indexes_are_independent() {
        let first = SchemaIndex::build(&schema(), &naming()).unwrap();
        let other = SchemaNode::package("demo").child(SchemaNode::message("Only"));
        let second = SchemaIndex::build(&other, &naming()).unwrap();

        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 1);
        assert!(second.get("operations_research.sat.Status").is_none());
    }
}
