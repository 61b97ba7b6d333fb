//! Schema tree node types.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A node in the pre-parsed schema tree.
///
/// Nodes are immutable once built. Parent links are not stored; traversal
/// hands each callback the ancestor path instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SchemaNode>,
}

/// Kind-specific payload of a schema node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeKind {
    /// A package declaration; `path` is dot separated (`operations_research.sat`).
    Package { path: String },
    /// An enum declaration.
    Enum { name: String },
    /// A value inside an enum.
    EnumField { name: String, ordinal: i32 },
    /// A message declaration.
    Message { name: String },
    /// A field inside a message or a field variant group.
    Field(FieldDecl),
    /// A oneof group; its children are fields.
    FieldVariant { name: String },
}

impl NodeKind {
    /// Short lowercase name of the kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            NodeKind::Package { .. } => "package",
            NodeKind::Enum { .. } => "enum",
            NodeKind::EnumField { .. } => "enum field",
            NodeKind::Message { .. } => "message",
            NodeKind::Field(_) => "field",
            NodeKind::FieldVariant { .. } => "field variant",
        }
    }

    /// The node's identifier (package path for packages).
    pub fn name(&self) -> &str {
        match self {
            NodeKind::Package { path } => path,
            NodeKind::Enum { name }
            | NodeKind::EnumField { name, .. }
            | NodeKind::Message { name }
            | NodeKind::FieldVariant { name } => name,
            NodeKind::Field(field) => &field.name,
        }
    }
}

impl SchemaNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    pub fn package(path: impl Into<String>) -> Self {
        Self::new(NodeKind::Package { path: path.into() })
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Enum { name: name.into() })
    }

    pub fn enum_field(name: impl Into<String>, ordinal: i32) -> Self {
        Self::new(NodeKind::EnumField {
            name: name.into(),
            ordinal,
        })
    }

    pub fn message(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Message { name: name.into() })
    }

    pub fn field(decl: FieldDecl) -> Self {
        Self::new(NodeKind::Field(decl))
    }

    pub fn field_variant(name: impl Into<String>) -> Self {
        Self::new(NodeKind::FieldVariant { name: name.into() })
    }

    /// Add a child node.
    pub fn child(mut self, child: SchemaNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn name(&self) -> &str {
        self.kind.name()
    }

    /// Count this node and all of its descendants.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(SchemaNode::node_count).sum::<usize>()
    }
}

/// A field declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    pub ordinal: u32,
    #[serde(default)]
    pub label: Label,
    #[serde(rename = "type")]
    pub ty: FieldType,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub options: IndexMap<String, OptionValue>,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, ordinal: u32, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ordinal,
            label: Label::Optional,
            ty,
            options: IndexMap::new(),
        }
    }

    pub fn scalar(name: impl Into<String>, ordinal: u32, kind: ScalarKind) -> Self {
        Self::new(name, ordinal, FieldType::Scalar(kind))
    }

    pub fn named(name: impl Into<String>, ordinal: u32, type_name: impl Into<String>) -> Self {
        Self::new(name, ordinal, FieldType::Named(type_name.into()))
    }

    pub fn repeated(mut self) -> Self {
        self.label = Label::Repeated;
        self
    }

    pub fn required(mut self) -> Self {
        self.label = Label::Required;
        self
    }

    /// Set an option value.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Raw value of the `default` option, if any.
    pub fn default_value(&self) -> Option<String> {
        self.options.get("default").map(OptionValue::raw)
    }
}

/// Field multiplicity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Singular field, possibly absent.
    #[default]
    #[serde(alias = "singular")]
    Optional,
    Repeated,
    Required,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Optional => write!(f, "optional"),
            Label::Repeated => write!(f, "repeated"),
            Label::Required => write!(f, "required"),
        }
    }
}

/// Declared type of a field: a scalar keyword or a named type reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    Scalar(ScalarKind),
    Named(String),
}

impl From<String> for FieldType {
    fn from(s: String) -> Self {
        match ScalarKind::from_keyword(&s) {
            Some(kind) => FieldType::Scalar(kind),
            None => FieldType::Named(s),
        }
    }
}

impl From<FieldType> for String {
    fn from(ty: FieldType) -> Self {
        ty.to_string()
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Scalar(kind) => write!(f, "{}", kind),
            FieldType::Named(name) => write!(f, "{}", name),
        }
    }
}

/// Protobuf scalar value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Double,
    Float,
    Int32,
    Int64,
    UInt32,
    UInt64,
    SInt32,
    SInt64,
    Fixed32,
    Fixed64,
    SFixed32,
    SFixed64,
    Bool,
    String,
    Bytes,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 15] = [
        ScalarKind::Double,
        ScalarKind::Float,
        ScalarKind::Int32,
        ScalarKind::Int64,
        ScalarKind::UInt32,
        ScalarKind::UInt64,
        ScalarKind::SInt32,
        ScalarKind::SInt64,
        ScalarKind::Fixed32,
        ScalarKind::Fixed64,
        ScalarKind::SFixed32,
        ScalarKind::SFixed64,
        ScalarKind::Bool,
        ScalarKind::String,
        ScalarKind::Bytes,
    ];

    /// The protobuf keyword for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::Double => "double",
            ScalarKind::Float => "float",
            ScalarKind::Int32 => "int32",
            ScalarKind::Int64 => "int64",
            ScalarKind::UInt32 => "uint32",
            ScalarKind::UInt64 => "uint64",
            ScalarKind::SInt32 => "sint32",
            ScalarKind::SInt64 => "sint64",
            ScalarKind::Fixed32 => "fixed32",
            ScalarKind::Fixed64 => "fixed64",
            ScalarKind::SFixed32 => "sfixed32",
            ScalarKind::SFixed64 => "sfixed64",
            ScalarKind::Bool => "bool",
            ScalarKind::String => "string",
            ScalarKind::Bytes => "bytes",
        }
    }

    pub fn from_keyword(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw option value as it appeared in the schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
}

impl OptionValue {
    /// The value as raw text, the way the schema source spelled it.
    pub fn raw(&self) -> String {
        match self {
            OptionValue::Bool(b) => b.to_string(),
            OptionValue::Integer(i) => i.to_string(),
            OptionValue::Unsigned(u) => u.to_string(),
            OptionValue::Float(f) => f.to_string(),
            OptionValue::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Text(s)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

impl From<i64> for OptionValue {
    fn from(i: i64) -> Self {
        OptionValue::Integer(i)
    }
}

impl From<f64> for OptionValue {
    fn from(f: f64) -> Self {
        OptionValue::Float(f)
    }
}
