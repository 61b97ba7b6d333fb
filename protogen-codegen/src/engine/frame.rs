//! Generation frames: the partial artifacts living on the reduction stack.

use std::fmt;

use indexmap::IndexMap;

use crate::{
    generation::AssetKey,
    strategy::FieldArtifact,
    unit::{ClassDecl, CompilationUnit, EnumDecl, EnumMember},
};

/// One open generation context.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationFrame {
    Root(RootFrame),
    Enum(EnumFrame),
    EnumMember(EnumMember),
    Message(MessageFrame),
    Variant(VariantFrame),
    Field(FieldArtifact),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameTag {
    Root,
    Enum,
    EnumMember,
    Message,
    Variant,
    Field,
}

impl GenerationFrame {
    pub fn tag(&self) -> FrameTag {
        match self {
            GenerationFrame::Root(_) => FrameTag::Root,
            GenerationFrame::Enum(_) => FrameTag::Enum,
            GenerationFrame::EnumMember(_) => FrameTag::EnumMember,
            GenerationFrame::Message(_) => FrameTag::Message,
            GenerationFrame::Variant(_) => FrameTag::Variant,
            GenerationFrame::Field(_) => FrameTag::Field,
        }
    }
}

impl fmt::Display for FrameTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FrameTag::Root => "root",
            FrameTag::Enum => "enum",
            FrameTag::EnumMember => "enum member",
            FrameTag::Message => "message",
            FrameTag::Variant => "field variant",
            FrameTag::Field => "field",
        };
        f.write_str(name)
    }
}

/// Completed units keyed by the asset key minted when they were folded in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootFrame {
    pub units: IndexMap<AssetKey, CompilationUnit>,
}

impl RootFrame {
    /// Insert a completed unit under a freshly minted key.
    pub fn mint(&mut self, unit: CompilationUnit) -> AssetKey {
        let key = AssetKey::mint();
        tracing::debug!(%key, unit = %unit.qualified_name(), "minted asset key");
        self.units.insert(key, unit);
        key
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumFrame {
    pub namespace: String,
    pub decl: EnumDecl,
}

impl EnumFrame {
    pub fn into_unit(self) -> CompilationUnit {
        CompilationUnit::new(self.namespace, self.decl)
    }
}

/// A message class under construction, plus every unit declared inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageFrame {
    pub namespace: String,
    pub usings: Vec<String>,
    pub class: ClassDecl,
    pub nested: Vec<CompilationUnit>,
}

impl MessageFrame {
    pub fn new(namespace: impl Into<String>, class: ClassDecl) -> Self {
        Self {
            namespace: namespace.into(),
            usings: Vec::new(),
            class,
            nested: Vec::new(),
        }
    }

    /// Add a field's property and stash its class unit.
    pub fn add_field(&mut self, field: FieldArtifact) {
        self.usings.push(field.unit.namespace.clone());
        self.class.properties.push(field.property);
        self.nested.push(field.unit);
    }

    /// The message unit first, then nested units in declaration order.
    pub fn into_units(self) -> Vec<CompilationUnit> {
        let mut unit = CompilationUnit::new(self.namespace, self.class);
        for using in self.usings {
            unit.add_using(using);
        }
        let mut units = Vec::with_capacity(self.nested.len() + 1);
        units.push(unit);
        units.extend(self.nested);
        units
    }
}

/// A oneof group collecting its member fields.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantFrame {
    pub name: String,
    pub fields: Vec<FieldArtifact>,
}

impl VariantFrame {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }
}
