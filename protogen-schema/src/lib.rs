//! Schema tree types, loading and project configuration for protogen.
//!
//! The schema tree is produced by an external protobuf parser and handed to
//! protogen as a JSON document. This crate only deserializes it; it performs
//! no semantic validation.
//!
//! ```text
//! schema.json → protogen-schema (SchemaTree) → protogen-codegen → C# files
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod node;
mod tree;

pub use config::{GeneratorConfig, NamespaceRemap, ProjectConfig, RewriteConfig};
pub use error::{Error, Result, SourceContext};
pub use node::{FieldDecl, FieldType, Label, NodeKind, OptionValue, ScalarKind, SchemaNode};
pub use tree::SchemaTree;
