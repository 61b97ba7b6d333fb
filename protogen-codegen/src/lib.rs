//! Schema-driven code generation for protogen.
//!
//! This crate turns a [`SchemaTree`](protogen_schema::SchemaTree) into
//! compilation units and decides, run over run, whether they need to be
//! written again.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`naming`] - Identifier rewrite rule chains
//! - [`unit`] - Declarative compilation unit and constructor specifications
//! - [`index`] - Schema index threaded through traversal as explicit context
//! - [`strategy`] - Per-field generation strategies and default literals
//! - [`engine`] - Traversal and reduction stack
//! - [`generation`] - Asset keys, registry and the regeneration decision
//! - [`language`] - Renderer abstraction implemented by target languages

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod builder;
pub mod engine;
pub mod generation;
pub mod index;
pub mod language;
pub mod naming;
pub mod strategy;
pub mod unit;

mod error;
mod options;

pub use engine::{NodeBalance, Traversal, generate_units};
pub use error::{Error, Result};
pub use generation::{
    AssetKey, CleanOutcome, GenerateOutcome, GeneratedBatch, PreviewFile, RegenerationReason,
    Registry, RegistryState, clean, generate_or_skip, preview,
};
pub use language::{UnitRenderer, normalize_text};
pub use options::GeneratorOptions;
