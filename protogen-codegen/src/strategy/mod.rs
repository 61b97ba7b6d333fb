//! Generation strategies.
//!
//! - [`declaration`] - enum and message declarations
//! - [`field`] - per-field strategies selected by type and label
//! - [`literal`] - default value literal table
//! - [`types`] - scalar type mapping

pub mod declaration;
pub mod field;
pub mod literal;
pub mod types;

pub use declaration::{enum_decl, enum_member, message_class};
pub use field::{FieldArtifact, FieldContext, FieldShape, FieldStrategy, build_field};
pub use literal::{LITERAL_TABLE, LiteralError, literal, zero_literal};
pub use types::csharp_type;
