//! Core utilities and types for protogen.
//!
//! This crate provides fundamental types and utilities used across
//! the protogen workspace.

mod file;
mod utils;
mod version;

// File operations
pub use file::{read_if_exists, remove_if_exists, write_atomic, write_file};
// String utilities
pub use utils::{capitalize, csharp_string_literal, to_pascal_case};
pub use version::{Version, VersionError};
