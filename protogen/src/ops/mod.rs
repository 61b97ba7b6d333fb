//! Core operations.
//!
//! This module contains the business logic for protogen commands,
//! separated from CLI argument parsing and output rendering.

pub mod clean;
pub mod generate;
pub mod status;

pub use clean::clean;
pub use generate::{generate, preview};
pub use status::status;
