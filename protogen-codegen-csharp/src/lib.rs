//! C# output for protogen.
//!
//! Every compilation unit becomes one `.cs` file: an auto-generated header,
//! `using` directives and a namespace block with a single type.

mod generator;
mod renderer;

pub mod ast;

pub use generator::Generator;
pub use protogen_codegen::{GenerateOutcome, PreviewFile, UnitRenderer};
pub use renderer::CSharpRenderer;
