//! C# syntax for compilation units.
//!
//! Each type borrows a declarative description from `protogen_codegen::unit`
//! and turns it into [`CodeFragment`](protogen_codegen::builder::CodeFragment)s.

mod class;
mod enums;
mod members;
mod source;

pub use class::Class;
pub use enums::Enum;
pub use members::{Constructor, Property};
pub use source::SourceFile;

use protogen_codegen::builder::CodeFragment;

/// A `/// <summary>` block for `text`.
pub(crate) fn summary(text: &str) -> CodeFragment {
    CodeFragment::doc(format!("<summary>\n{}\n</summary>", xml_escape(text)))
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
