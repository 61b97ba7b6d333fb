use protogen_codegen::{
    builder::{CodeFragment, Renderable},
    unit::{CompilationUnit, TypeDecl},
};

use super::{Class, Enum};

const HEADER: &[&str] = &[
    "// <auto-generated>",
    "//     Generated by protogen. Do not edit.",
    "// </auto-generated>",
];

/// A whole `.cs` file: header, usings and one namespace holding the type.
pub struct SourceFile<'a>(pub &'a CompilationUnit);

impl SourceFile<'_> {
    /// `System` directives first, then the rest, each group in order.
    fn usings(&self) -> Vec<&str> {
        let (system, other): (Vec<&str>, Vec<&str>) = self
            .0
            .usings
            .iter()
            .map(String::as_str)
            .partition(|u| *u == "System" || u.starts_with("System."));
        system.into_iter().chain(other).collect()
    }
}

impl Renderable for SourceFile<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let unit = self.0;
        let mut fragments: Vec<CodeFragment> =
            HEADER.iter().map(|line| CodeFragment::line(*line)).collect();
        fragments.push(CodeFragment::blank());

        let usings = self.usings();
        if !usings.is_empty() {
            fragments.extend(usings.iter().map(|u| CodeFragment::line(format!("using {u};"))));
            fragments.push(CodeFragment::blank());
        }

        let decl = match &unit.decl {
            TypeDecl::Class(class) => Class(class).to_fragments(),
            TypeDecl::Enum(decl) => Enum(decl).to_fragments(),
        };
        if unit.namespace.is_empty() {
            fragments.extend(decl);
        } else {
            fragments.push(CodeFragment::braced(format!("namespace {}", unit.namespace), decl));
        }
        fragments
    }
}
