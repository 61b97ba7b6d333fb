//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Declarations are turned into fragments first and only then written out
//! by a [`CodeBuilder`](super::CodeBuilder), so they never touch indentation.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Indent the contained fragments.
    Indent(Vec<CodeFragment>),
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
    /// A `///` documentation comment; one line per text line.
    Doc(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    /// Create a block fragment.
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// A brace-delimited block: the header, `{`, the body, `}` on its own line.
    ///
    /// This is the layout C# uses for namespaces, types and members.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Sequence(vec![
            Self::Line(header.into()),
            Self::block("{", body, Some("}".to_string())),
        ])
    }

    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }

    pub fn sequence(fragments: Vec<CodeFragment>) -> Self {
        Self::Sequence(fragments)
    }

    pub fn doc(s: impl Into<String>) -> Self {
        Self::Doc(s.into())
    }
}

/// Trait for AST nodes that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a list of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable> Renderable for [T] {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.iter().flat_map(Renderable::to_fragments).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_braced_layout() {
        let fragment = CodeFragment::braced("class A", vec![CodeFragment::line("int x;")]);
        assert_eq!(
            fragment,
            CodeFragment::Sequence(vec![
                CodeFragment::Line("class A".to_string()),
                CodeFragment::Block {
                    header: "{".to_string(),
                    body: vec![CodeFragment::Line("int x;".to_string())],
                    close: Some("}".to_string()),
                },
            ])
        );
    }
}
