//! Indentation of generated code.

/// One level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// This many spaces per level.
    Spaces(u8),
    Tab,
}

impl Indent {
    /// Four spaces, the .NET convention.
    pub const CSHARP: Self = Self::Spaces(4);

    /// Append `levels` levels of indentation to `buffer`.
    pub fn write_to(&self, buffer: &mut String, levels: usize) {
        match self {
            Self::Spaces(width) => {
                buffer.extend(std::iter::repeat_n(' ', levels * usize::from(*width)))
            }
            Self::Tab => buffer.extend(std::iter::repeat_n('\t', levels)),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::CSHARP
    }
}
