//! Target language abstraction.

use crate::unit::CompilationUnit;

/// Turns compilation units into source text for one target language.
///
/// Rendering must be deterministic: the regeneration decision compares
/// rendered text with files already on disk.
pub trait UnitRenderer {
    /// Language identifier (e.g., "csharp")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "cs")
    fn file_extension(&self) -> &'static str;

    /// Render one unit. Callers normalize the result with [`normalize_text`].
    fn render(&self, unit: &CompilationUnit) -> String;
}

/// Normalize rendered text: `\n` line endings, no trailing whitespace,
/// exactly one trailing newline.
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 1);
    for line in text.replace("\r\n", "\n").replace('\r', "\n").lines() {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    let trimmed = out.trim_end_matches('\n').len();
    out.truncate(trimmed);
    out.push('\n');
    out
}
