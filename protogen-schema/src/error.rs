use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for schema and config loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the source content and filename so parse errors can point at the
/// offending location.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a schema parse error from a serde_json error.
    pub fn schema_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = self.offset_of(source.line(), source.column()).map(SourceSpan::from);
        Box::new(Error::Schema {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a config parse error from a toml error.
    pub fn config_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Convert a 1-based line/column pair into a byte offset.
    fn offset_of(&self, line: usize, column: usize) -> Option<usize> {
        if line == 0 {
            return None;
        }
        let line_start: usize = self
            .src
            .split_inclusive('\n')
            .take(line - 1)
            .map(str::len)
            .sum();
        Some((line_start + column.saturating_sub(1)).min(self.src.len()))
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(protogen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema tree")]
    #[diagnostic(
        code(protogen::schema_parse),
        help("the schema tree must be a JSON object with a 'kind' and optional 'children'")
    )]
    Schema {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse protogen.toml")]
    #[diagnostic(code(protogen::config_parse))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Self::Io {
            path: path.into(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of() {
        let ctx = SourceContext::new("ab\ncde\nf", "schema.json");
        assert_eq!(ctx.offset_of(1, 1), Some(0));
        assert_eq!(ctx.offset_of(2, 2), Some(4));
        assert_eq!(ctx.offset_of(3, 1), Some(7));
        assert_eq!(ctx.offset_of(0, 0), None);
    }

    #[test]
    fn test_schema_error_has_span() {
        let ctx = SourceContext::new("{\n  \"kind\": }", "schema.json");
        let err = serde_json::from_str::<serde_json::Value>(ctx.src()).unwrap_err();
        let err = ctx.schema_error(err);
        match *err {
            Error::Schema { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
