//! Schema tree loading.

use std::{path::Path, str::FromStr};

use crate::{Error, Result, SchemaNode, SourceContext};

/// A complete schema tree, as produced by the external parser.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaTree {
    root: SchemaNode,
}

impl SchemaTree {
    pub fn new(root: SchemaNode) -> Self {
        Self { root }
    }

    /// Load a schema tree from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a schema tree with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let root: SchemaNode =
            serde_json::from_str(content).map_err(|e| ctx.schema_error(e))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &SchemaNode {
        &self.root
    }
}

impl FromStr for SchemaTree {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "schema.json")
    }
}

impl From<SchemaNode> for SchemaTree {
    fn from(root: SchemaNode) -> Self {
        Self::new(root)
    }
}
