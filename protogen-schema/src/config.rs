//! Project configuration (`protogen.toml`).

use std::path::{Path, PathBuf};

use protogen_core::Version;
use serde::{Deserialize, Serialize};

use crate::{Error, Result, SourceContext};

/// Root of `protogen.toml`.
///
/// Every field has a default, so an empty file (or no file at all) is a
/// valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub generator: GeneratorConfig,
    pub rewrite: RewriteConfig,
}

/// `[generator]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Path of the JSON schema tree.
    pub schema: PathBuf,
    /// Directory receiving generated sources.
    pub output: PathBuf,
    /// Registry file; defaults to `<output>/protogen-registry.toml`.
    pub registry: Option<PathBuf>,
    /// Version of the upstream schema producer.
    pub producer_version: Version,
    /// Namespace declaring `Parameter<T>`, `RepeatedParameter<T>` and `ParameterSet`.
    pub runtime_namespace: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            schema: PathBuf::from("schema.json"),
            output: PathBuf::from("Generated"),
            registry: None,
            producer_version: Version::zero(),
            runtime_namespace: "Protogen.Runtime".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// The effective registry path.
    pub fn registry_path(&self) -> PathBuf {
        self.registry
            .clone()
            .unwrap_or_else(|| self.output.join("protogen-registry.toml"))
    }
}

/// `[rewrite]` section: identifier rewrite rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Package path remaps, evaluated in order.
    pub namespace: Vec<NamespaceRemap>,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            namespace: vec![NamespaceRemap::new(
                "operations_research.sat",
                "Google.OrTools.Sat",
            )],
        }
    }
}

/// Maps one exact package path to a target namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceRemap {
    pub from: String,
    pub to: String,
}

impl NamespaceRemap {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl ProjectConfig {
    /// Load `protogen.toml` from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Load the config if the file exists, otherwise fall back to defaults.
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse a config with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        toml::from_str(content).map_err(|e| ctx.config_error(e))
    }
}
