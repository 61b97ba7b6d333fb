use std::path::{Path, PathBuf};

use protogen_core::{Version, write_atomic};
use serde::{Deserialize, Serialize};

use super::asset::{AssetKey, GeneratedBatch};
use crate::{Error, Result};

/// Persisted record of what earlier runs generated.
///
/// ```toml
/// output_directory = "Generated"
/// producer_version = "9.10.0"
///
/// [[batches]]
/// keys = ["6f1c2a4e-93b1-4c8e-8f1a-2b3c4d5e6f70"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    #[serde(default)]
    pub output_directory: PathBuf,
    /// Registries written before versions were tracked read as `0.0.0`.
    #[serde(default)]
    pub producer_version: Version,
    #[serde(default)]
    pub batches: Vec<GeneratedBatch>,
}

impl Registry {
    /// Read a registry file.
    ///
    /// Every failure, including a missing file, is a [`Error::RegistryIo`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::RegistryIo {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        toml::from_str(&content).map_err(|e| Error::RegistryIo {
            path: path.to_path_buf(),
            source: Box::new(e),
        })
    }

    /// Read a registry file, starting fresh if it is missing or unreadable.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no registry yet, starting fresh");
            return Self::default();
        }
        match Self::load(path) {
            Ok(registry) => registry,
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    cause = ?std::error::Error::source(&err).map(|s| s.to_string()),
                    "discarding unreadable registry"
                );
                Self::default()
            }
        }
    }

    /// Write the registry through a temporary file and rename.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string(self)
            .map_err(|e| Error::fs("serialize registry", path, std::io::Error::other(e)))?;
        write_atomic(path, &content).map_err(|e| Error::fs("write", path, e))?;
        tracing::debug!(path = %path.display(), batches = self.batches.len(), "saved registry");
        Ok(())
    }

    /// Total keys over all batches.
    pub fn key_count(&self) -> usize {
        self.batches.iter().map(GeneratedBatch::len).sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &AssetKey> {
        self.batches.iter().flat_map(|b| b.keys.iter())
    }

    /// Where the file for `key` lives under the recorded output directory.
    pub fn file_path(&self, key: &AssetKey, extension: &str) -> PathBuf {
        self.output_directory.join(key.file_name(extension))
    }

    /// Recorded files that no longer exist on disk.
    pub fn missing_files(&self, extension: &str) -> Vec<PathBuf> {
        self.keys()
            .map(|key| self.file_path(key, extension))
            .filter(|path| !path.exists())
            .collect()
    }
}
