use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Suffix separating generated files from hand-written sources.
pub const GENERATED_SUFFIX: &str = "generated";

/// Opaque identifier of one generated artifact.
///
/// Minted fresh whenever a unit is folded into the root accumulator; a key
/// is never reused by a later run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetKey(Uuid);

impl AssetKey {
    pub fn mint() -> Self {
        Self(Uuid::new_v4())
    }

    /// File name of the artifact, e.g. `<key>.generated.cs`.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{GENERATED_SUFFIX}.{extension}", self.0)
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AssetKey {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Keys written together in one generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedBatch {
    pub keys: Vec<AssetKey>,
}

impl GeneratedBatch {
    pub fn new(keys: impl IntoIterator<Item = AssetKey>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, key: &AssetKey) -> bool {
        self.keys.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minted_keys_are_unique() {
        let keys: std::collections::HashSet<AssetKey> =
            (0..100).map(|_| AssetKey::mint()).collect();
        assert_eq!(keys.len(), 100);
    }

    #[test]
    fn test_file_name() {
        let key: AssetKey = "6f1c2a4e-93b1-4c8e-8f1a-2b3c4d5e6f70".parse().unwrap();
        assert_eq!(
            key.file_name("cs"),
            "6f1c2a4e-93b1-4c8e-8f1a-2b3c4d5e6f70.generated.cs"
        );
    }

    #[test]
    fn test_batch_serializes_keys_as_strings() {
        let key: AssetKey = "6f1c2a4e-93b1-4c8e-8f1a-2b3c4d5e6f70".parse().unwrap();
        let batch = GeneratedBatch::new([key]);
        let text = toml::to_string(&batch).unwrap();
        assert!(text.contains("\"6f1c2a4e-93b1-4c8e-8f1a-2b3c4d5e6f70\""));

        let back: GeneratedBatch = toml::from_str(&text).unwrap();
        assert_eq!(back, batch);
    }
}
