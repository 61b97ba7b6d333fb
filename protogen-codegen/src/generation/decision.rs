//! The regeneration decision.
//!
//! One call loads the registry, purges stale batches, renders fresh
//! candidates and either leaves the output alone or replaces it with a new
//! batch. The registry file and the output directory agree after every
//! successful call.

use std::{
    collections::HashSet,
    fmt,
    path::{Path, PathBuf},
};

use protogen_core::{Version, read_if_exists, remove_if_exists, write_file};
use protogen_schema::SchemaTree;

use super::{
    asset::{AssetKey, GeneratedBatch},
    registry::Registry,
};
use crate::{
    Error, Result,
    engine::generate_units,
    language::{UnitRenderer, normalize_text},
    options::GeneratorOptions,
};

/// Where a run ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    /// Output matched the schema; nothing was touched.
    Clean,
    /// Stale batches were purged but the surviving output still matched.
    Stale,
    /// A new batch was written.
    Regenerating,
}

/// Why a run wrote a new batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegenerationReason {
    /// The registry recorded no batches.
    EmptyRegistry,
    /// Every recorded batch was stale and purged.
    StaleBatchesPurged,
    /// Recorded and fresh artifact counts differ.
    KeyCountChanged,
    /// Some fresh artifact has no identical file on disk, or the reverse.
    ContentChanged,
}

impl fmt::Display for RegenerationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RegenerationReason::EmptyRegistry => "no previous batch",
            RegenerationReason::StaleBatchesPurged => "stale batches purged",
            RegenerationReason::KeyCountChanged => "artifact count changed",
            RegenerationReason::ContentChanged => "artifact content changed",
        };
        f.write_str(text)
    }
}

/// Result of [`generate_or_skip`].
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub batch_written: bool,
    pub state: RegistryState,
    pub reason: Option<RegenerationReason>,
    /// Files deleted while purging batches.
    pub removed: Vec<PathBuf>,
    /// Files written for the new batch.
    pub written: Vec<PathBuf>,
    /// The registry as persisted at the end of the run.
    pub registry: Registry,
}

/// A rendered artifact, for dry runs.
#[derive(Debug, Clone)]
pub struct PreviewFile {
    /// File name relative to the output directory.
    pub path: String,
    /// Namespace-qualified type name.
    pub unit: String,
    pub content: String,
}

/// Result of [`clean`].
#[derive(Debug, Clone, Default)]
pub struct CleanOutcome {
    pub batches: usize,
    pub removed: Vec<PathBuf>,
}

/// Regenerate `output_dir` from `tree` unless its current content already matches.
pub fn generate_or_skip(
    output_dir: &Path,
    registry_path: &Path,
    tree: &SchemaTree,
    producer_version: &Version,
    options: &GeneratorOptions,
    renderer: &dyn UnitRenderer,
) -> Result<GenerateOutcome> {
    let extension = renderer.file_extension();
    // Schema errors abort before anything on disk is touched.
    let candidates = render_candidates(tree, options, renderer)?;

    let mut registry = Registry::load_or_default(registry_path);
    let recorded = registry.batches.len();
    let had_batches = recorded > 0;

    let mut removed = purge_stale(&mut registry, output_dir, producer_version, extension)?;
    let purged_any = registry.batches.len() < recorded;

    let reason = compare(&registry, had_batches, &candidates, extension)?;

    let Some(reason) = reason else {
        let state = if purged_any {
            registry.save(registry_path)?;
            RegistryState::Stale
        } else {
            RegistryState::Clean
        };
        tracing::info!(
            output = %output_dir.display(),
            artifacts = candidates.len(),
            ?state,
            "generated output is up to date"
        );
        return Ok(GenerateOutcome {
            batch_written: false,
            state,
            reason: None,
            removed,
            written: Vec::new(),
            registry,
        });
    };

    tracing::info!(
        output = %output_dir.display(),
        artifacts = candidates.len(),
        %reason,
        "regenerating"
    );

    let batches = std::mem::take(&mut registry.batches);
    for batch in &batches {
        removed.extend(purge_batch(&registry, batch, extension)?);
    }
    registry.output_directory = output_dir.to_path_buf();

    let written = match write_candidates(output_dir, &candidates, extension) {
        Ok(written) => written,
        Err(err) => {
            // The purged batches are gone from disk; record that before bailing.
            if let Err(save_err) = registry.save(registry_path) {
                tracing::warn!(error = %save_err, "could not persist registry after failed write");
            }
            return Err(err);
        }
    };

    registry
        .batches
        .push(GeneratedBatch::new(candidates.iter().map(|(key, _)| *key)));
    registry.producer_version = producer_version.clone();
    registry.save(registry_path)?;

    Ok(GenerateOutcome {
        batch_written: true,
        state: RegistryState::Regenerating,
        reason: Some(reason),
        removed,
        written,
        registry,
    })
}

/// Render every unit without touching the filesystem.
pub fn preview(
    tree: &SchemaTree,
    options: &GeneratorOptions,
    renderer: &dyn UnitRenderer,
) -> Result<Vec<PreviewFile>> {
    let traversal = generate_units(tree, options)?;
    Ok(traversal
        .units
        .iter()
        .map(|(key, unit)| PreviewFile {
            path: key.file_name(renderer.file_extension()),
            unit: unit.qualified_name(),
            content: normalize_text(&renderer.render(unit)),
        })
        .collect())
}

/// Delete every recorded file and forget every batch.
///
/// A missing registry is left missing.
pub fn clean(registry_path: &Path, extension: &str) -> Result<CleanOutcome> {
    let mut registry = Registry::load_or_default(registry_path);
    let batches = std::mem::take(&mut registry.batches);
    let mut removed = Vec::new();
    for batch in &batches {
        removed.extend(purge_batch(&registry, batch, extension)?);
    }
    if registry_path.exists() {
        registry.save(registry_path)?;
    }
    tracing::info!(batches = batches.len(), files = removed.len(), "cleaned generated output");
    Ok(CleanOutcome {
        batches: batches.len(),
        removed,
    })
}

/// Drop batches recorded for another directory, for an older producer, or
/// with a file missing. Returns the deleted files.
fn purge_stale(
    registry: &mut Registry,
    output_dir: &Path,
    producer_version: &Version,
    extension: &str,
) -> Result<Vec<PathBuf>> {
    let moved = registry.output_directory != output_dir;
    let outdated = registry.producer_version < *producer_version;
    let mut removed = Vec::new();
    let mut kept = Vec::new();

    for batch in std::mem::take(&mut registry.batches) {
        let missing = batch
            .keys
            .iter()
            .any(|key| !registry.file_path(key, extension).exists());
        if moved || outdated || missing {
            tracing::debug!(keys = batch.len(), moved, outdated, missing, "purging stale batch");
            removed.extend(purge_batch(registry, &batch, extension)?);
        } else {
            kept.push(batch);
        }
    }

    registry.batches = kept;
    Ok(removed)
}

fn purge_batch(
    registry: &Registry,
    batch: &GeneratedBatch,
    extension: &str,
) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    for key in &batch.keys {
        let path = registry.file_path(key, extension);
        if remove_if_exists(&path).map_err(|e| Error::fs("delete", &path, e))? {
            tracing::debug!(path = %path.display(), "deleted");
            removed.push(path);
        }
    }
    Ok(removed)
}

fn render_candidates(
    tree: &SchemaTree,
    options: &GeneratorOptions,
    renderer: &dyn UnitRenderer,
) -> Result<Vec<(AssetKey, String)>> {
    let traversal = generate_units(tree, options)?;
    Ok(traversal
        .units
        .iter()
        .map(|(key, unit)| (*key, normalize_text(&renderer.render(unit))))
        .collect())
}

/// Decide whether surviving batches still describe the candidates.
///
/// Keys are re-minted every traversal, so matching is by content: every
/// candidate must equal some surviving file and every surviving file some
/// candidate.
fn compare(
    registry: &Registry,
    had_batches: bool,
    candidates: &[(AssetKey, String)],
    extension: &str,
) -> Result<Option<RegenerationReason>> {
    if registry.batches.is_empty() {
        return Ok(Some(if had_batches {
            RegenerationReason::StaleBatchesPurged
        } else {
            RegenerationReason::EmptyRegistry
        }));
    }
    if registry.key_count() != candidates.len() {
        return Ok(Some(RegenerationReason::KeyCountChanged));
    }

    let mut on_disk: HashSet<Vec<u8>> = HashSet::new();
    for key in registry.keys() {
        let path = registry.file_path(key, extension);
        match read_if_exists(&path).map_err(|e| Error::fs("read", &path, e))? {
            Some(content) => {
                on_disk.insert(content);
            }
            None => return Ok(Some(RegenerationReason::ContentChanged)),
        }
    }
    // Compared as bytes; a file that no longer decodes is simply different.
    let fresh: HashSet<&[u8]> = candidates.iter().map(|(_, text)| text.as_bytes()).collect();

    let every_candidate_on_disk = fresh.iter().all(|text| on_disk.contains(*text));
    let every_file_fresh = on_disk.iter().all(|bytes| fresh.contains(bytes.as_slice()));
    if every_candidate_on_disk && every_file_fresh {
        Ok(None)
    } else {
        Ok(Some(RegenerationReason::ContentChanged))
    }
}

/// Write every candidate; on failure remove what this call already wrote.
fn write_candidates(
    output_dir: &Path,
    candidates: &[(AssetKey, String)],
    extension: &str,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::<PathBuf>::with_capacity(candidates.len());
    for (key, text) in candidates {
        let path = output_dir.join(key.file_name(extension));
        if let Err(e) = write_file(&path, text) {
            for path in &written {
                if let Err(cleanup) = remove_if_exists(path) {
                    tracing::warn!(
                        path = %path.display(),
                        error = %cleanup,
                        "could not remove partial output"
                    );
                }
            }
            return Err(Error::fs("write", path, e));
        }
        tracing::debug!(path = %path.display(), "wrote");
        written.push(path);
    }
    Ok(written)
}
