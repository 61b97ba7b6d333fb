//! Generate command report data structures.

use std::path::PathBuf;

use protogen_codegen::{RegenerationReason, RegistryState};

use super::output::{Output, Report};

/// One rendered unit in a dry run.
#[derive(Debug)]
pub struct PreviewEntry {
    pub unit: String,
    pub content: String,
}

#[derive(Debug)]
pub enum GenerateReport {
    /// Dry run: what would be written.
    Preview { files: Vec<PreviewEntry> },
    /// A real run.
    Written {
        output: PathBuf,
        registry: PathBuf,
        state: RegistryState,
        reason: Option<RegenerationReason>,
        written: usize,
        removed: Vec<PathBuf>,
    },
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match self {
            GenerateReport::Preview { files } => {
                for file in files {
                    out.divider(&file.unit);
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                out.preformatted(&format!("{} files would be generated", files.len()));
            }
            GenerateReport::Written {
                output,
                registry,
                state,
                reason,
                written,
                removed,
            } => {
                out.key_value("Output", &output.display().to_string());
                out.key_value("Registry", &registry.display().to_string());
                match (state, reason) {
                    (RegistryState::Regenerating, Some(reason)) => {
                        out.key_value("Regenerated", &format!("{written} files ({reason})"));
                    }
                    (RegistryState::Stale, _) => {
                        out.preformatted("Up to date (stale batches purged).");
                    }
                    _ => out.preformatted("Up to date."),
                }
                if !removed.is_empty() {
                    out.newline();
                    out.section("Deleted");
                    for path in removed {
                        out.removed_item(&path.display().to_string());
                    }
                }
            }
        }
    }
}
