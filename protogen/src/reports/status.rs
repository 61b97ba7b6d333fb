//! Status command report data structures.

use std::path::PathBuf;

use protogen_core::Version;

use super::output::{Output, Report};

#[derive(Debug)]
pub struct StatusReport {
    pub registry_path: PathBuf,
    /// Whether the registry file exists at all.
    pub exists: bool,
    pub output_directory: PathBuf,
    pub producer_version: Version,
    /// Version the next `generate` would run with.
    pub current_version: Version,
    pub batch_sizes: Vec<usize>,
    /// Recorded files missing from disk.
    pub missing: Vec<PathBuf>,
}

impl Report for StatusReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Registry", &self.registry_path.display().to_string());
        if !self.exists {
            out.preformatted("No registry yet; the next run generates everything.");
            return;
        }

        out.key_value("Output", &self.output_directory.display().to_string());
        out.key_value("Producer version", &self.producer_version.to_string());
        if self.producer_version < self.current_version {
            out.warning(&format!(
                "recorded version {} is older than {}; the next run regenerates",
                self.producer_version, self.current_version
            ));
        }

        out.newline();
        out.section(&format!("Batches ({})", self.batch_sizes.len()));
        for (i, size) in self.batch_sizes.iter().enumerate() {
            out.list_item(&format!("#{}: {} files", i + 1, size));
        }

        if !self.missing.is_empty() {
            out.newline();
            out.section("Missing");
            for path in &self.missing {
                out.removed_item(&path.display().to_string());
            }
        }
    }
}
