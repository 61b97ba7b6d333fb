//! Clean command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

#[derive(Debug)]
pub struct CleanReport {
    pub batches: usize,
    pub removed: Vec<PathBuf>,
}

impl Report for CleanReport {
    fn render(&self, out: &mut dyn Output) {
        if self.batches == 0 {
            out.preformatted("Nothing recorded, nothing to clean.");
            return;
        }
        out.section(&format!("Deleted ({} batches)", self.batches));
        for path in &self.removed {
            out.removed_item(&path.display().to_string());
        }
    }
}
