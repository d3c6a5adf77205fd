use std::path::PathBuf;

use crate::image_pipeline::trim::BoundingBox;

/// What was written for one identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconOutcome {
    pub index: usize,
    pub code: String,
    pub label: String,
    pub path: PathBuf,
    /// Region of the sheet the icon was cut from
    pub source_bounds: BoundingBox,
    pub width: u32,
    pub height: u32,
    /// No foreground survived keying; the cell was written untrimmed
    pub degenerate: bool,
}

/// Summary of a completed extraction run.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    pub output_dir: PathBuf,
    pub cell_width: u32,
    pub cell_height: u32,
    pub icons: Vec<IconOutcome>,
}

impl ExtractionReport {
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn degenerate_count(&self) -> usize {
        self.icons.iter().filter(|icon| icon.degenerate).count()
    }

    pub fn icon(&self, code: &str) -> Option<&IconOutcome> {
        self.icons.iter().find(|icon| icon.code == code)
    }
}
