//! Extraction configuration types

use crate::image_pipeline::chroma_key::ChromaKeyParams;
use crate::image_pipeline::png::PngCompression;

/// Alpha threshold used when cleaning up extracted cells.
///
/// Lower than the general default so faint foreground pixels next to the
/// keyed background survive.
pub const EXTRACTION_ALPHA_THRESHOLD: u8 = 64;

/// Transparent margin added around each trimmed icon.
pub const DEFAULT_TRIM_PADDING: u32 = 10;

/// Configuration for sprite sheet extraction
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionConfig {
    /// Chroma-key detection parameters
    pub chroma_key: ChromaKeyParams,
    /// Alpha values below this become transparent, the rest opaque
    pub alpha_threshold: u8,
    /// Transparent margin in pixels around the trimmed content
    pub padding: u32,
    /// PNG compression for written icons
    pub compression: PngCompression,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            chroma_key: ChromaKeyParams::default(),
            alpha_threshold: EXTRACTION_ALPHA_THRESHOLD,
            padding: DEFAULT_TRIM_PADDING,
            compression: PngCompression::Default,
        }
    }
}

impl ExtractionConfig {
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder::default()
    }
}

/// Builder for ExtractionConfig
#[derive(Default)]
pub struct ExtractionConfigBuilder {
    chroma_key: Option<ChromaKeyParams>,
    alpha_threshold: Option<u8>,
    padding: Option<u32>,
    compression: Option<PngCompression>,
}

impl ExtractionConfigBuilder {
    pub fn chroma_key(mut self, params: ChromaKeyParams) -> Self {
        self.chroma_key = Some(params);
        self
    }

    pub fn alpha_threshold(mut self, threshold: u8) -> Self {
        self.alpha_threshold = Some(threshold);
        self
    }

    pub fn padding(mut self, padding: u32) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn compression(mut self, compression: PngCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn build(self) -> ExtractionConfig {
        let default = ExtractionConfig::default();
        ExtractionConfig {
            chroma_key: self.chroma_key.unwrap_or(default.chroma_key),
            alpha_threshold: self.alpha_threshold.unwrap_or(default.alpha_threshold),
            padding: self.padding.unwrap_or(default.padding),
            compression: self.compression.unwrap_or(default.compression),
        }
    }
}
