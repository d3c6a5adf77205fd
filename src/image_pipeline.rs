//! Image processing pipeline module
//!
//! This module turns a chroma-keyed sprite sheet into individual transparent
//! icons, with separate modules for source decoding, color conversion,
//! background keying, alpha cleanup, trimming, PNG writing and the grid
//! orchestration that ties them together.

pub mod source;
pub mod color;
pub mod chroma_key;
pub mod alpha;
pub mod trim;
pub mod grid;
pub mod png;
pub mod conversions;
pub mod common;

pub use common::{
    ExtractionError,
    Result,
};

pub use source::{
    SourceReader,
    ImageCrateReader,
};

pub use color::{
    Hsv,
    HsvField,
    rgb_to_hsv,
};

pub use chroma_key::{
    BackgroundMask,
    ChromaKeyParams,
    ChromaKeyParamsBuilder,
    ChromaKeySegmenter,
    Connectivity,
};

pub use alpha::{DEFAULT_ALPHA_THRESHOLD, binarize_alpha};

pub use trim::{BoundingBox, content_bounds, trim_transparent};

pub use grid::{
    CellDescriptor,
    GridSpec,
    IconEntry,
    IconLayout,
};

pub use png::{
    PngCompression,
    PngWriter,
    StandardPngWriter,
};

pub use conversions::{
    ExtractionConfig,
    ExtractionConfigBuilder,
    ExtractionReport,
    IconOutcome,
    SpriteToIconsPipeline,
};
