//! Pipeline conversions module
//!
//! This module contains the orchestration that turns a sprite sheet into
//! individual icon files.

mod config;
mod report;
mod sprite_to_icons;


pub use config::{
    DEFAULT_TRIM_PADDING, EXTRACTION_ALPHA_THRESHOLD, ExtractionConfig, ExtractionConfigBuilder,
};
pub use report::{ExtractionReport, IconOutcome};
pub use sprite_to_icons::SpriteToIconsPipeline;
