//! PNG encoding options

use std::fmt;
use std::str::FromStr;

/// PNG compression levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PngCompression {
    /// Fastest encoding, larger files
    Fast,
    /// Encoder default (balanced)
    #[default]
    Default,
    /// Smallest files, slowest encoding
    Best,
}

impl fmt::Display for PngCompression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PngCompression::Fast => "fast",
            PngCompression::Default => "default",
            PngCompression::Best => "best",
        };
        f.write_str(name)
    }
}

impl FromStr for PngCompression {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fast" => Ok(PngCompression::Fast),
            "default" => Ok(PngCompression::Default),
            "best" => Ok(PngCompression::Best),
            other => Err(format!(
                "unknown compression '{}' (expected fast, default or best)",
                other
            )),
        }
    }
}
