use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Failed to read source image: {0}")]
    SourceUnreadable(String),

    #[error("Failed to write icon '{identifier}' to {}: {reason}", .path.display())]
    DestinationUnwritable {
        identifier: String,
        path: PathBuf,
        reason: String,
    },

    #[error("Failed to create output directory {}: {reason}", .path.display())]
    DestinationDirUnwritable { path: PathBuf, reason: String },

    #[error("Failed to encode PNG image: {0}")]
    EncodeError(String),

    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error("Invalid icon layout: {0}")]
    InvalidLayout(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExtractionError>;
