//! Error types for the lightbox crate

use std::path::PathBuf;

use math::MathError;
use thiserror::Error;

/// Errors produced while building scenes and their uniforms.
#[derive(Debug, Error)]
pub enum Error {
    /// Degenerate geometry in a camera, model transform or light
    #[error(transparent)]
    Math(#[from] MathError),

    /// Scene config that isn't valid JSON or doesn't match the expected shape
    #[error("Invalid scene config: {0}")]
    Config(#[from] serde_json::Error),

    /// A canvas with no area has no aspect ratio
    #[error("Invalid canvas size: {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    /// No preset with this name
    #[error("Unknown lesson: {0}")]
    UnknownLesson(String),

    /// Scene config file couldn't be read
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for lightbox operations
pub type Result<T> = std::result::Result<T, Error>;
