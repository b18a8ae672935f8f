//! Error types for the laser eye tracking library.
//!
//! Tracking dropouts (no face, missing landmark, degenerate geometry) are
//! deliberately not represented here: they are silent per-frame conditions
//! that self-heal on the next successful detection. `Error` covers genuine
//! failures only.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encoding or decoding failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Landmark source error
    #[error("Landmark source error: {0}")]
    SourceError(String),

    /// Render pipeline error
    #[error("Render error: {0}")]
    RenderError(String),

    /// Filter initialization or processing error
    #[error("Filter error: {0}")]
    FilterError(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
