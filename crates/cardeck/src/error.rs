//! Error types for the render core

use thiserror::Error;

/// Result type alias for render-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing a slide bitmap.
///
/// None of these escape a batch: font resolution recovers through the
/// fallback chain, measurement retries once with a default face, and
/// anything left over is converted into a diagnostic placeholder bitmap at
/// the slide boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// No candidate font family could be loaded
    #[error("font resolution failed: {0}")]
    FontResolution(String),

    /// A glyph run could not be measured
    #[error("measurement failed: {0}")]
    Measurement(String),

    /// An unrecoverable drawing error for a single slide
    #[error("rendering failed: {0}")]
    Render(String),

    /// A color string was not a 6-hex-digit RGB value
    #[error("invalid color {0:?}: expected #rrggbb")]
    InvalidColor(String),
}
