//! Error types for block-canvas rendering.

use thiserror::Error;

/// Result type alias using ArtError.
pub type ArtResult<T> = Result<T, ArtError>;

/// Primary error type for rendering operations.
#[derive(Debug, Error)]
pub enum ArtError {
    // === Palette Dataset Errors ===
    #[error("Malformed palette dataset: {0}")]
    Config(String),

    // === Dispatch Errors ===
    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    #[error("Palette index {index} out of range (count {count})")]
    OutOfRange { index: usize, count: usize },

    // === Lifecycle Errors ===
    #[error("draw() called before setup()")]
    NotReady,

    #[error("Invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    // === Output Errors ===
    #[error("Image encoding failed: {0}")]
    Encode(String),
}

impl ArtError {
    /// Whether the caller can recover by substituting a different input.
    ///
    /// Only `UnknownStyle` is recoverable (fall back to the default
    /// style). Everything else is either a broken dataset or a
    /// programming error and should surface loudly.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ArtError::UnknownStyle(_))
    }
}
