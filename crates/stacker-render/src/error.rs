//! Error types for rendering.

use thiserror::Error;

/// Rendering error type.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Window surface error
    #[error("Surface error: {0}")]
    Surface(#[from] softbuffer::SoftBufferError),

    /// Frame size does not match the surface
    #[error("Frame is {frame_len} pixels but the surface holds {surface_len}")]
    SizeMismatch { frame_len: usize, surface_len: usize },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, RenderError>;
