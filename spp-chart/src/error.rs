/// Error types for chart rendering
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    /// Output extension has no backend
    #[error("Unsupported image format: {0:?} (use png, jpg, jpeg, svg or pdf)")]
    UnsupportedFormat(String),

    /// The plotting backend failed while drawing or encoding
    #[error("Failed to draw chart: {0}")]
    Draw(String),

    /// The bundled font could not be loaded
    #[error("Failed to load bundled font for {0:?}")]
    Font(String),

    /// Assembling the PDF document failed
    #[error("Failed to write PDF: {0}")]
    Pdf(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Interval or profile rejected by the profile library
    #[error(transparent)]
    Profile(#[from] spp_profile::ProfileError),
}

pub type Result<T> = std::result::Result<T, ChartError>;
