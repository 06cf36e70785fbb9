//! Error types for the cropper.

use thiserror::Error;

/// Errors reported by the interaction controller.
///
/// Geometry functions never fail; they return `None` or a zero size for
/// degenerate input instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CropperError {
    /// A container-relative query was made before the container was measured.
    #[error("The Cropper is not mounted")]
    NotMounted,

    /// Options failed validation.
    #[error("Invalid cropper options: {0}")]
    InvalidOptions(String),
}
