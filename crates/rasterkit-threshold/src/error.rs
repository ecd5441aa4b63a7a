//! Error types for rasterkit-threshold

use thiserror::Error;

/// Errors that can occur during thresholding
#[derive(Debug, Error)]
pub enum ThresholdError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterkit_core::Error),

    /// A numeric parameter is outside its valid domain
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Threshold method identifier is not one of the recognized names
    #[error("unrecognized threshold method: {0:?} (expected \"mean\" or \"otsu\")")]
    UnrecognizedMethod(String),
}

/// Result type for threshold operations
pub type ThresholdResult<T> = Result<T, ThresholdError>;
