//! Errors raised while building or indexing core values

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid image dimensions (zero, or too large to address)
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Sample buffer length does not match `width * height * 4`
    #[error("malformed buffer: expected {expected} samples, got {actual}")]
    MalformedBuffer { expected: usize, actual: usize },

    /// Pixel or table coordinate outside the valid range
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Two buffers that must match in size do not
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, Error>;
