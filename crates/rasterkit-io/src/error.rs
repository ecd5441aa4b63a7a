//! Errors from decoding and encoding images

use thiserror::Error;

/// Everything that can go wrong reading or writing an image.
///
/// Codec-specific errors are flattened into strings so callers match on
/// one type regardless of which codec ran.
#[derive(Error, Debug)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown magic bytes, a variant this crate does not read, or a codec
    /// disabled by features
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Structurally broken input, such as a truncated header or raster
    #[error("invalid image data: {0}")]
    InvalidData(String),

    #[error("decode error: {0}")]
    DecodeError(String),

    #[error("encode error: {0}")]
    EncodeError(String),

    /// Decoded dimensions and samples did not form a valid buffer
    #[error(transparent)]
    Core(#[from] rasterkit_core::Error),
}

pub type IoResult<T> = Result<T, IoError>;
