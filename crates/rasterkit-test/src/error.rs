//! Harness errors
//!
//! Only setup and file problems are errors; failed comparisons are
//! recorded on [`crate::RegParams`] instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TestError {
    /// Encoding or writing a regression output failed
    #[error("cannot write '{path}': {message}")]
    ImageWrite { path: String, message: String },

    /// A synthetic image had invalid dimensions
    #[error("synthetic image: {0}")]
    Synthetic(#[from] rasterkit_core::Error),

    /// Copying or reading golden files failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type TestResult<T> = Result<T, TestError>;
