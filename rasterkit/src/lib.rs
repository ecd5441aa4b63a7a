//! rasterkit - Sharpening and binarization for RGBA rasters
//!
//! # Overview
//!
//! - Kernel convolution with zero padding (sharpen, box blur, custom kernels)
//! - Global binarization by mean luminance or Otsu's method
//! - Adaptive binarization against an integral-image window mean
//! - PNG, JPEG and PNM/PAM input and output
//!
//! # Example
//!
//! ```
//! use rasterkit::PixelBuffer;
//! use rasterkit::threshold::{AdaptiveThresholdOptions, adaptive_threshold};
//!
//! let page = PixelBuffer::new_filled(64, 48, [200, 200, 200, 255]).unwrap();
//! let sharp = rasterkit::filter::sharpen(&page);
//! let binary = adaptive_threshold(&sharp, &AdaptiveThresholdOptions::default()).unwrap();
//! assert_eq!(binary.width(), 64);
//! assert!(binary.is_binary());
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rasterkit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use rasterkit_filter as filter;
pub use rasterkit_io as io;
pub use rasterkit_threshold as threshold;

pub mod job;
