//! rasterkit-filter - Convolution filters
//!
//! This crate provides kernel convolution over RGBA buffers:
//!
//! - [`Kernel`]: odd square weight matrices (sharpen, box, identity, custom)
//! - [`convolve`]: zero-padded convolution of the R, G, B channels
//! - [`sharpen`] and [`box_blur`]: fixed-kernel filters built on it
//!
//! Alpha is never convolved; every output pixel keeps its source alpha.

pub mod convolve;
pub mod edge;
mod error;
pub mod kernel;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

pub use convolve::{MAX_BLUR_RADIUS, box_blur, convolve};
pub use edge::sharpen;
