//! rasterkit-threshold - Binarization
//!
//! Converts RGBA buffers to black-and-white buffers by comparing each
//! pixel's luminance against a threshold:
//!
//! - **Global** ([`global`]): one threshold for the whole image, chosen as
//!   the mean luminance or by Otsu's method
//! - **Adaptive** ([`adaptive`]): a per-pixel threshold equal to the mean
//!   luminance of a clamped square window minus a constant, computed in
//!   O(1) per pixel from an integral table
//!
//! Pixels with `luminance >= threshold` become white (R = G = B = 255),
//! the rest black. Alpha is always preserved.

pub mod adaptive;
mod binarize;
mod error;
pub mod global;

pub use error::{ThresholdError, ThresholdResult};

pub use adaptive::{AdaptiveThresholdOptions, adaptive_threshold};
pub use global::{
    ThresholdMethod, compute_threshold, fixed_threshold, global_threshold, mean_threshold,
    otsu_threshold,
};
