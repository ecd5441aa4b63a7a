//! rasterkit Core - Basic data structures for raster processing
//!
//! This crate provides the fundamental data structures used throughout
//! the rasterkit toolkit:
//!
//! - [`PixelBuffer`] - Interleaved RGBA image container
//! - [`Luminance`] - Per-pixel luminance plane derived from a buffer
//! - [`Histogram`] - 256-bin luminance histogram
//! - [`IntegralTable`] - Summed-area table for O(1) rectangle sums
//!
//! All structures are plain values. Processing functions in the sibling
//! crates take a `&PixelBuffer` and return a new one.

pub mod buffer;
pub mod error;
pub mod histogram;
pub mod integral;
pub mod luminance;

pub use buffer::PixelBuffer;
pub use error::{Error, Result};
pub use histogram::Histogram;
pub use integral::IntegralTable;
pub use luminance::Luminance;

/// Channel layout and helper functions for RGBA samples.
///
/// # Sample format
///
/// Every pixel occupies four consecutive bytes in `R, G, B, A` order.
pub mod color {
    /// Red channel offset
    pub const RED: usize = 0;
    /// Green channel offset
    pub const GREEN: usize = 1;
    /// Blue channel offset
    pub const BLUE: usize = 2;
    /// Alpha channel offset
    pub const ALPHA: usize = 3;

    /// Number of interleaved samples per pixel
    pub const CHANNELS: usize = 4;

    /// Luminance weight of the red channel
    pub const RED_WEIGHT: f64 = 0.299;
    /// Luminance weight of the green channel
    pub const GREEN_WEIGHT: f64 = 0.587;
    /// Luminance weight of the blue channel
    pub const BLUE_WEIGHT: f64 = 0.114;

    /// Value written to R, G and B for pixels above a threshold.
    pub const FOREGROUND: u8 = 255;
    /// Value written to R, G and B for pixels below a threshold.
    pub const BACKGROUND: u8 = 0;

    /// Perceptual luminance of an RGB triple, in `[0, 255]`.
    ///
    /// The weights sum to 1.0, so no clamping is needed.
    #[inline]
    pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
        RED_WEIGHT * r as f64 + GREEN_WEIGHT * g as f64 + BLUE_WEIGHT * b as f64
    }

    /// Store an accumulated channel value into an 8-bit sample.
    ///
    /// Saturates to `[0, 255]`; fractional values round half to even.
    #[inline]
    pub fn clamp_to_u8(value: f64) -> u8 {
        if value.is_nan() {
            return 0;
        }
        value.clamp(0.0, 255.0).round_ties_even() as u8
    }

    /// Binary output level for a comparison result.
    #[inline]
    pub fn binary_level(on: bool) -> u8 {
        if on { FOREGROUND } else { BACKGROUND }
    }

}
