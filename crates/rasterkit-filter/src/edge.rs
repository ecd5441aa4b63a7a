//! Edge enhancement
//!
//! Sharpening via the fixed 3x3 kernel `[0,-1,0, -1,5,-1, 0,-1,0]`.

use crate::{Kernel, convolve};
use rasterkit_core::PixelBuffer;

/// Apply the sharpening filter.
///
/// Convolves R, G and B with [`Kernel::sharpen`] using zero padding;
/// alpha is preserved. Border pixels come out brighter than the interior
/// because their missing neighbors subtract nothing.
pub fn sharpen(buffer: &PixelBuffer) -> PixelBuffer {
    convolve(buffer, &Kernel::sharpen())
}
