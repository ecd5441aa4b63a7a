//! Grayscale projection
//!
//! Reduces RGBA samples to one luminance value per pixel. Both
//! thresholding paths start here.

use super::PixelBuffer;
use crate::Luminance;
use crate::color;

impl PixelBuffer {
    /// Project the buffer to per-pixel luminance,
    /// `0.299 R + 0.587 G + 0.114 B`.
    ///
    /// Alpha is ignored. The source buffer is not modified.
    pub fn to_luminance(&self) -> Luminance {
        let data = self
            .pixels()
            .map(|p| color::luminance(p[color::RED], p[color::GREEN], p[color::BLUE]))
            .collect();
        Luminance::from_parts(self.width(), self.height(), data)
    }
}
