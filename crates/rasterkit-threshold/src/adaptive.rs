//! Adaptive (local) thresholding
//!
//! Each pixel is compared against the mean luminance of a
//! `block_size x block_size` window centered on it, minus a constant `c`.
//! Windows are clamped at the image edges, so border pixels average over
//! fewer neighbors instead of reading padding.
//!
//! Window means come from an [`IntegralTable`], making the cost per pixel
//! independent of `block_size`.

use crate::binarize::binarize_with;
use crate::{ThresholdError, ThresholdResult};
use log::debug;
use rasterkit_core::{IntegralTable, PixelBuffer};

/// Options for adaptive thresholding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveThresholdOptions {
    /// Side of the local window (must be odd)
    pub block_size: u32,
    /// Constant subtracted from the local mean
    pub c: f64,
}

impl Default for AdaptiveThresholdOptions {
    fn default() -> Self {
        Self {
            block_size: 11,
            c: 2.0,
        }
    }
}

impl AdaptiveThresholdOptions {
    /// Create options with the given window size and constant.
    pub fn new(block_size: u32, c: f64) -> Self {
        Self { block_size, c }
    }

    /// Check the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ThresholdError::InvalidParameter`] if `block_size` is even
    /// (including 0) or `c` is not finite.
    pub fn validate(&self) -> ThresholdResult<()> {
        if self.block_size % 2 == 0 {
            return Err(ThresholdError::InvalidParameter(format!(
                "block size must be odd, got {}",
                self.block_size
            )));
        }
        if !self.c.is_finite() {
            return Err(ThresholdError::InvalidParameter(format!(
                "constant must be finite, got {}",
                self.c
            )));
        }
        Ok(())
    }

    /// Half-size of the window, `block_size / 2`.
    #[inline]
    pub fn half(&self) -> u32 {
        self.block_size / 2
    }
}

/// Apply adaptive thresholding.
///
/// For each pixel the threshold is `mean - c`, where `mean` is the average
/// luminance over the clamped window. Pixels with
/// `luminance >= threshold` become white, others black; alpha is
/// preserved.
///
/// # Errors
///
/// Returns [`ThresholdError::InvalidParameter`] if the options are invalid.
/// Validation happens before any work is done.
pub fn adaptive_threshold(
    buffer: &PixelBuffer,
    options: &AdaptiveThresholdOptions,
) -> ThresholdResult<PixelBuffer> {
    options.validate()?;

    let half = options.half();
    let c = options.c;
    debug!(
        "adaptive threshold: {}x{} buffer, block {}, c {}",
        buffer.width(),
        buffer.height(),
        options.block_size,
        c
    );

    let lum = buffer.to_luminance();
    let table = IntegralTable::from_luminance(&lum);

    Ok(binarize_with(buffer, &lum, |x, y| {
        table.window_mean(x, y, half) - c
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_fn(w: u32, h: u32, f: impl Fn(u32, u32) -> u8) -> PixelBuffer {
        PixelBuffer::from_fn(w, h, |x, y| {
            let v = f(x, y);
            [v, v, v, 200]
        })
        .unwrap()
    }

    /// Per-pixel reference using an explicit window loop.
    fn brute_force(buffer: &PixelBuffer, block_size: u32, c: f64) -> PixelBuffer {
        let lum = buffer.to_luminance();
        let (w, h) = buffer.dimensions();
        let half = block_size / 2;
        let mut out = buffer.clone();
        for y in 0..h {
            for x in 0..w {
                let x1 = x.saturating_sub(half);
                let y1 = y.saturating_sub(half);
                let x2 = (x + half).min(w - 1);
                let y2 = (y + half).min(h - 1);
                let mut sum = 0.0;
                let mut count = 0.0;
                for yy in y1..=y2 {
                    for xx in x1..=x2 {
                        sum += lum.get(xx, yy).unwrap();
                        count += 1.0;
                    }
                }
                let v = if lum.get(x, y).unwrap() >= sum / count - c { 255 } else { 0 };
                let a = buffer.alpha(x, y).unwrap();
                out.set_rgba(x, y, v, v, v, a).unwrap();
            }
        }
        out
    }

    #[test]
    fn test_even_block_size_rejected() {
        let buf = gray_fn(8, 8, |x, y| (x * 30 + y) as u8);
        let before = buf.clone();
        for bs in [0, 2, 4, 16] {
            let result = adaptive_threshold(&buf, &AdaptiveThresholdOptions::new(bs, 3.0));
            assert!(matches!(result, Err(ThresholdError::InvalidParameter(_))));
        }
        assert_eq!(buf, before);
    }

    #[test]
    fn test_non_finite_constant_rejected() {
        let buf = gray_fn(2, 2, |_, _| 0);
        let opts = AdaptiveThresholdOptions::new(3, f64::NAN);
        assert!(adaptive_threshold(&buf, &opts).is_err());
    }

    #[test]
    fn test_matches_brute_force() {
        // Gray levels whose luminance is an exact integer, so both paths
        // sum the same exact values.
        const LEVELS: [u8; 12] = [0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 200];
        let buf = gray_fn(13, 9, |x, y| LEVELS[((x * 7 + y * 5) % 12) as usize]);
        for (bs, c) in [(1, 0.0), (3, 2.0), (5, -4.0), (7, 10.0), (31, 1.5)] {
            let fast = adaptive_threshold(&buf, &AdaptiveThresholdOptions::new(bs, c)).unwrap();
            assert_eq!(fast, brute_force(&buf, bs, c), "block {bs}, c {c}");
        }
    }

    #[test]
    fn test_corner_window_uses_clamped_area() {
        // 5x5 image: the 3x3 top-left block is 100, everything else 0.
        // With block 5 the corner window is [0,2]x[0,2], all 100, so the
        // mean is exactly 100 and the corner pixel (100 >= 100 - 0) is white.
        // A full 25-cell divisor would give mean 36 and also white, so use
        // c = -50: clamped mean -> 150 > 100 (black), full divisor -> 86 (white).
        let buf = gray_fn(5, 5, |x, y| if x < 3 && y < 3 { 100 } else { 0 });
        let out = adaptive_threshold(&buf, &AdaptiveThresholdOptions::new(5, -50.0)).unwrap();
        assert_eq!(out.get_rgb(0, 0), Some((0, 0, 0)));
    }

    #[test]
    fn test_uniform_image() {
        let buf = gray_fn(6, 6, |_, _| 200);
        let white = adaptive_threshold(&buf, &AdaptiveThresholdOptions::new(3, 0.0)).unwrap();
        assert!(white.pixels().all(|p| p[0] == 255));
        let black = adaptive_threshold(&buf, &AdaptiveThresholdOptions::new(3, -1.0)).unwrap();
        assert!(black.pixels().all(|p| p[0] == 0));
    }

    #[test]
    fn test_idempotent_on_binary_checkerboard() {
        let buf = gray_fn(9, 7, |x, y| if (x + y) % 2 == 0 { 255 } else { 0 });
        let opts = AdaptiveThresholdOptions::new(3, 0.0);
        let once = adaptive_threshold(&buf, &opts).unwrap();
        assert_eq!(once, buf);
        let twice = adaptive_threshold(&once, &opts).unwrap();
        assert_eq!(twice, once);
    }

    #[test]
    fn test_alpha_preserved() {
        let buf = PixelBuffer::from_fn(5, 4, |x, y| [(x * 50) as u8, 0, 0, (x + y * 5) as u8])
            .unwrap();
        let out = adaptive_threshold(&buf, &AdaptiveThresholdOptions::default()).unwrap();
        for y in 0..4 {
            for x in 0..5 {
                assert_eq!(out.alpha(x, y), buf.alpha(x, y));
            }
        }
    }
}
