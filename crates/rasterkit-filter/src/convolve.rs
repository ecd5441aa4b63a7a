//! Convolution operations
//!
//! Implements image convolution with arbitrary odd square kernels.
//!
//! # Border handling
//!
//! Zero padding: kernel cells that fall outside the image contribute
//! nothing. There is no wraparound and no edge replication, so a kernel
//! whose weights sum to 1 darkens the border when its off-center weights
//! are positive and brightens it when they are negative.

use crate::{FilterError, FilterResult, Kernel};
use log::debug;
use rasterkit_core::PixelBuffer;
use rasterkit_core::color::{self, BLUE, CHANNELS, GREEN, RED};
use rayon::prelude::*;

/// Convolve the R, G, B channels of a buffer with a kernel.
///
/// For every output pixel `(x, y)` and kernel cell `(kx, ky)` the source
/// pixel is `(x + kx - half, y + ky - half)`. Weighted sums are accumulated
/// per channel and stored with 8-bit saturation. Alpha is copied from the
/// source pixel unchanged.
///
/// Rows are computed in parallel; each output row only reads the source.
pub fn convolve(buffer: &PixelBuffer, kernel: &Kernel) -> PixelBuffer {
    let w = buffer.width() as i64;
    let h = buffer.height() as i64;
    let side = kernel.side() as i64;
    let half = kernel.half() as i64;
    let weights = kernel.weights();
    let src = buffer.samples();

    debug!("convolve: {w}x{h} buffer, {side}x{side} kernel");

    // Start from a copy so alpha is already in place.
    let mut out = buffer.clone();
    let stride = out.row_stride();

    out.samples_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as i64;
            for x in 0..w {
                let mut sum_r = 0.0f64;
                let mut sum_g = 0.0f64;
                let mut sum_b = 0.0f64;

                for ky in 0..side {
                    let sy = y + ky - half;
                    if sy < 0 || sy >= h {
                        continue;
                    }
                    for kx in 0..side {
                        let sx = x + kx - half;
                        if sx < 0 || sx >= w {
                            continue;
                        }
                        let k = weights[(ky * side + kx) as usize];
                        let pos = (sy * w + sx) as usize * CHANNELS;
                        sum_r += src[pos + RED] as f64 * k;
                        sum_g += src[pos + GREEN] as f64 * k;
                        sum_b += src[pos + BLUE] as f64 * k;
                    }
                }

                let o = x as usize * CHANNELS;
                row[o + RED] = color::clamp_to_u8(sum_r);
                row[o + GREEN] = color::clamp_to_u8(sum_g);
                row[o + BLUE] = color::clamp_to_u8(sum_b);
            }
        });

    out
}

/// Largest radius accepted by [`box_blur`]
pub const MAX_BLUR_RADIUS: u32 = (Kernel::MAX_SIDE - 1) / 2;

/// Apply box (average) blur with a `(2 * radius + 1)²` window.
///
/// Uses the same zero padding as [`convolve`], so pixels near the border
/// are averaged with black. Radii above [`MAX_BLUR_RADIUS`] are rejected.
pub fn box_blur(buffer: &PixelBuffer, radius: u32) -> FilterResult<PixelBuffer> {
    if radius > MAX_BLUR_RADIUS {
        return Err(FilterError::InvalidParameters(format!(
            "blur radius {radius} exceeds maximum {MAX_BLUR_RADIUS}"
        )));
    }
    let kernel = Kernel::box_kernel(2 * radius + 1)?;
    Ok(convolve(buffer, &kernel))
}
