//! Shared binarization pass

use rasterkit_core::color::{self, BLUE, CHANNELS, GREEN, RED};
use rasterkit_core::{Luminance, PixelBuffer};
use rayon::prelude::*;

/// Write R = G = B = 255 where `lum(x, y) >= threshold_at(x, y)`, else 0.
///
/// Alpha is carried over from `buffer`. `lum` must be the projection of
/// `buffer`. Rows are processed in parallel.
pub(crate) fn binarize_with<F>(
    buffer: &PixelBuffer,
    lum: &Luminance,
    threshold_at: F,
) -> PixelBuffer
where
    F: Fn(u32, u32) -> f64 + Sync,
{
    debug_assert_eq!(buffer.dimensions(), lum.dimensions());

    let mut out = buffer.clone();
    let stride = out.row_stride();

    out.samples_mut()
        .par_chunks_mut(stride)
        .zip(lum.as_slice().par_chunks(lum.width() as usize))
        .enumerate()
        .for_each(|(y, (row, lum_row))| {
            let y = y as u32;
            for (x, (px, &l)) in row.chunks_exact_mut(CHANNELS).zip(lum_row).enumerate() {
                let v = color::binary_level(l >= threshold_at(x as u32, y));
                px[RED] = v;
                px[GREEN] = v;
                px[BLUE] = v;
            }
        });

    out
}
