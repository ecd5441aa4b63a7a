//! Synthetic test images
//!
//! Deterministic generators for the shapes regression tests need. Gray
//! levels are chosen from [`EXACT_LEVELS`] where a test compares
//! luminance sums, since only those levels have an exactly integral
//! luminance.

use crate::TestResult;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rasterkit_core::PixelBuffer;

/// Gray levels whose luminance `0.299v + 0.587v + 0.114v` is exactly `v`
pub const EXACT_LEVELS: [u8; 23] = [
    0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 120, 130, 140, 150, 160, 170, 180, 200, 210, 220,
    240, 255,
];

/// Opaque gray image from a per-pixel level function.
pub fn gray(width: u32, height: u32, f: impl Fn(u32, u32) -> u8) -> TestResult<PixelBuffer> {
    Ok(PixelBuffer::from_fn(width, height, |x, y| {
        let v = f(x, y);
        [v, v, v, 255]
    })?)
}

/// Left-to-right gray ramp from 0 to 255.
pub fn horizontal_gradient(width: u32, height: u32) -> TestResult<PixelBuffer> {
    let span = width.saturating_sub(1).max(1);
    gray(width, height, |x, _| (x * 255 / span) as u8)
}

/// Color image with independent ramps in each channel and a varying alpha.
pub fn color_ramp(width: u32, height: u32) -> TestResult<PixelBuffer> {
    Ok(PixelBuffer::from_fn(width, height, |x, y| {
        [
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) * 7 % 256) as u8,
            (255 - (x * 3 + y) % 128) as u8,
        ]
    })?)
}

/// Checkerboard of `block x block` squares alternating `dark` and `light`.
pub fn bimodal_blocks(
    width: u32,
    height: u32,
    block: u32,
    dark: u8,
    light: u8,
) -> TestResult<PixelBuffer> {
    let block = block.max(1);
    gray(width, height, |x, y| {
        if (x / block + y / block) % 2 == 0 {
            dark
        } else {
            light
        }
    })
}

/// Dark horizontal strokes on a background that brightens from left to
/// right, the case where one global threshold loses the strokes on one
/// side.
///
/// Every level used is one of [`EXACT_LEVELS`].
pub fn uneven_lighting(width: u32, height: u32) -> TestResult<PixelBuffer> {
    // Background steps 60..=240 and strokes sit 40-50 below it
    const BACKGROUND: [u8; 6] = [60, 100, 140, 180, 220, 240];
    const STROKE: [u8; 6] = [20, 50, 90, 130, 170, 200];
    let band = width.div_ceil(BACKGROUND.len() as u32).max(1);
    gray(width, height, |x, y| {
        let i = ((x / band) as usize).min(BACKGROUND.len() - 1);
        if y % 6 < 2 && x % 8 < 6 {
            STROKE[i]
        } else {
            BACKGROUND[i]
        }
    })
}

/// Add seeded uniform noise in `-amplitude..=amplitude` to the RGB channels.
pub fn with_noise(buffer: &PixelBuffer, amplitude: u8, seed: u64) -> PixelBuffer {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = buffer.clone();
    let amp = amplitude as i16;
    for px in out.samples_mut().chunks_exact_mut(4) {
        for c in &mut px[..3] {
            let delta = rng.random_range(-amp..=amp);
            *c = (*c as i16 + delta).clamp(0, 255) as u8;
        }
    }
    out
}
