//! Convolution regression test
//!
//! Sharpen and box blur over synthetic images, checked against a
//! straightforward per-pixel reference and against golden files.

use rasterkit_core::PixelBuffer;
use rasterkit_core::color::clamp_to_u8;
use rasterkit_filter::{Kernel, box_blur, convolve, sharpen};
use rasterkit_io::ImageFormat;
use rasterkit_test::{RegParams, synthetic};

/// Sequential zero-padded convolution
fn reference(buffer: &PixelBuffer, kernel: &Kernel) -> PixelBuffer {
    let (w, h) = buffer.dimensions();
    let half = kernel.half() as i64;
    let mut out = buffer.clone();
    for y in 0..h as i64 {
        for x in 0..w as i64 {
            let mut sums = [0.0f64; 3];
            for ky in 0..kernel.side() {
                for kx in 0..kernel.side() {
                    let sx = x + kx as i64 - half;
                    let sy = y + ky as i64 - half;
                    if sx < 0 || sy < 0 || sx >= w as i64 || sy >= h as i64 {
                        continue;
                    }
                    let (r, g, b) = buffer.get_rgb(sx as u32, sy as u32).unwrap();
                    let k = kernel.get(kx, ky).unwrap();
                    sums[0] += r as f64 * k;
                    sums[1] += g as f64 * k;
                    sums[2] += b as f64 * k;
                }
            }
            let a = buffer.alpha(x as u32, y as u32).unwrap();
            out.set_rgba(
                x as u32,
                y as u32,
                clamp_to_u8(sums[0]),
                clamp_to_u8(sums[1]),
                clamp_to_u8(sums[2]),
                a,
            )
            .unwrap();
        }
    }
    out
}

#[test]
fn convolve_reg() {
    let mut rp = RegParams::new("convolve");

    let ramp = synthetic::color_ramp(33, 21).unwrap();
    let noisy = synthetic::with_noise(&synthetic::horizontal_gradient(40, 16).unwrap(), 20, 3);

    // Sharpen matches the sequential reference
    for src in [&ramp, &noisy] {
        let out = sharpen(src);
        rp.compare_buffers(&reference(src, &Kernel::sharpen()), &out);
        rp.compare_values(src.width() as f64, out.width() as f64, 0.0);
        rp.compare_values(src.height() as f64, out.height() as f64, 0.0);
    }

    // Custom kernels, including an asymmetric one
    let emboss = Kernel::from_ints(&[-2, -1, 0, -1, 1, 1, 0, 1, 2]).unwrap();
    rp.compare_buffers(&reference(&ramp, &emboss), &convolve(&ramp, &emboss));
    let wide = Kernel::box_kernel(5).unwrap();
    rp.compare_buffers(&reference(&noisy, &wide), &convolve(&noisy, &wide));

    // Alpha is carried through untouched
    let out = sharpen(&ramp);
    let same_alpha = ramp.pixels().zip(out.pixels()).all(|(a, b)| a[3] == b[3]);
    rp.compare_values(1.0, same_alpha as u8 as f64, 0.0);

    // Box blur keeps a flat interior flat
    let flat = synthetic::gray(9, 9, |_, _| 90).unwrap();
    let blurred = box_blur(&flat, 1).unwrap();
    rp.compare_values(90.0, blurred.get_rgb(4, 4).unwrap().0 as f64, 0.0);
    // Corner averages 4 of 9 cells with black padding: 40
    rp.compare_values(40.0, blurred.get_rgb(0, 0).unwrap().0 as f64, 0.0);

    rp.write_buffer_and_check(&sharpen(&ramp), ImageFormat::Png)
        .unwrap();
    rp.write_buffer_and_check(&box_blur(&ramp, 2).unwrap(), ImageFormat::Png)
        .unwrap();

    assert!(rp.cleanup());
}
