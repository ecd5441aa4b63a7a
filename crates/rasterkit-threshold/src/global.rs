//! Global thresholding
//!
//! One scalar threshold for the whole image:
//!
//! - [`ThresholdMethod::Mean`]: the arithmetic mean of all luminance values
//! - [`ThresholdMethod::Otsu`]: the histogram split maximizing the
//!   between-class variance
//!
//! # Otsu conventions
//!
//! The search scans `t = 0..=255` and returns the *first* `t` whose
//! between-class variance strictly exceeds every earlier one. Bin `t` is
//! counted in the background class, but binarization uses
//! `luminance >= t`, so pixels in bin `t` itself end up white. For a
//! two-valued image `{a, b}` this yields `t = a`.

use crate::binarize::binarize_with;
use crate::{ThresholdError, ThresholdResult};
use log::{debug, trace, warn};
use rasterkit_core::histogram::BINS;
use rasterkit_core::{Histogram, Luminance, PixelBuffer};
use std::fmt;
use std::str::FromStr;

/// Global threshold selection method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThresholdMethod {
    /// Mean luminance
    Mean,
    /// Otsu's method
    Otsu,
}

impl ThresholdMethod {
    /// Identifier used in configuration and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Otsu => "otsu",
        }
    }
}

impl fmt::Display for ThresholdMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThresholdMethod {
    type Err = ThresholdError;

    /// Parse `"mean"` or `"otsu"` (case-insensitive, surrounding
    /// whitespace ignored).
    fn from_str(s: &str) -> ThresholdResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mean" => Ok(Self::Mean),
            "otsu" => Ok(Self::Otsu),
            _ => Err(ThresholdError::UnrecognizedMethod(s.to_string())),
        }
    }
}

/// Mean luminance threshold.
pub fn mean_threshold(lum: &Luminance) -> f64 {
    lum.mean()
}

/// Otsu threshold of a 256-bin histogram.
///
/// Returns 0 when no split is ever evaluated, which happens when all
/// values fall into a single bin.
pub fn otsu_threshold(hist: &Histogram) -> u8 {
    let total = hist.total() as f64;
    let sum = hist.weighted_sum();

    let mut sum_b = 0.0f64;
    let mut w_b = 0.0f64;
    let mut var_max = 0.0f64;
    let mut threshold = 0u8;

    for t in 0..BINS {
        let count = hist.count(t) as f64;
        w_b += count;
        if w_b == 0.0 {
            continue;
        }
        let w_f = total - w_b;
        if w_f == 0.0 {
            break;
        }

        sum_b += t as f64 * count;
        let m_b = sum_b / w_b;
        let m_f = (sum - sum_b) / w_f;

        let var_between = w_b * w_f * (m_b - m_f) * (m_b - m_f);
        if var_between > var_max {
            var_max = var_between;
            threshold = t as u8;
        }
    }

    trace!(
        "otsu: {} occupied bins, max between-class variance {var_max:.3}",
        hist.occupied_bins()
    );
    if is_single_class(hist) {
        warn!("otsu: all values fall in one bin, defaulting threshold to 0");
    }

    threshold
}

/// Whether every counted value shares one bin, leaving nothing to split.
fn is_single_class(hist: &Histogram) -> bool {
    hist.occupied_bins() <= 1
}

/// Compute the global threshold of a luminance plane.
pub fn compute_threshold(lum: &Luminance, method: ThresholdMethod) -> f64 {
    let threshold = match method {
        ThresholdMethod::Mean => mean_threshold(lum),
        ThresholdMethod::Otsu => otsu_threshold(&lum.histogram()) as f64,
    };
    debug!("global threshold ({method}): {threshold:.3}");
    threshold
}

/// Binarize against a caller-supplied threshold.
///
/// Pixels with `luminance >= threshold` become white, others black;
/// alpha is preserved.
pub fn fixed_threshold(buffer: &PixelBuffer, threshold: f64) -> PixelBuffer {
    let lum = buffer.to_luminance();
    binarize_with(buffer, &lum, |_, _| threshold)
}

/// Binarize with a threshold chosen by `method`.
///
/// # Example
///
/// ```
/// use rasterkit_core::PixelBuffer;
/// use rasterkit_threshold::{ThresholdMethod, global_threshold};
///
/// let buf = PixelBuffer::from_fn(4, 1, |x, _| {
///     let v = if x < 2 { 0 } else { 200 };
///     [v, v, v, 255]
/// })
/// .unwrap();
/// let out = global_threshold(&buf, ThresholdMethod::Mean);
/// assert_eq!(out.get_rgb(0, 0), Some((0, 0, 0)));
/// assert_eq!(out.get_rgb(3, 0), Some((255, 255, 255)));
/// ```
pub fn global_threshold(buffer: &PixelBuffer, method: ThresholdMethod) -> PixelBuffer {
    let lum = buffer.to_luminance();
    let threshold = compute_threshold(&lum, method);
    binarize_with(buffer, &lum, |_, _| threshold)
}
