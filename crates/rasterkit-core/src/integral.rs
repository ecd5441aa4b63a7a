//! Summed-area table over luminance
//!
//! The table has one extra leading row and column of zeros, so entry
//! `(x, y)` holds the sum of all luminance values strictly above and to the
//! left of pixel `(x, y)`:
//!
//! ```text
//! I(x, y) = lum(x-1, y-1) + I(x-1, y) + I(x, y-1) - I(x-1, y-1)   for x, y >= 1
//! ```
//!
//! The zero border lets any rectangle sum be read with four lookups and no
//! edge special-casing.

use crate::Luminance;
use crate::error::{Error, Result};

/// Summed-area table of size `(width + 1) x (height + 1)`
#[derive(Debug, Clone, PartialEq)]
pub struct IntegralTable {
    /// Image width (table width is `width + 1`)
    width: u32,
    /// Image height (table height is `height + 1`)
    height: u32,
    data: Vec<f64>,
}

impl IntegralTable {
    /// Build the table from a luminance plane.
    pub fn from_luminance(lum: &Luminance) -> Self {
        let w = lum.width() as usize;
        let h = lum.height() as usize;
        let tw = w + 1;
        let mut data = vec![0.0f64; tw * (h + 1)];

        for (row, src) in lum.rows().enumerate() {
            let y = row + 1;
            for x in 1..=w {
                data[y * tw + x] = src[x - 1] + data[y * tw + (x - 1)] + data[(y - 1) * tw + x]
                    - data[(y - 1) * tw + (x - 1)];
            }
        }

        Self {
            width: lum.width(),
            height: lum.height(),
            data,
        }
    }

    /// Image width covered by the table.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height covered by the table.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Table entry at table coordinates `(x, y)`, with `x <= width` and
    /// `y <= height`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x > self.width || y > self.height {
            return None;
        }
        Some(self.at(x as usize, y as usize))
    }

    #[inline]
    fn at(&self, x: usize, y: usize) -> f64 {
        self.data[y * (self.width as usize + 1) + x]
    }

    /// Sum of luminance over the inclusive pixel rectangle
    /// `[x1, x2] x [y1, y2]`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameter`] if `x1 > x2` or `y1 > y2`
    /// - [`Error::IndexOutOfBounds`] if `x2` or `y2` is outside the image
    pub fn rect_sum(&self, x1: u32, y1: u32, x2: u32, y2: u32) -> Result<f64> {
        if x1 > x2 || y1 > y2 {
            return Err(Error::InvalidParameter(format!(
                "empty rectangle [{x1}, {x2}] x [{y1}, {y2}]"
            )));
        }
        if x2 >= self.width {
            return Err(Error::IndexOutOfBounds {
                index: x2 as usize,
                len: self.width as usize,
            });
        }
        if y2 >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: y2 as usize,
                len: self.height as usize,
            });
        }
        Ok(self.rect_sum_unchecked(x1, y1, x2, y2))
    }

    /// Rectangle sum without validation. Coordinates must satisfy
    /// `x1 <= x2 < width` and `y1 <= y2 < height`.
    #[inline]
    pub fn rect_sum_unchecked(&self, x1: u32, y1: u32, x2: u32, y2: u32) -> f64 {
        let (x1, y1, x2, y2) = (x1 as usize, y1 as usize, x2 as usize + 1, y2 as usize + 1);
        self.at(x2, y2) - self.at(x1, y2) - self.at(x2, y1) + self.at(x1, y1)
    }

    /// Clamped window around `(x, y)` with half-size `half`.
    ///
    /// Returns `(x1, y1, x2, y2)`. The window shrinks at image edges rather
    /// than wrapping or mirroring.
    #[inline]
    pub fn window(&self, x: u32, y: u32, half: u32) -> (u32, u32, u32, u32) {
        let x1 = x.saturating_sub(half);
        let y1 = y.saturating_sub(half);
        let x2 = x.saturating_add(half).min(self.width - 1);
        let y2 = y.saturating_add(half).min(self.height - 1);
        (x1, y1, x2, y2)
    }

    /// Mean luminance over the clamped window around `(x, y)`.
    ///
    /// The divisor is the true clamped area, not `(2 * half + 1)^2`.
    #[inline]
    pub fn window_mean(&self, x: u32, y: u32, half: u32) -> f64 {
        let (x1, y1, x2, y2) = self.window(x, y, half);
        let count = (x2 - x1 + 1) as f64 * (y2 - y1 + 1) as f64;
        self.rect_sum_unchecked(x1, y1, x2, y2) / count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(w: u32, h: u32) -> Luminance {
        let data = (0..w * h).map(|i| (i % 7) as f64 * 10.0 + 0.25).collect();
        Luminance::from_vec(w, h, data).unwrap()
    }

    #[test]
    fn test_border_is_zero() {
        let table = IntegralTable::from_luminance(&ramp(4, 3));
        for x in 0..=4 {
            assert_eq!(table.get(x, 0), Some(0.0));
        }
        for y in 0..=3 {
            assert_eq!(table.get(0, y), Some(0.0));
        }
        assert_eq!(table.get(5, 0), None);
    }

    #[test]
    fn test_last_entry_is_total() {
        let lum = ramp(5, 4);
        let table = IntegralTable::from_luminance(&lum);
        let total: f64 = lum.as_slice().iter().sum();
        assert!((table.get(5, 4).unwrap() - total).abs() < 1e-9);
    }

    #[test]
    fn test_rect_sum_matches_brute_force() {
        let lum = ramp(6, 5);
        let table = IntegralTable::from_luminance(&lum);
        for y1 in 0..5 {
            for y2 in y1..5 {
                for x1 in 0..6 {
                    for x2 in x1..6 {
                        let mut brute = 0.0;
                        for y in y1..=y2 {
                            for x in x1..=x2 {
                                brute += lum.get(x, y).unwrap();
                            }
                        }
                        let fast = table.rect_sum(x1, y1, x2, y2).unwrap();
                        assert!(
                            (fast - brute).abs() < 1e-9,
                            "rect ({x1},{y1})-({x2},{y2}): {fast} vs {brute}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_rect_sum_rejects_bad_rectangles() {
        let table = IntegralTable::from_luminance(&ramp(3, 3));
        assert!(matches!(
            table.rect_sum(2, 0, 1, 0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            table.rect_sum(0, 0, 3, 0),
            Err(Error::IndexOutOfBounds { index: 3, len: 3 })
        ));
        assert!(matches!(
            table.rect_sum(0, 0, 0, 7),
            Err(Error::IndexOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_corner_window_is_clamped() {
        let table = IntegralTable::from_luminance(&ramp(10, 10));
        assert_eq!(table.window(0, 0, 2), (0, 0, 2, 2));
        assert_eq!(table.window(9, 9, 2), (7, 7, 9, 9));
        assert_eq!(table.window(5, 5, 2), (3, 3, 7, 7));
    }

    #[test]
    fn test_window_mean_uses_clamped_count() {
        let lum = Luminance::from_vec(3, 3, vec![9.0; 9]).unwrap();
        let table = IntegralTable::from_luminance(&lum);
        // Corner window covers 2x2 = 4 pixels; a full-size divisor would
        // give 36 / 9 = 4.
        assert!((table.window_mean(0, 0, 1) - 9.0).abs() < 1e-12);
        assert!((table.window_mean(1, 1, 50) - 9.0).abs() < 1e-12);
    }
}
