//! Luminance plane
//!
//! A `Luminance` is the grayscale projection of a [`PixelBuffer`]: one
//! `f64` per pixel in `[0, 255]`, row-major. Values are kept unrounded;
//! only histogram binning truncates them.
//!
//! [`PixelBuffer`]: crate::PixelBuffer

use crate::Histogram;
use crate::error::{Error, Result};

/// Per-pixel luminance values
#[derive(Debug, Clone, PartialEq)]
pub struct Luminance {
    width: u32,
    height: u32,
    data: Vec<f64>,
}

impl Luminance {
    /// Create a luminance plane from raw values.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if width or height is 0
    /// - [`Error::MalformedBuffer`] if `data.len() != width * height`
    pub fn from_vec(width: u32, height: u32, data: Vec<f64>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::MalformedBuffer {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Constructor for callers that already hold a valid buffer shape.
    pub(crate) fn from_parts(width: u32, height: u32, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        Self {
            width,
            height,
            data,
        }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false for a constructed plane; present for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at `(x, y)`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// All values, row-major.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// One row of values, or `None` when `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> Option<&[f64]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = y as usize * w;
        Some(&self.data[start..start + w])
    }

    /// Rows of values, top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, f64> {
        self.data.chunks_exact(self.width as usize)
    }

    /// Arithmetic mean of all values.
    pub fn mean(&self) -> f64 {
        let sum: f64 = self.data.iter().sum();
        sum / self.data.len() as f64
    }

    /// 256-bin histogram of the values (floor binning).
    pub fn histogram(&self) -> Histogram {
        Histogram::from_values(&self.data)
    }
}
