//! PixelBuffer - The image container
//!
//! A `PixelBuffer` holds `width * height` pixels as interleaved 8-bit
//! `R, G, B, A` samples, row-major with a top-left origin.
//!
//! # Invariant
//!
//! `samples.len() == width * height * 4` always holds. Fields are private
//! and every constructor validates the length, so processing code can index
//! the sample slice without bounds surprises.

mod access;
mod convert;

use crate::color::CHANNELS;
use crate::error::{Error, Result};

/// Interleaved RGBA image buffer
///
/// # Examples
///
/// ```
/// use rasterkit_core::PixelBuffer;
///
/// let buf = PixelBuffer::new(640, 480).unwrap();
/// assert_eq!(buf.width(), 640);
/// assert_eq!(buf.samples().len(), 640 * 480 * 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new buffer with every sample set to zero
    /// (transparent black).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or if
    /// the sample count does not fit in memory addressing.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = Self::sample_len(width, height)?;
        Ok(Self {
            width,
            height,
            samples: vec![0; len],
        })
    }

    /// Create a new buffer with every pixel set to the same RGBA value.
    pub fn new_filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self> {
        let len = Self::sample_len(width, height)?;
        let mut samples = Vec::with_capacity(len);
        for _ in 0..len / CHANNELS {
            samples.extend_from_slice(&rgba);
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Wrap an existing sample vector.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if width or height is 0
    /// - [`Error::MalformedBuffer`] if `samples.len() != width * height * 4`
    pub fn from_samples(width: u32, height: u32, samples: Vec<u8>) -> Result<Self> {
        let expected = Self::sample_len(width, height)?;
        if samples.len() != expected {
            return Err(Error::MalformedBuffer {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Build a buffer by evaluating `f(x, y) -> [r, g, b, a]` for every
    /// pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> [u8; 4],
    {
        let len = Self::sample_len(width, height)?;
        let mut samples = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                samples.extend_from_slice(&f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Number of samples required for the given dimensions.
    fn sample_len(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or(Error::InvalidDimension { width, height })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of samples in one row.
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Raw interleaved samples.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Consume the buffer and return its samples.
    #[inline]
    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    /// Check that `other` has the same dimensions as `self`.
    pub fn check_same_size(&self, other: &PixelBuffer) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        Ok(())
    }

    /// Mutable access to the samples.
    ///
    /// The slice length is fixed, so the size invariant cannot be broken
    /// through it.
    #[inline]
    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }
}
