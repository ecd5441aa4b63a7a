//! Pixel access methods
//!
//! Coordinate-based getters and setters on top of the interleaved sample
//! layout. Bulk processing code works on [`PixelBuffer::rows`] or the raw
//! sample slice instead.

use super::PixelBuffer;
use crate::color::{ALPHA, CHANNELS};
use crate::error::{Error, Result};

impl PixelBuffer {
    /// Sample offset of pixel `(x, y)`, or `None` when out of bounds.
    #[inline]
    pub fn pixel_offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some((y as usize * self.width() as usize + x as usize) * CHANNELS)
    }

    /// Get the RGBA value at `(x, y)`.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        let i = self.pixel_offset(x, y)?;
        let s = &self.samples()[i..i + CHANNELS];
        Some((s[0], s[1], s[2], s[3]))
    }

    /// Get the RGB value at `(x, y)`.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_rgba(x, y).map(|(r, g, b, _)| (r, g, b))
    }

    /// Get the alpha value at `(x, y)`.
    pub fn alpha(&self, x: u32, y: u32) -> Option<u8> {
        let i = self.pixel_offset(x, y)?;
        Some(self.samples()[i + ALPHA])
    }

    /// Set the RGBA value at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are outside
    /// the image.
    pub fn set_rgba(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) -> Result<()> {
        let i = self.pixel_offset(x, y).ok_or(Error::IndexOutOfBounds {
            index: y as usize * self.width() as usize + x as usize,
            len: self.pixel_count(),
        })?;
        self.samples_mut()[i..i + CHANNELS].copy_from_slice(&[r, g, b, a]);
        Ok(())
    }

    /// Iterate over rows as sample slices of length `width * 4`.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        let stride = self.row_stride();
        self.samples().chunks_exact(stride)
    }

    /// Iterate over pixels as 4-sample slices, row-major.
    pub fn pixels(&self) -> std::slice::ChunksExact<'_, u8> {
        self.samples().chunks_exact(CHANNELS)
    }

    /// Check whether every pixel has R = G = B in `{0, 255}`.
    pub fn is_binary(&self) -> bool {
        self.pixels()
            .all(|p| p[0] == p[1] && p[1] == p[2] && (p[0] == 0 || p[0] == 255))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_rgba() {
        let mut buf = PixelBuffer::new(4, 3).unwrap();
        buf.set_rgba(3, 2, 10, 20, 30, 40).unwrap();
        assert_eq!(buf.get_rgba(3, 2), Some((10, 20, 30, 40)));
        assert_eq!(buf.get_rgb(3, 2), Some((10, 20, 30)));
        assert_eq!(buf.alpha(3, 2), Some(40));
        assert_eq!(buf.pixel_offset(3, 2), Some(44));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut buf = PixelBuffer::new(2, 2).unwrap();
        assert_eq!(buf.get_rgba(2, 0), None);
        assert_eq!(buf.alpha(0, 2), None);
        assert!(matches!(
            buf.set_rgba(5, 5, 0, 0, 0, 0),
            Err(Error::IndexOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_rows_and_pixels() {
        let buf = PixelBuffer::from_fn(3, 2, |x, y| [x as u8, y as u8, 0, 0]).unwrap();
        let rows: Vec<&[u8]> = buf.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].len(), 12);
        assert_eq!(rows[1][4], 1);
        assert_eq!(buf.pixels().count(), 6);
    }

    #[test]
    fn test_is_binary() {
        let black = PixelBuffer::new_filled(2, 2, [0, 0, 0, 17]).unwrap();
        assert!(black.is_binary());
        let mut mixed = black.clone();
        mixed.set_rgba(1, 1, 255, 255, 255, 0).unwrap();
        assert!(mixed.is_binary());
        mixed.set_rgba(0, 0, 255, 0, 255, 0).unwrap();
        assert!(!mixed.is_binary());
    }
}
