//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate and writes them with
//! `jpeg-encoder`. Grayscale and RGB inputs are decoded to opaque RGBA.
//! JPEG has no alpha channel, so writing drops it.

use crate::{IoError, IoResult};
use jpeg_decoder::{Decoder, PixelFormat};
use jpeg_encoder::{ColorType, Encoder};
use rasterkit_core::PixelBuffer;
use rasterkit_core::color::CHANNELS;
use std::io::{Read, Write};

/// Default JPEG quality used by [`write_jpeg`]
pub const DEFAULT_QUALITY: u8 = 90;

/// Read a JPEG image from a reader.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG info unavailable".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    let n = width as usize * height as usize;
    let mut samples = Vec::with_capacity(n * CHANNELS);

    match info.pixel_format {
        PixelFormat::L8 => {
            for &v in pixels.iter().take(n) {
                samples.extend_from_slice(&[v, v, v, 255]);
            }
        }
        PixelFormat::L16 => {
            // Big-endian 16-bit samples; keep the high byte
            for px in pixels.chunks_exact(2).take(n) {
                samples.extend_from_slice(&[px[0], px[0], px[0], 255]);
            }
        }
        PixelFormat::RGB24 => {
            for px in pixels.chunks_exact(3).take(n) {
                samples.extend_from_slice(&[px[0], px[1], px[2], 255]);
            }
        }
        PixelFormat::CMYK32 => {
            return Err(IoError::UnsupportedFormat(
                "CMYK JPEG is not supported".to_string(),
            ));
        }
    }

    Ok(PixelBuffer::from_samples(width, height, samples)?)
}

/// Write a JPEG image with [`DEFAULT_QUALITY`].
pub fn write_jpeg<W: Write>(buffer: &PixelBuffer, writer: W) -> IoResult<()> {
    write_jpeg_with_quality(buffer, writer, DEFAULT_QUALITY)
}

/// Write a JPEG image with the given quality (1..=100).
pub fn write_jpeg_with_quality<W: Write>(
    buffer: &PixelBuffer,
    writer: W,
    quality: u8,
) -> IoResult<()> {
    let width = u16::try_from(buffer.width()).map_err(|_| {
        IoError::EncodeError(format!("width {} exceeds JPEG limit", buffer.width()))
    })?;
    let height = u16::try_from(buffer.height()).map_err(|_| {
        IoError::EncodeError(format!("height {} exceeds JPEG limit", buffer.height()))
    })?;

    let encoder = Encoder::new(writer, quality.clamp(1, 100));
    encoder
        .encode(buffer.samples(), width, height, ColorType::Rgba)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))
}
