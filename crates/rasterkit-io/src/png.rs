//! PNG image format support
//!
//! Every PNG color type is decoded to RGBA: palettes and sub-byte
//! grayscale are expanded by the decoder, gray is replicated into R, G
//! and B, missing alpha becomes 255, and 16-bit samples keep their high
//! byte. Writing always produces 8-bit RGBA.

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use rasterkit_core::PixelBuffer;
use rasterkit_core::color::CHANNELS;
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let color_type = output_info.color_type;
    let bit_depth = output_info.bit_depth;

    let channels = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "indexed PNG was not expanded".to_string(),
            ));
        }
    };
    let bytes_per_sample = match bit_depth {
        BitDepth::Eight => 1,
        BitDepth::Sixteen => 2,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG bit depth after expansion: {:?}",
                bit_depth
            )));
        }
    };

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let step = channels * bytes_per_sample;
    let mut samples = Vec::with_capacity(width as usize * height as usize * CHANNELS);

    for y in 0..height as usize {
        let row = &data[y * bytes_per_row..];
        for x in 0..width as usize {
            let px = &row[x * step..x * step + step];
            // High byte of each sample
            let s = |c: usize| px[c * bytes_per_sample];
            let rgba = match channels {
                1 => [s(0), s(0), s(0), 255],
                2 => [s(0), s(0), s(0), s(1)],
                3 => [s(0), s(1), s(2), 255],
                _ => [s(0), s(1), s(2), s(3)],
            };
            samples.extend_from_slice(&rgba);
        }
    }

    Ok(PixelBuffer::from_samples(width, height, samples)?)
}

/// Write a PNG image as 8-bit RGBA
pub fn write_png<W: Write>(buffer: &PixelBuffer, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, buffer.width(), buffer.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    writer
        .write_image_data(buffer.samples())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
