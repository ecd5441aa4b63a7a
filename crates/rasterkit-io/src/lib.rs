//! rasterkit-io - Image I/O for rasterkit
//!
//! Decodes image files into RGBA [`PixelBuffer`]s and encodes buffers back
//! to disk.
//!
//! # Supported formats
//!
//! - PNG (feature `png-format`, enabled by default)
//! - JPEG (feature `jpeg`, enabled by default)
//! - PNM: PGM `P5`, PPM `P6`, PAM `P7` (feature `pnm`, enabled by default)
//!
//! Reading detects the format from magic bytes, never from the file name.

mod error;
mod format;

#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format_from_bytes};

use log::debug;
use rasterkit_core::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Cursor, Read, Write};
use std::path::Path;

/// Read an image from a file path.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    let mut data = Vec::new();
    File::open(path)?.read_to_end(&mut data)?;
    debug!("read {} bytes from {}", data.len(), path.display());
    read_image_mem(&data)
}

/// Decode an image from memory.
pub fn read_image_mem(data: &[u8]) -> IoResult<PixelBuffer> {
    let format = detect_format_from_bytes(data)?;
    let buffer = match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(Cursor::new(data))?,

        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(Cursor::new(data))?,

        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::decode_pnm(data)?,

        #[allow(unreachable_patterns)]
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "{:?} support not enabled",
                format
            )));
        }
    };
    debug!(
        "decoded {:?} image: {}x{}",
        format,
        buffer.width(),
        buffer.height()
    );
    Ok(buffer)
}

/// Write an image to a file path in the given format.
pub fn write_image<P: AsRef<Path>>(
    buffer: &PixelBuffer,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_image_format(buffer, &mut writer, format)?;
    writer.flush()?;
    debug!("wrote {:?} image to {}", format, path.display());
    Ok(())
}

/// Encode an image into memory.
pub fn write_image_mem(buffer: &PixelBuffer, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut data = Vec::new();
    write_image_format(buffer, &mut data, format)?;
    Ok(data)
}

/// Encode an image to an arbitrary writer.
pub fn write_image_format<W: Write>(
    buffer: &PixelBuffer,
    writer: W,
    format: ImageFormat,
) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(buffer, writer),

        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(buffer, writer),

        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pam(buffer, writer),

        #[allow(unreachable_patterns)]
        _ => {
            let _ = writer;
            Err(IoError::UnsupportedFormat(format!(
                "{:?} support not enabled",
                format
            )))
        }
    }
}
