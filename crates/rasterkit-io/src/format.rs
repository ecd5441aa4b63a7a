//! Image format detection
//!
//! Detects image formats by examining magic numbers in the file header,
//! and maps file extensions to formats for writing.

use crate::{IoError, IoResult};
use std::path::Path;

/// Image file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// PNG format (RGBA, lossless)
    #[default]
    Png,
    /// JFIF JPEG format (RGB, lossy; alpha is dropped on write)
    Jpeg,
    /// Netpbm format (PAM `P7` on write; `P5`, `P6`, `P7` on read)
    Pnm,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Pnm => "pam",
        }
    }

    /// Map a file extension (case-insensitive, without the dot) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "pam" | "pnm" | "ppm" | "pgm" => Some(Self::Pnm),
            _ => None,
        }
    }

    /// Format implied by a path's extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];
/// SOI marker followed by the first marker prefix
const JPEG_SOI: [u8; 3] = [0xFF, 0xD8, 0xFF];
/// Binary PGM, binary PPM, PAM
const NETPBM_MAGICS: [&[u8; 2]; 3] = [b"P5", b"P6", b"P7"];

/// Identify an encoded image by its leading bytes.
///
/// # Errors
///
/// [`IoError::InvalidData`] for fewer than two bytes,
/// [`IoError::UnsupportedFormat`] when no known signature matches.
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(format!(
            "{} bytes is too short to identify a format",
            data.len()
        )));
    }

    if data.starts_with(&PNG_SIGNATURE) {
        Ok(ImageFormat::Png)
    } else if data.starts_with(&JPEG_SOI) {
        Ok(ImageFormat::Jpeg)
    } else if NETPBM_MAGICS.iter().any(|m| data.starts_with(*m)) {
        Ok(ImageFormat::Pnm)
    } else {
        let shown = &data[..data.len().min(4)];
        Err(IoError::UnsupportedFormat(format!(
            "unrecognized signature {shown:02X?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_signatures() {
        let mut png = PNG_SIGNATURE.to_vec();
        png.extend_from_slice(b"\0\0\0\rIHDR");
        assert_eq!(detect_format_from_bytes(&png).unwrap(), ImageFormat::Png);

        let jfif = b"\xFF\xD8\xFF\xE0\0\x10JFIF\0";
        assert_eq!(detect_format_from_bytes(jfif).unwrap(), ImageFormat::Jpeg);

        // Truncated PNG signature is not a PNG
        assert!(detect_format_from_bytes(&PNG_SIGNATURE[..4]).is_err());
    }

    #[test]
    fn test_detect_pnm() {
        assert_eq!(
            detect_format_from_bytes(b"P5\n100 100\n255\n").unwrap(),
            ImageFormat::Pnm
        );
        assert_eq!(
            detect_format_from_bytes(b"P6\n100 100\n255\n").unwrap(),
            ImageFormat::Pnm
        );
        assert_eq!(
            detect_format_from_bytes(b"P7\nWIDTH 1\n").unwrap(),
            ImageFormat::Pnm
        );
    }

    #[test]
    fn test_detect_unknown() {
        assert!(matches!(
            detect_format_from_bytes(b"GIF89a\x00\x00"),
            Err(IoError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            detect_format_from_bytes(b"P"),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_extension_mapping() {
        assert_eq!(ImageFormat::from_extension("PNG"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_extension("jpeg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_path("out/x.pam"), Some(ImageFormat::Pnm));
        assert_eq!(ImageFormat::from_path("noext"), None);
        assert_eq!(ImageFormat::from_extension("bmp"), None);
        for f in [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::Pnm] {
            assert_eq!(ImageFormat::from_extension(f.extension()), Some(f));
        }
    }
}
