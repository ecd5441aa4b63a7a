//! PNM (Portable Any Map) format support
//!
//! Reads binary PGM (`P5`), PPM (`P6`) and PAM (`P7`) images and writes
//! PAM with `TUPLTYPE RGB_ALPHA`, which is the only Netpbm variant that
//! carries alpha. Samples with a maxval other than 255 are rescaled to
//! `0..=255`.

use crate::{IoError, IoResult};
use rasterkit_core::PixelBuffer;
use rasterkit_core::color::CHANNELS;
use std::io::{Read, Write};

/// Byte cursor over a PNM header
struct HeaderScanner<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> HeaderScanner<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Skip whitespace and `#` comments
    fn skip_space(&mut self) {
        while let Some(&b) = self.data.get(self.pos) {
            if b == b'#' {
                while let Some(&c) = self.data.get(self.pos) {
                    self.pos += 1;
                    if c == b'\n' {
                        break;
                    }
                }
            } else if b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn token(&mut self) -> IoResult<&'a str> {
        self.skip_space();
        let start = self.pos;
        while self
            .data
            .get(self.pos)
            .is_some_and(|b| !b.is_ascii_whitespace())
        {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(IoError::InvalidData("truncated PNM header".to_string()));
        }
        std::str::from_utf8(&self.data[start..self.pos])
            .map_err(|_| IoError::InvalidData("non-ASCII PNM header".to_string()))
    }

    fn number(&mut self) -> IoResult<u32> {
        let tok = self.token()?;
        tok.parse()
            .map_err(|_| IoError::InvalidData(format!("invalid PNM header value: {tok}")))
    }

    /// Consume the single whitespace byte that ends a P5/P6 header
    fn end_of_header(&mut self) -> IoResult<()> {
        match self.data.get(self.pos) {
            Some(b) if b.is_ascii_whitespace() => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(IoError::InvalidData("missing PNM raster".to_string())),
        }
    }

    /// Consume the rest of the current line
    fn skip_line(&mut self) {
        while let Some(&c) = self.data.get(self.pos) {
            self.pos += 1;
            if c == b'\n' {
                break;
            }
        }
    }

    fn rest(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }
}

/// Decoded header fields shared by all variants
struct PnmHeader {
    width: u32,
    height: u32,
    depth: usize,
    maxval: u32,
}

fn parse_pam_header(scanner: &mut HeaderScanner<'_>) -> IoResult<PnmHeader> {
    let mut width = None;
    let mut height = None;
    let mut depth = None;
    let mut maxval = None;

    loop {
        let key = scanner.token()?;
        match key {
            "ENDHDR" => {
                scanner.skip_line();
                break;
            }
            "WIDTH" => width = Some(scanner.number()?),
            "HEIGHT" => height = Some(scanner.number()?),
            "DEPTH" => depth = Some(scanner.number()?),
            "MAXVAL" => maxval = Some(scanner.number()?),
            // Tuple type is implied by DEPTH
            "TUPLTYPE" => scanner.skip_line(),
            other => {
                return Err(IoError::InvalidData(format!(
                    "unknown PAM header field: {other}"
                )));
            }
        }
    }

    let missing = |name: &str| IoError::InvalidData(format!("PAM header missing {name}"));
    Ok(PnmHeader {
        width: width.ok_or_else(|| missing("WIDTH"))?,
        height: height.ok_or_else(|| missing("HEIGHT"))?,
        depth: depth.ok_or_else(|| missing("DEPTH"))? as usize,
        maxval: maxval.ok_or_else(|| missing("MAXVAL"))?,
    })
}

/// Rescale a sample from `0..=maxval` to `0..=255`, rounding to nearest
fn scale_sample(v: u32, maxval: u32) -> u8 {
    if maxval == 255 {
        return v.min(255) as u8;
    }
    let v = v.min(maxval);
    ((v * 255 + maxval / 2) / maxval) as u8
}

/// Decode PNM bytes
pub fn decode_pnm(data: &[u8]) -> IoResult<PixelBuffer> {
    let mut scanner = HeaderScanner::new(data);
    let magic = scanner.token()?;

    let header = match magic {
        "P5" | "P6" => {
            let width = scanner.number()?;
            let height = scanner.number()?;
            let maxval = scanner.number()?;
            scanner.end_of_header()?;
            PnmHeader {
                width,
                height,
                depth: if magic == "P5" { 1 } else { 3 },
                maxval,
            }
        }
        "P7" => parse_pam_header(&mut scanner)?,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNM variant: {other}"
            )));
        }
    };

    if header.maxval == 0 || header.maxval > u16::MAX as u32 {
        return Err(IoError::InvalidData(format!(
            "invalid PNM maxval: {}",
            header.maxval
        )));
    }
    if !(1..=4).contains(&header.depth) {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PAM depth: {}",
            header.depth
        )));
    }

    let bytes_per_sample = if header.maxval > 255 { 2 } else { 1 };
    let step = header.depth * bytes_per_sample;
    let too_large = || {
        IoError::InvalidData(format!(
            "PNM dimensions {}x{} too large",
            header.width, header.height
        ))
    };
    let n = (header.width as usize)
        .checked_mul(header.height as usize)
        .ok_or_else(too_large)?;
    let needed = n.checked_mul(step).ok_or_else(too_large)?;
    let raster = scanner.rest();
    if raster.len() < needed {
        return Err(IoError::InvalidData(format!(
            "PNM raster truncated: expected {} bytes, got {}",
            needed,
            raster.len()
        )));
    }

    let mut samples = Vec::with_capacity(n * CHANNELS);
    for px in raster[..needed].chunks_exact(step) {
        let s = |c: usize| {
            let v = if bytes_per_sample == 2 {
                u16::from_be_bytes([px[c * 2], px[c * 2 + 1]]) as u32
            } else {
                px[c] as u32
            };
            scale_sample(v, header.maxval)
        };
        let rgba = match header.depth {
            1 => [s(0), s(0), s(0), 255],
            2 => [s(0), s(0), s(0), s(1)],
            3 => [s(0), s(1), s(2), 255],
            _ => [s(0), s(1), s(2), s(3)],
        };
        samples.extend_from_slice(&rgba);
    }

    Ok(PixelBuffer::from_samples(
        header.width,
        header.height,
        samples,
    )?)
}

/// Read a PNM image from a reader.
pub fn read_pnm<R: Read>(mut reader: R) -> IoResult<PixelBuffer> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    decode_pnm(&data)
}

/// Write a buffer as PAM (`P7`, `RGB_ALPHA`, maxval 255).
pub fn write_pam<W: Write>(buffer: &PixelBuffer, mut writer: W) -> IoResult<()> {
    write!(
        writer,
        "P7\nWIDTH {}\nHEIGHT {}\nDEPTH 4\nMAXVAL 255\nTUPLTYPE RGB_ALPHA\nENDHDR\n",
        buffer.width(),
        buffer.height()
    )?;
    writer.write_all(buffer.samples())?;
    writer.flush()?;
    Ok(())
}
