//! I/O regression test
//!
//! Write-read behavior of every supported format and format detection
//! on encoded output.

use rasterkit_io::{ImageFormat, IoError, detect_format_from_bytes, read_image, read_image_mem};
use rasterkit_io::{write_image, write_image_mem};
use rasterkit_test::{RegParams, regout_dir, synthetic};

#[test]
fn io_reg() {
    let mut rp = RegParams::new("io");

    let src = synthetic::color_ramp(37, 23).unwrap();

    // Lossless formats keep every sample, alpha included
    for format in [ImageFormat::Png, ImageFormat::Pnm] {
        let bytes = write_image_mem(&src, format).unwrap();
        assert_eq!(detect_format_from_bytes(&bytes).unwrap(), format);
        let back = read_image_mem(&bytes).unwrap();
        rp.compare_buffers(&src, &back);
    }

    // JPEG keeps dimensions, drops alpha and stays close
    let bytes = write_image_mem(&src, ImageFormat::Jpeg).unwrap();
    assert_eq!(detect_format_from_bytes(&bytes).unwrap(), ImageFormat::Jpeg);
    let back = read_image_mem(&bytes).unwrap();
    rp.compare_values(src.width() as f64, back.width() as f64, 0.0);
    rp.compare_values(src.height() as f64, back.height() as f64, 0.0);
    rp.compare_values(255.0, back.alpha(10, 10).unwrap() as f64, 0.0);
    let flat = synthetic::gray(16, 16, |_, _| 120).unwrap();
    let flat_back = read_image_mem(&write_image_mem(&flat, ImageFormat::Jpeg).unwrap()).unwrap();
    rp.compare_values(120.0, flat_back.get_rgb(8, 8).unwrap().0 as f64, 3.0);

    // Golden check on the lossless encoding
    rp.write_buffer_and_check(&src, ImageFormat::Png).unwrap();

    assert!(rp.cleanup());
}

#[test]
fn io_file_reg() {
    let mut rp = RegParams::new("io_file");

    let src = synthetic::bimodal_blocks(20, 12, 4, 30, 220).unwrap();
    let path = format!("{}/io_file.roundtrip.pam", regout_dir());
    write_image(&src, &path, ImageFormat::Pnm).unwrap();
    let back = read_image(&path).unwrap();
    rp.compare_buffers(&src, &back);

    let missing = read_image(format!("{}/does-not-exist.png", regout_dir()));
    assert!(matches!(missing, Err(IoError::Io(_))));

    let garbage = read_image_mem(b"BM not supported");
    assert!(matches!(garbage, Err(IoError::UnsupportedFormat(_))));

    assert!(rp.cleanup());
}
