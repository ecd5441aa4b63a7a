//! Regression checks and golden-file bookkeeping

use crate::error::{TestError, TestResult};
use crate::{golden_dir, regout_dir};
use rasterkit_core::PixelBuffer;
use rasterkit_io::ImageFormat;
use std::fs;
use std::path::Path;

/// What to do with golden files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Overwrite goldens with the current outputs
    Generate,
    /// Check outputs against goldens; a missing golden fails
    #[default]
    Compare,
    /// Write outputs only
    Display,
}

impl RegTestMode {
    /// Mode for a name; unknown names fall back to compare.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }

    /// Mode named by `REGTEST_MODE`.
    pub fn from_env() -> Self {
        std::env::var("REGTEST_MODE")
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }
}

/// State of one regression test run.
///
/// Every check bumps a 1-based index used in messages and file names.
/// Failed checks are recorded rather than panicking; [`RegParams::cleanup`]
/// prints the summary and reports whether the run passed.
pub struct RegParams {
    pub test_name: String,
    pub mode: RegTestMode,
    index: usize,
    failures: Vec<String>,
}

impl RegParams {
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();
        for dir in [golden_dir(), regout_dir()] {
            let _ = fs::create_dir_all(dir);
        }
        eprintln!("\n==== {test_name}_reg ({mode:?}) ====");

        Self {
            test_name: test_name.to_string(),
            mode,
            index: 0,
            failures: Vec::new(),
        }
    }

    /// Index of the most recent check.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn next(&mut self) -> usize {
        self.index += 1;
        self.index
    }

    fn record(&mut self, detail: String) -> bool {
        let msg = format!("{}_reg check {}: {}", self.test_name, self.index, detail);
        eprintln!("FAIL {msg}");
        self.failures.push(msg);
        false
    }

    /// Pass when `actual` is within `delta` of `expected`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.next();
        let diff = (expected - actual).abs();
        if diff <= delta {
            return true;
        }
        self.record(format!(
            "expected {expected}, got {actual} (diff {diff} > {delta})"
        ))
    }

    /// Pass when both buffers have the same size and samples.
    pub fn compare_buffers(&mut self, expected: &PixelBuffer, actual: &PixelBuffer) -> bool {
        self.next();
        if expected.dimensions() != actual.dimensions() {
            return self.record(format!(
                "size {:?} != {:?}",
                expected.dimensions(),
                actual.dimensions()
            ));
        }
        match first_difference(expected, actual) {
            None => true,
            Some(i) => {
                let pixel = (i / 4) as u32;
                let (x, y) = (pixel % expected.width(), pixel / expected.width());
                self.record(format!("samples differ at ({x}, {y})"))
            }
        }
    }

    /// Write `buffer` to `tests/regout/<name>.<NN>.<ext>` and check it
    /// against `tests/golden/<name>_golden.<NN>.<ext>`.
    ///
    /// Generate overwrites the golden. Compare decodes both files and
    /// compares samples, failing when the golden does not exist. Display
    /// stops after writing.
    pub fn write_buffer_and_check(
        &mut self,
        buffer: &PixelBuffer,
        format: ImageFormat,
    ) -> TestResult<()> {
        let index = self.next();
        let ext = format.extension();
        let local = format!("{}/{}.{index:02}.{ext}", regout_dir(), self.test_name);
        let golden = format!("{}/{}_golden.{index:02}.{ext}", golden_dir(), self.test_name);

        rasterkit_io::write_image(buffer, &local, format).map_err(|e| TestError::ImageWrite {
            path: local.clone(),
            message: e.to_string(),
        })?;

        match self.mode {
            RegTestMode::Display => {}
            RegTestMode::Generate => {
                fs::copy(&local, &golden)?;
                eprintln!("generated {golden}");
            }
            RegTestMode::Compare if !Path::new(&golden).exists() => {
                self.record(format!("golden file not found: {golden}"));
            }
            RegTestMode::Compare => {
                let (ours, theirs) = (fs::read(&local)?, fs::read(&golden)?);
                if ours != theirs && !decoded_equal(&ours, &theirs) {
                    self.record(format!("{local} does not match {golden}"));
                }
            }
        }
        Ok(())
    }

    /// Print the summary; `true` when no check failed.
    pub fn cleanup(self) -> bool {
        let passed = self.failures.is_empty();
        if passed {
            eprintln!("PASS {}_reg ({} checks)\n", self.test_name, self.index);
        } else {
            eprintln!(
                "FAIL {}_reg: {} of {} checks failed",
                self.test_name,
                self.failures.len(),
                self.index
            );
            for failure in &self.failures {
                eprintln!("  {failure}");
            }
            eprintln!();
        }
        passed
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

fn first_difference(a: &PixelBuffer, b: &PixelBuffer) -> Option<usize> {
    a.samples().iter().zip(b.samples()).position(|(p, q)| p != q)
}

/// Whether two encoded images decode to the same samples.
fn decoded_equal(a: &[u8], b: &[u8]) -> bool {
    match (rasterkit_io::read_image_mem(a), rasterkit_io::read_image_mem(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse() {
        assert_eq!(RegTestMode::parse("generate"), RegTestMode::Generate);
        assert_eq!(RegTestMode::parse(" Display "), RegTestMode::Display);
        assert_eq!(RegTestMode::parse("compare"), RegTestMode::Compare);
        assert_eq!(RegTestMode::parse(""), RegTestMode::Compare);
        assert_eq!(RegTestMode::parse("bogus"), RegTestMode::Compare);
    }

    #[test]
    fn test_compare_values() {
        let mut rp = RegParams::new("params_values");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.index(), 3);
        assert_eq!(rp.failures().len(), 1);
        assert!(rp.failures()[0].contains("check 3"));
    }

    #[test]
    fn test_compare_buffers() {
        let a = PixelBuffer::new_filled(3, 3, [1, 2, 3, 4]).unwrap();
        let mut b = a.clone();
        let mut rp = RegParams::new("params_buffers");
        assert!(rp.compare_buffers(&a, &b));

        b.set_rgba(2, 1, 1, 2, 3, 5).unwrap();
        assert!(!rp.compare_buffers(&a, &b));
        assert!(rp.failures()[0].contains("(2, 1)"));

        let c = PixelBuffer::new(3, 2).unwrap();
        assert!(!rp.compare_buffers(&a, &c));
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_missing_golden_fails_compare() {
        let name = "params_missing_golden";
        let golden = format!("{}/{name}_golden.01.pam", golden_dir());
        let _ = fs::remove_file(&golden);

        let buf = PixelBuffer::new_filled(2, 2, [9, 8, 7, 255]).unwrap();
        let mut rp = RegParams::new(name);
        rp.mode = RegTestMode::Compare;
        rp.write_buffer_and_check(&buf, ImageFormat::Pnm).unwrap();

        assert!(!rp.is_success());
        assert!(rp.failures()[0].contains("golden file not found"));
        assert!(!Path::new(&golden).exists());
    }

    #[test]
    fn test_matching_golden_passes_compare() {
        let name = "params_matching_golden";
        let buf = PixelBuffer::new_filled(2, 2, [1, 2, 3, 4]).unwrap();

        let mut rp = RegParams::new(name);
        rp.mode = RegTestMode::Generate;
        rp.write_buffer_and_check(&buf, ImageFormat::Pnm).unwrap();

        let mut rp = RegParams::new(name);
        rp.mode = RegTestMode::Compare;
        rp.write_buffer_and_check(&buf, ImageFormat::Pnm).unwrap();
        assert!(rp.is_success());

        let _ = fs::remove_file(format!("{}/{name}_golden.01.pam", golden_dir()));
    }
}
