//! JSON job files for the `rasterkit` binary
//!
//! A job names one input image, one output image and one operation:
//!
//! ```json
//! {
//!   "input": "scan.png",
//!   "output": "scan.bin.png",
//!   "operation": { "kind": "adaptive", "block_size": 15, "c": 5 },
//!   "keep_original": "scan.orig.png"
//! }
//! ```
//!
//! The output format follows the output file extension and falls back to
//! PNG.

use crate::PixelBuffer;
use crate::filter::{MAX_BLUR_RADIUS, box_blur, sharpen};
use crate::io::{self, ImageFormat};
use crate::threshold::{
    AdaptiveThresholdOptions, ThresholdMethod, adaptive_threshold, global_threshold,
};
use log::info;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

fn default_block_size() -> u32 {
    AdaptiveThresholdOptions::default().block_size
}

fn default_c() -> f64 {
    AdaptiveThresholdOptions::default().c
}

fn default_method() -> String {
    ThresholdMethod::Otsu.to_string()
}

/// Operation applied to the input image
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Operation {
    /// 3x3 sharpening kernel
    Sharpen,
    /// Box blur over a `(2 * radius + 1)²` window
    Blur {
        #[serde(default = "default_radius")]
        radius: u32,
    },
    /// Single threshold for the whole image
    Global {
        #[serde(default = "default_method")]
        method: String,
    },
    /// Local window mean minus `c`
    Adaptive {
        #[serde(default = "default_block_size")]
        block_size: u32,
        #[serde(default = "default_c")]
        c: f64,
    },
}

fn default_radius() -> u32 {
    1
}

/// Validated form of [`Operation`], ready to run
#[derive(Debug, Clone, Copy, PartialEq)]
enum Prepared {
    Sharpen,
    Blur(u32),
    Global(ThresholdMethod),
    Adaptive(AdaptiveThresholdOptions),
}

impl Operation {
    fn prepare(&self) -> Result<Prepared, String> {
        match self {
            Self::Sharpen => Ok(Prepared::Sharpen),
            Self::Blur { radius } if *radius > MAX_BLUR_RADIUS => Err(format!(
                "blur radius {radius} exceeds maximum {MAX_BLUR_RADIUS}"
            )),
            Self::Blur { radius } => Ok(Prepared::Blur(*radius)),
            Self::Global { method } => method
                .parse::<ThresholdMethod>()
                .map(Prepared::Global)
                .map_err(|e| e.to_string()),
            Self::Adaptive { block_size, c } => {
                let options = AdaptiveThresholdOptions::new(*block_size, *c);
                options.validate().map_err(|e| e.to_string())?;
                Ok(Prepared::Adaptive(options))
            }
        }
    }

    /// Check parameters without touching any image.
    pub fn validate(&self) -> Result<(), String> {
        self.prepare().map(|_| ())
    }

    /// Run the operation on a buffer.
    pub fn apply(&self, buffer: &PixelBuffer) -> Result<PixelBuffer, String> {
        let out = match self.prepare()? {
            Prepared::Sharpen => sharpen(buffer),
            Prepared::Blur(radius) => box_blur(buffer, radius).map_err(|e| e.to_string())?,
            Prepared::Global(method) => global_threshold(buffer, method),
            Prepared::Adaptive(options) => {
                adaptive_threshold(buffer, &options).map_err(|e| e.to_string())?
            }
        };
        Ok(out)
    }

    /// Short name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sharpen => "sharpen",
            Self::Blur { .. } => "blur",
            Self::Global { .. } => "global",
            Self::Adaptive { .. } => "adaptive",
        }
    }
}

/// One processing job
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
    pub operation: Operation,
    /// Where to write the untouched source, if anywhere
    #[serde(default)]
    pub keep_original: Option<PathBuf>,
}

impl Job {
    /// Format of the output file, from its extension.
    pub fn output_format(&self) -> ImageFormat {
        format_for(&self.output)
    }
}

fn format_for(path: &Path) -> ImageFormat {
    ImageFormat::from_path(path).unwrap_or_default()
}

/// Parse a job from JSON text.
pub fn parse_job(text: &str) -> Result<Job, String> {
    serde_json::from_str(text).map_err(|e| format!("Failed to parse job: {e}"))
}

/// Load a job file.
pub fn load_job(path: &Path) -> Result<Job, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read job {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse job {}: {e}", path.display()))
}

/// Run a job: validate, read, process, write.
///
/// Parameters are checked before the input is read, so a bad job never
/// produces output.
pub fn run_job(job: &Job) -> Result<(), String> {
    job.operation.validate()?;

    let source = io::read_image(&job.input)
        .map_err(|e| format!("Failed to read {}: {e}", job.input.display()))?;
    info!(
        "loaded {} ({}x{})",
        job.input.display(),
        source.width(),
        source.height()
    );

    let result = job.operation.apply(&source)?;
    info!("applied {}", job.operation.name());

    io::write_image(&result, &job.output, job.output_format())
        .map_err(|e| format!("Failed to write {}: {e}", job.output.display()))?;
    info!("wrote {}", job.output.display());

    if let Some(path) = &job.keep_original {
        io::write_image(&source, path, format_for(path))
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
        info!("wrote original {}", path.display());
    }

    Ok(())
}
