//! rasterkit-test - regression harness shared by the workspace's tests
//!
//! Each `tests/*_reg.rs` file creates a [`RegParams`], runs numbered checks
//! against it and asserts on [`RegParams::cleanup`]. Image outputs go to
//! `tests/regout` and are matched against `tests/golden`.
//!
//! `REGTEST_MODE` selects what happens to goldens:
//!
//! | value | effect |
//! |---|---|
//! | `compare` (default) | decode and compare; a missing golden fails the check |
//! | `generate` | overwrite goldens with the current outputs |
//! | `display` | write outputs only |
//!
//! ```ignore
//! use rasterkit_test::{RegParams, synthetic};
//!
//! let mut rp = RegParams::new("binarize");
//! let src = synthetic::bimodal_blocks(32, 32, 8, 40, 200).unwrap();
//! rp.compare_values(32.0, src.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;
pub mod synthetic;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use std::path::PathBuf;

fn workspace_dir(sub: &str) -> PathBuf {
    // crates/rasterkit-test -> workspace root
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .join(sub)
}

/// Directory holding golden files.
pub fn golden_dir() -> String {
    workspace_dir("tests/golden").display().to_string()
}

/// Directory receiving regression outputs.
pub fn regout_dir() -> String {
    workspace_dir("tests/regout").display().to_string()
}
