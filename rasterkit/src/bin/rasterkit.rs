//! Run one sharpen/blur/threshold job described by a JSON file.
//!
//! Usage: `rasterkit <job.json>`. Set `RUST_LOG=debug` for per-operation
//! details.

use rasterkit::job::{load_job, run_job};
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn usage() -> String {
    "Usage: rasterkit <job.json>".to_string()
}

fn run() -> Result<(), String> {
    let job_path = env::args().nth(1).ok_or_else(usage)?;
    let job = load_job(Path::new(&job_path))?;
    run_job(&job)
}
