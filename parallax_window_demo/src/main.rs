//! Parallax window demo
//!
//! Opens a window onto a room of columns and renders it through an off-axis
//! frustum driven by a simulated head. WASD/QE move, drag with the left
//! mouse button to look, Space recalibrates, Escape quits.
//!
//! Usage: `parallax_window_demo [config.toml]`

mod canvas;
mod font;
mod minifb_substrate;
mod swaying_head;

use std::path::Path;
use std::process::ExitCode;
use parallax_window::tracking::ThreadedTracker;
use parallax_window::{pw_error, pw_info, run, AppConfig, Result};
use minifb_substrate::MinifbSubstrate;
use swaying_head::SwayingHead;

const SOURCE: &str = "demo::Main";

fn load_config() -> Result<AppConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            pw_info!(SOURCE, "Loading config from {}", path);
            AppConfig::load(Path::new(&path))
        }
        None => Ok(AppConfig::default()),
    }
}

fn run_demo() -> Result<()> {
    let config = load_config()?;
    let mut substrate = MinifbSubstrate::new(&config.window)?;
    let tracker = ThreadedTracker::new(
        SwayingHead::default(),
        config.screen_geometry(),
        config.tracking.offset_scale,
    );
    let mut navigator = config.camera.navigator();

    let summary = run(&config, &mut substrate, tracker, &mut navigator)?;
    pw_info!(
        SOURCE,
        "{} frames, {} calibrations, last render rate {:.1} fps",
        summary.frames,
        summary.calibrations,
        summary.render_fps
    );
    Ok(())
}

fn main() -> ExitCode {
    match run_demo() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            pw_error!(SOURCE, "{}", e);
            ExitCode::FAILURE
        }
    }
}
