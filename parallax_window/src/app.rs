/// Frame loop - wires config, tracking, controller and substrate together
///
/// `run` owns the tracking feed for the whole session: it is created and
/// started before the first frame and released (stop, then teardown) on
/// every exit path, including a failed present.

use crate::camera::Navigator;
use crate::config::AppConfig;
use crate::controller::OffAxisCameraController;
use crate::error::Result;
use crate::renderer::{Overlay, OverlayText, RenderSubstrate};
use crate::scene::{Color, Scene};
use crate::timing::RateMeter;
use crate::tracking::{TrackingFeed, TrackingSubsystem};
use crate::{pw_debug, pw_error, pw_info};

const SOURCE: &str = "parallax::App";

/// Longest frame step handed to navigation (seconds), so a stall does not
/// teleport the camera.
const MAX_FRAME_STEP: f32 = 0.1;

const CLEAR_COLOR: Color = Color::OFF_WHITE;

const CONTROLS: [&str; 4] = [
    "Free camera default controls:",
    "- Mouse: look around",
    "- W/A/S/D: move, Q/E: down/up",
    "- Space: calibrate head position",
];

/// Tracking state as shown in the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingStatus {
    Tracking,
    /// Tracking, but no update within the stale threshold
    Stale,
    /// Disabled in config, or start failed
    Unavailable,
}

/// What a finished session did.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub calibrations: u32,
    /// Tracking was running when the loop started
    pub tracking_started: bool,
    /// Smoothed render rate at exit
    pub render_fps: f32,
    /// Tracker rate at exit
    pub tracking_rate: f32,
}

/// Diagnostics panel: controls, render/tracking rates, tracking status.
pub fn diagnostics_overlay(render_fps: f32, tracking_rate: f32, status: TrackingStatus) -> Overlay {
    let mut lines: Vec<OverlayText> = CONTROLS
        .iter()
        .enumerate()
        .map(|(i, text)| OverlayText {
            text: text.to_string(),
            x: 20,
            y: 20 + 20 * i as i32,
            color: if i == 0 { Color::BLACK } else { Color::DARK_GRAY },
        })
        .collect();

    let mut y = 20 + 20 * CONTROLS.len() as i32;
    lines.push(OverlayText {
        text: format!(
            "FPS: {} Tracking FPS: {:.2}",
            render_fps.max(0.0).round() as u32,
            tracking_rate.max(0.0)
        ),
        x: 20,
        y,
        color: Color::BLACK,
    });

    let status_line = match status {
        TrackingStatus::Tracking => None,
        TrackingStatus::Stale => Some("Tracking stale, holding last head position"),
        TrackingStatus::Unavailable => Some("Tracking unavailable"),
    };
    if let Some(text) = status_line {
        y += 20;
        lines.push(OverlayText {
            text: text.to_string(),
            x: 20,
            y,
            color: Color::MAROON,
        });
    }

    Overlay {
        panel: (10, 10, 340, y + 20),
        panel_fill: Color::SKY_BLUE.fade(0.5),
        panel_border: Color::BLUE,
        lines,
    }
}

/// Run the window until the substrate asks to close.
///
/// Tracking failures never end the loop: without tracking the view renders
/// from the neutral eye position. Only a failed present (`end_frame`) ends
/// the run early, and the tracking subsystem is released in that case too.
///
/// # Errors
///
/// `Error::InvalidConfig` before anything starts, or the substrate's error
/// from `end_frame`.
pub fn run<R, S, N>(
    config: &AppConfig,
    substrate: &mut R,
    subsystem: S,
    navigator: &mut N,
) -> Result<RunSummary>
where
    R: RenderSubstrate + ?Sized,
    S: TrackingSubsystem,
    N: Navigator + ?Sized,
{
    config.validate()?;

    let seed = config.scene.resolved_seed();
    let scene = Scene::room(config.scene.columns, seed);
    pw_debug!(SOURCE, "Scene: {} boxes (seed {})", scene.boxes.len(), seed);

    let mut feed = TrackingFeed::new(subsystem, &config.tracking, config.screen_geometry());
    if config.tracking.enabled {
        // Failure is already logged by the feed; keep rendering without parallax
        let _ = feed.start(config.tracking.device_index);
    } else {
        pw_info!(SOURCE, "Tracking disabled by config");
    }
    let tracking_started = feed.is_tracking();

    let mut controller = OffAxisCameraController::new(config.camera.pose(), config.camera.clip());
    let mut clock = RateMeter::default();
    let mut calibrations = 0u32;

    while !substrate.close_requested() {
        let input = substrate.poll_input();
        let dt = clock.tick().min(MAX_FRAME_STEP);

        substrate.begin_frame(CLEAR_COLOR);
        let report = controller.frame(&mut feed, navigator, substrate, &scene, &input, dt);
        if report.calibrated {
            calibrations += 1;
        }

        let status = if !feed.is_tracking() {
            TrackingStatus::Unavailable
        } else if feed.is_stale() {
            TrackingStatus::Stale
        } else {
            TrackingStatus::Tracking
        };
        substrate.draw_overlay(&diagnostics_overlay(clock.rate(), feed.read_tracking_rate(), status));

        if let Err(e) = substrate.end_frame() {
            pw_error!(SOURCE, "Presenting frame {} failed: {}", controller.frames(), e);
            return Err(e);
        }
    }

    let summary = RunSummary {
        frames: controller.frames(),
        calibrations,
        tracking_started,
        render_fps: clock.rate(),
        tracking_rate: feed.read_tracking_rate(),
    };
    feed.shutdown();
    pw_info!(SOURCE, "Closed after {} frames", summary.frames);
    Ok(summary)
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
