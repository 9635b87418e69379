/// Synthetic head-pose source: a slow sway in front of the screen.
///
/// Stands in for a camera face tracker so the demo shows parallax without
/// hardware. Samples arrive at a fixed capture rate like a webcam's.

use std::time::{Duration, Instant};
use parallax_window::glam::Vec3;
use parallax_window::tracking::{HeadPoseSource, TrackerVariant};
use parallax_window::{pw_info, Result};

const SOURCE: &str = "demo::SwayingHead";

pub struct SwayingHead {
    /// Sway half-widths in screen heights
    amplitude: Vec3,
    frame_interval: Duration,
    started: Option<Instant>,
}

impl SwayingHead {
    pub fn new(amplitude: Vec3, capture_rate: f32) -> Self {
        Self {
            amplitude,
            frame_interval: Duration::from_secs_f32(1.0 / capture_rate.max(1.0)),
            started: None,
        }
    }

    /// Head position `seconds` after opening.
    pub fn position_at(&self, seconds: f32) -> Vec3 {
        Vec3::new(
            self.amplitude.x * (0.7 * seconds).sin(),
            self.amplitude.y * (1.1 * seconds).sin(),
            self.amplitude.z * (0.3 * seconds).sin(),
        )
    }
}

impl Default for SwayingHead {
    fn default() -> Self {
        Self::new(Vec3::new(0.25, 0.08, 0.15), 30.0)
    }
}

impl HeadPoseSource for SwayingHead {
    fn open(&mut self, device_index: u32) -> Result<()> {
        pw_info!(SOURCE, "Simulating head on device {}", device_index);
        self.started = Some(Instant::now());
        Ok(())
    }

    fn set_variant(&mut self, variant: TrackerVariant) {
        pw_info!(SOURCE, "Variant {:?} has no effect on a simulated head", variant);
    }

    fn next_sample(&mut self) -> Option<Vec3> {
        std::thread::sleep(self.frame_interval);
        let started = self.started?;
        Some(self.position_at(started.elapsed().as_secs_f32()))
    }

    fn close(&mut self) {
        self.started = None;
    }
}
