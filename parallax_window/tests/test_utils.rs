#![allow(dead_code)]
//! Shared test doubles for integration tests
//!
//! The crate's own mocks are `#[cfg(test)]` only, so integration tests bring
//! their own recording tracker, head source, and headless substrate.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use parallax_window::camera::RenderCamera;
use parallax_window::glam::{Mat4, Vec3};
use parallax_window::renderer::{FrameInput, Overlay, RenderSubstrate, Viewport};
use parallax_window::scene::{Color, Scene};
use parallax_window::tracking::{HeadPoseSource, TrackerVariant, TrackingSnapshot, TrackingSubsystem};
use parallax_window::{Error, Result};

// ============================================================================
// RECORDING TRACKER
// ============================================================================

/// Tracking subsystem that logs each call by name.
pub struct RecordingTracker {
    pub calls: Arc<Mutex<Vec<&'static str>>>,
    pub device_available: bool,
    pub snapshots: VecDeque<TrackingSnapshot>,
    last: Option<TrackingSnapshot>,
}

impl RecordingTracker {
    pub fn new(snapshots: Vec<TrackingSnapshot>) -> (Self, Arc<Mutex<Vec<&'static str>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let tracker = Self {
            calls: calls.clone(),
            device_available: true,
            snapshots: snapshots.into(),
            last: None,
        };
        (tracker, calls)
    }

    pub fn without_device() -> (Self, Arc<Mutex<Vec<&'static str>>>) {
        let (mut tracker, calls) = Self::new(Vec::new());
        tracker.device_available = false;
        (tracker, calls)
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

impl TrackingSubsystem for RecordingTracker {
    fn configure_frustum(&mut self, _aspect_ratio: f32, _near_plane: f32) {
        self.record("configure");
    }

    fn select_variant(&mut self, _variant: TrackerVariant) {
        self.record("variant");
    }

    fn start(&mut self, _device_index: u32) -> Result<()> {
        self.record("start");
        if self.device_available {
            Ok(())
        } else {
            Err(Error::DeviceUnavailable("camera busy".to_string()))
        }
    }

    fn latest(&mut self) -> Option<TrackingSnapshot> {
        self.record("latest");
        if let Some(next) = self.snapshots.pop_front() {
            self.last = Some(next);
        }
        self.last
    }

    fn calibrate(&mut self) {
        self.record("calibrate");
    }

    fn stop(&mut self) {
        self.record("stop");
    }

    fn teardown(&mut self) {
        self.record("teardown");
    }
}

// ============================================================================
// REPLAY HEAD SOURCE
// ============================================================================

/// Head source that loops over fixed positions.
pub struct ReplayHead {
    pub positions: Vec<Vec3>,
    pub events: Arc<Mutex<Vec<&'static str>>>,
    cursor: usize,
}

impl ReplayHead {
    pub fn new(positions: Vec<Vec3>) -> (Self, Arc<Mutex<Vec<&'static str>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        (Self { positions, events: events.clone(), cursor: 0 }, events)
    }
}

impl HeadPoseSource for ReplayHead {
    fn open(&mut self, _device_index: u32) -> Result<()> {
        self.events.lock().unwrap().push("open");
        Ok(())
    }

    fn next_sample(&mut self) -> Option<Vec3> {
        std::thread::sleep(std::time::Duration::from_millis(1));
        let sample = self.positions.get(self.cursor % self.positions.len().max(1)).copied();
        self.cursor += 1;
        sample
    }

    fn close(&mut self) {
        self.events.lock().unwrap().push("close");
    }
}

// ============================================================================
// HEADLESS SUBSTRATE
// ============================================================================

/// Substrate without a window: closes after `frame_limit` frames.
pub struct HeadlessSubstrate {
    pub frame_limit: usize,
    pub presented: usize,
    pub calibrate_frames: Vec<usize>,
    pub eye_positions: Vec<Vec3>,
    pub projections: Vec<Mat4>,
    pub overlays: Vec<Overlay>,
}

impl HeadlessSubstrate {
    pub fn new(frame_limit: usize) -> Self {
        Self {
            frame_limit,
            presented: 0,
            calibrate_frames: Vec::new(),
            eye_positions: Vec::new(),
            projections: Vec::new(),
            overlays: Vec::new(),
        }
    }

    /// Hold the calibrate key on these (0-based) frames.
    pub fn calibrating_on(mut self, frames: Vec<usize>) -> Self {
        self.calibrate_frames = frames;
        self
    }
}

impl RenderSubstrate for HeadlessSubstrate {
    fn close_requested(&self) -> bool {
        self.presented >= self.frame_limit
    }

    fn poll_input(&mut self) -> FrameInput {
        FrameInput {
            calibrate_held: self.calibrate_frames.contains(&self.presented),
            ..FrameInput::default()
        }
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(1280.0, 720.0)
    }

    fn begin_frame(&mut self, _clear: Color) {}

    fn draw_scene(&mut self, camera: &RenderCamera, _scene: &Scene) {
        self.eye_positions.push(camera.eye_position());
        self.projections.push(*camera.projection_matrix());
    }

    fn draw_overlay(&mut self, overlay: &Overlay) {
        self.overlays.push(overlay.clone());
    }

    fn end_frame(&mut self) -> Result<()> {
        self.presented += 1;
        Ok(())
    }
}
