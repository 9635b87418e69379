/// ThreadedTracker - head tracking on a background thread
///
/// A `HeadPoseSource` is sampled on its own thread. Each sample is turned
/// into a `TrackingSnapshot` (offset from the calibrated origin, matching
/// off-axis bounds, update rate) and published through a triple buffer, so
/// the render thread always reads the newest complete snapshot without
/// blocking. Commands (calibrate, reconfigure, shutdown) go the other way
/// over a channel.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Duration;
use glam::Vec3;
use crate::camera::ScreenGeometry;
use crate::error::{Error, Result};
use crate::timing::RateMeter;
use crate::{pw_debug, pw_error, pw_info};
use super::{TrackerVariant, TrackingSnapshot, TrackingSubsystem};

const SOURCE: &str = "parallax::ThreadedTracker";

/// Wait after a sample without a detected head.
const IDLE_BACKOFF: Duration = Duration::from_millis(5);

/// Source of raw head positions (a face tracker on a camera, a replay, a
/// synthetic generator).
///
/// Positions are in screen heights, relative to the screen center, z toward
/// the viewer. The tracker thread owns the source between `open` and
/// `close`.
pub trait HeadPoseSource: Send {
    /// Acquire the capture device.
    fn open(&mut self, device_index: u32) -> Result<()>;

    /// Detection algorithm to use from now on.
    fn set_variant(&mut self, _variant: TrackerVariant) {}

    /// Next head position. May block for up to one capture interval;
    /// `None` when no head was found in this capture.
    fn next_sample(&mut self) -> Option<Vec3>;

    /// Release the capture device.
    fn close(&mut self);
}

enum TrackerCommand {
    Calibrate,
    Configure { aspect_ratio: f32, near_plane: f32 },
    Variant(TrackerVariant),
    Shutdown,
}

/// Settings the tracker thread computes snapshots with.
#[derive(Debug, Clone, Copy)]
struct TrackerSettings {
    geometry: ScreenGeometry,
    variant: TrackerVariant,
    offset_scale: f32,
}

struct Running<P> {
    commands: mpsc::Sender<TrackerCommand>,
    snapshots: triple_buffer::Output<TrackingSnapshot>,
    thread: JoinHandle<P>,
}

pub struct ThreadedTracker<P: HeadPoseSource + 'static> {
    /// Present while idle; moved into the thread while running
    source: Option<P>,
    settings: TrackerSettings,
    running: Option<Running<P>>,
}

impl<P: HeadPoseSource + 'static> ThreadedTracker<P> {
    /// `offset_scale` converts screen heights into world units for the
    /// published eye offset; bounds always use screen heights.
    pub fn new(source: P, geometry: ScreenGeometry, offset_scale: f32) -> Self {
        Self {
            source: Some(source),
            settings: TrackerSettings {
                geometry,
                variant: TrackerVariant::default(),
                offset_scale,
            },
            running: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    fn send(&self, command: TrackerCommand) {
        if let Some(running) = &self.running {
            let _ = running.commands.send(command);
        }
    }

    fn thread_loop(
        mut source: P,
        mut settings: TrackerSettings,
        commands: mpsc::Receiver<TrackerCommand>,
        mut snapshots: triple_buffer::Input<TrackingSnapshot>,
    ) -> P {
        let mut origin: Option<Vec3> = None;
        let mut rate = RateMeter::default();
        let mut sequence = 0u64;

        loop {
            loop {
                match commands.try_recv() {
                    Ok(TrackerCommand::Calibrate) => origin = None,
                    Ok(TrackerCommand::Configure { aspect_ratio, near_plane }) => {
                        settings.geometry.aspect_ratio = aspect_ratio;
                        settings.geometry.near_plane = near_plane;
                    }
                    Ok(TrackerCommand::Variant(variant)) => {
                        settings.variant = variant;
                        source.set_variant(variant);
                    }
                    Ok(TrackerCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                        source.close();
                        return source;
                    }
                    Err(mpsc::TryRecvError::Empty) => break,
                }
            }

            let Some(head) = source.next_sample() else {
                std::thread::sleep(IDLE_BACKOFF);
                continue;
            };
            if !head.is_finite() {
                continue;
            }

            // First sample after start or calibrate becomes the origin
            let anchor = *origin.get_or_insert(head);
            let eye = head - anchor;
            sequence += 1;
            rate.tick();

            snapshots.write(TrackingSnapshot {
                eye_offset: eye * settings.offset_scale,
                bounds: settings.geometry.bounds_for_eye(eye),
                rate: rate.rate(),
                sequence,
            });
        }
    }
}

impl<P: HeadPoseSource + 'static> TrackingSubsystem for ThreadedTracker<P> {
    fn configure_frustum(&mut self, aspect_ratio: f32, near_plane: f32) {
        self.settings.geometry.aspect_ratio = aspect_ratio;
        self.settings.geometry.near_plane = near_plane;
        self.send(TrackerCommand::Configure { aspect_ratio, near_plane });
    }

    fn select_variant(&mut self, variant: TrackerVariant) {
        self.settings.variant = variant;
        if let Some(source) = &mut self.source {
            source.set_variant(variant);
        }
        self.send(TrackerCommand::Variant(variant));
    }

    fn start(&mut self, device_index: u32) -> Result<()> {
        if self.running.is_some() {
            return Ok(());
        }
        let mut source = self.source.take().ok_or_else(|| {
            Error::InitializationFailed("head pose source already released".to_string())
        })?;

        if let Err(e) = source.open(device_index) {
            self.source = Some(source);
            return Err(e);
        }

        let (command_tx, command_rx) = mpsc::channel();
        let neutral = TrackingSnapshot::neutral(self.settings.geometry.neutral_bounds());
        let (snapshot_input, snapshot_output) = triple_buffer::triple_buffer(&neutral);
        let settings = self.settings;

        let thread = std::thread::Builder::new()
            .name("head-tracker".into())
            .spawn(move || Self::thread_loop(source, settings, command_rx, snapshot_input))
            .map_err(|e| {
                Error::InitializationFailed(format!("failed to spawn tracker thread: {}", e))
            })?;

        self.running = Some(Running {
            commands: command_tx,
            snapshots: snapshot_output,
            thread,
        });
        pw_info!(SOURCE, "Tracker thread started ({:?})", self.settings.variant);
        Ok(())
    }

    fn latest(&mut self) -> Option<TrackingSnapshot> {
        let running = self.running.as_mut()?;
        let _ = running.snapshots.update();
        let snapshot = *running.snapshots.output_buffer_mut();
        (snapshot.sequence > 0).then_some(snapshot)
    }

    fn calibrate(&mut self) {
        self.send(TrackerCommand::Calibrate);
    }

    fn stop(&mut self) {
        let Some(running) = self.running.take() else {
            return;
        };
        let _ = running.commands.send(TrackerCommand::Shutdown);
        match running.thread.join() {
            Ok(source) => {
                self.source = Some(source);
                pw_debug!(SOURCE, "Tracker thread joined");
            }
            Err(_) => pw_error!(SOURCE, "Tracker thread panicked; capture device state unknown"),
        }
    }

    fn teardown(&mut self) {
        self.stop();
        self.source = None;
    }
}

impl<P: HeadPoseSource + 'static> Drop for ThreadedTracker<P> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[path = "threaded_tests.rs"]
mod tests;
