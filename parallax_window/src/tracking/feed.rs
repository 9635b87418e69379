/// TrackingFeed - owned handle on a tracking subsystem
///
/// The feed is the only thing the frame loop talks to. It latches one
/// snapshot per frame, keeps serving the last good values when the tracker
/// stalls or was never started, and releases the subsystem (stop, then
/// teardown, exactly once) when it goes out of scope.

use std::time::{Duration, Instant};
use glam::Vec3;
use crate::camera::{FrustumBounds, ScreenGeometry};
use crate::config::TrackingConfig;
use crate::error::{Error, Result};
use crate::{pw_debug, pw_info, pw_warn};
use super::{TrackingSnapshot, TrackingSubsystem};

const SOURCE: &str = "parallax::TrackingFeed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FeedState {
    /// Configured, not started (or start failed)
    Idle,
    Tracking,
    /// Stopped; no further subsystem calls except teardown
    Stopped,
}

pub struct TrackingFeed<S: TrackingSubsystem> {
    subsystem: S,
    state: FeedState,
    current: TrackingSnapshot,
    stale_after: Duration,
    last_fresh: Option<Instant>,
    stale: bool,
    torn_down: bool,
}

impl<S: TrackingSubsystem> TrackingFeed<S> {
    /// Configure `subsystem` for `geometry` and the configured variant.
    ///
    /// Until something is published the feed reports a centered eye and the
    /// neutral bounds of `geometry`.
    pub fn new(mut subsystem: S, config: &TrackingConfig, geometry: ScreenGeometry) -> Self {
        subsystem.configure_frustum(geometry.aspect_ratio, geometry.near_plane);
        subsystem.select_variant(config.variant);
        Self {
            subsystem,
            state: FeedState::Idle,
            current: TrackingSnapshot::neutral(geometry.neutral_bounds()),
            stale_after: config.stale_after(),
            last_fresh: None,
            stale: false,
            torn_down: false,
        }
    }

    /// Start tracking on `device_index`.
    ///
    /// On failure the feed stays usable and keeps reporting neutral values;
    /// the error is returned so the caller can report it.
    pub fn start(&mut self, device_index: u32) -> Result<()> {
        match self.state {
            FeedState::Tracking => Ok(()),
            FeedState::Stopped => Err(Error::InitializationFailed(
                "tracking feed already stopped".to_string(),
            )),
            FeedState::Idle => match self.subsystem.start(device_index) {
                Ok(()) => {
                    self.state = FeedState::Tracking;
                    self.last_fresh = Some(Instant::now());
                    pw_info!(SOURCE, "Tracking started on device {}", device_index);
                    Ok(())
                }
                Err(e) => {
                    pw_warn!(SOURCE, "Tracking unavailable, continuing without parallax: {}", e);
                    Err(e)
                }
            },
        }
    }

    /// Latch the newest snapshot. Call once per frame.
    pub fn poll(&mut self) {
        self.poll_at(Instant::now());
    }

    /// `poll` with an explicit clock, for staleness checks.
    pub fn poll_at(&mut self, now: Instant) {
        if self.state != FeedState::Tracking {
            return;
        }

        if let Some(snapshot) = self.subsystem.latest() {
            if snapshot.sequence != self.current.sequence {
                if snapshot.is_usable() {
                    self.current = snapshot;
                    self.last_fresh = Some(now);
                    if self.stale {
                        self.stale = false;
                        pw_info!(SOURCE, "Tracking resumed");
                    }
                } else {
                    pw_debug!(SOURCE, "Dropped unusable snapshot #{}", snapshot.sequence);
                }
            }
        }

        let overdue = self
            .last_fresh
            .map(|t| now.saturating_duration_since(t) > self.stale_after)
            .unwrap_or(false);
        if overdue && !self.stale {
            self.stale = true;
            pw_warn!(
                SOURCE,
                "No tracking update for {:?}, holding last head position",
                self.stale_after
            );
        }
    }

    /// Head offset from the calibrated origin. Zero until tracking publishes.
    pub fn read_eye_offset(&self) -> Vec3 {
        self.current.eye_offset
    }

    pub fn read_frustum_bounds(&self) -> FrustumBounds {
        self.current.bounds
    }

    /// Tracker updates per second, for display.
    pub fn read_tracking_rate(&self) -> f32 {
        self.current.rate
    }

    /// All values latched by the last `poll`, as one consistent unit.
    pub fn snapshot(&self) -> TrackingSnapshot {
        self.current
    }

    pub fn is_tracking(&self) -> bool {
        self.state == FeedState::Tracking
    }

    /// True while tracking but no update arrived within the stale threshold.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Re-origin on the viewer's current head pose. Ignored unless tracking.
    pub fn calibrate(&mut self) {
        if self.state == FeedState::Tracking {
            self.subsystem.calibrate();
            pw_info!(SOURCE, "Calibration requested");
        } else {
            pw_debug!(SOURCE, "Calibration ignored, tracking not running");
        }
    }

    /// Stop the subsystem. Idempotent; later reads return the last values.
    pub fn stop(&mut self) {
        if self.state == FeedState::Stopped {
            return;
        }
        self.subsystem.stop();
        self.state = FeedState::Stopped;
        self.stale = false;
        pw_info!(SOURCE, "Tracking stopped");
    }

    /// Stop and tear down now instead of at end of scope.
    pub fn shutdown(mut self) {
        self.release();
    }

    pub fn subsystem(&self) -> &S {
        &self.subsystem
    }

    fn release(&mut self) {
        if self.torn_down {
            return;
        }
        self.stop();
        self.subsystem.teardown();
        self.torn_down = true;
        pw_debug!(SOURCE, "Tracking subsystem released");
    }
}

impl<S: TrackingSubsystem> Drop for TrackingFeed<S> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
#[path = "feed_tests.rs"]
mod tests;
