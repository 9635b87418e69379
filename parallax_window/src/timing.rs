//! Rate measurement shared by the render loop and the tracker thread.

use std::time::Instant;

/// Exponentially smoothed event rate (events per second).
#[derive(Debug, Clone, Copy)]
pub struct RateMeter {
    last: Option<Instant>,
    smoothed: f32,
    /// Weight of the newest sample, 0.0-1.0
    smoothing: f32,
}

impl RateMeter {
    pub fn new(smoothing: f32) -> Self {
        Self {
            last: None,
            smoothed: 0.0,
            smoothing: smoothing.clamp(0.0, 1.0),
        }
    }

    /// Record an event at `now`. Returns the seconds since the previous event
    /// (0.0 for the first one).
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let Some(last) = self.last.replace(now) else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(last).as_secs_f32();
        if elapsed > 0.0 {
            let instant_rate = 1.0 / elapsed;
            self.smoothed = if self.smoothed == 0.0 {
                instant_rate
            } else {
                self.smoothed * (1.0 - self.smoothing) + instant_rate * self.smoothing
            };
        }
        elapsed
    }

    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Smoothed rate; 0.0 until two events have been seen.
    pub fn rate(&self) -> f32 {
        self.smoothed
    }
}

impl Default for RateMeter {
    fn default() -> Self {
        Self::new(0.1)
    }
}
