/// One published tracking result.

use glam::Vec3;
use crate::camera::FrustumBounds;

/// Eye offset, frustum bounds, and tracker rate computed from the same head
/// sample.
///
/// Offset and bounds are only meaningful together: the feed hands out both
/// from one snapshot so a frame never mixes values from two calibrations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackingSnapshot {
    /// Head displacement from the calibrated origin, world units
    pub eye_offset: Vec3,
    pub bounds: FrustumBounds,
    /// Tracker updates per second
    pub rate: f32,
    /// Publication counter; 0 means nothing has been published
    pub sequence: u64,
}

impl TrackingSnapshot {
    /// Centered eye, given bounds, nothing published.
    pub fn neutral(bounds: FrustumBounds) -> Self {
        Self {
            eye_offset: Vec3::ZERO,
            bounds,
            rate: 0.0,
            sequence: 0,
        }
    }

    /// Finite offset, valid bounds, non-negative rate.
    pub fn is_usable(&self) -> bool {
        self.eye_offset.is_finite() && self.bounds.is_valid() && self.rate >= 0.0
    }
}
