/// Tracking subsystem trait - the contract any head tracker implements

use serde::{Deserialize, Serialize};
use crate::error::Result;
use super::TrackingSnapshot;

/// Face tracking algorithm. Trades accuracy for stability; opaque to the
/// camera model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackerVariant {
    /// Neural-network detector, the most stable
    #[default]
    Dnn,
    /// Haar cascade detector, cheaper and jumpier
    Haar,
}

/// Head-tracking subsystem.
///
/// Call order: `configure_frustum` and `select_variant` before `start`;
/// `latest` and `calibrate` only while started; `stop` exactly once; then
/// `teardown` as the very last call. `TrackingFeed` enforces this order.
pub trait TrackingSubsystem {
    /// Aspect ratio and near plane the published bounds are scaled for.
    fn configure_frustum(&mut self, aspect_ratio: f32, near_plane: f32);

    fn select_variant(&mut self, variant: TrackerVariant);

    /// Acquire the capture device and begin tracking.
    ///
    /// # Errors
    ///
    /// `Error::DeviceUnavailable` if the device cannot be opened,
    /// `Error::InitializationFailed` if tracking cannot be started otherwise.
    fn start(&mut self, device_index: u32) -> Result<()>;

    /// Latest published snapshot, never blocking. `None` until the first
    /// sample has been published.
    fn latest(&mut self) -> Option<TrackingSnapshot>;

    /// Re-origin on the viewer's current pose. Fire-and-forget: the new
    /// origin shows up in a later snapshot.
    fn calibrate(&mut self);

    /// Release the capture device.
    fn stop(&mut self);

    /// Release everything else. No call may follow.
    fn teardown(&mut self);
}
