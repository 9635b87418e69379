//! Tracking module - boundary with the head-tracking subsystem.
//!
//! - `TrackingSubsystem`: what a tracker must provide (configure, start,
//!   latest snapshot, calibrate, stop, teardown)
//! - `TrackingFeed`: the owned handle the frame loop reads from; absorbs
//!   every tracker failure into neutral or last-known values
//! - `ThreadedTracker`: a subsystem running a `HeadPoseSource` on its own
//!   thread and publishing latest-value-wins snapshots

mod feed;
mod snapshot;
mod subsystem;
mod threaded;
#[cfg(test)]
pub(crate) mod mock_subsystem;

pub use feed::TrackingFeed;
pub use snapshot::TrackingSnapshot;
pub use subsystem::{TrackerVariant, TrackingSubsystem};
pub use threaded::{HeadPoseSource, ThreadedTracker};
