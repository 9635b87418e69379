/*!
# Parallax Window

Head-tracked "virtual window" rendering: the screen behaves like a window
into the 3D scene instead of a flat picture.

A tracking subsystem reports where the viewer's head is relative to a
calibrated origin. Every frame the camera controller renders from the
logical camera position displaced by that offset, through an asymmetric
(off-axis) frustum whose edges stay pinned to the physical screen. Moving
your head then produces motion parallax.

## Architecture

- **camera**: pose, off-axis projection, screen geometry, frustum culling,
  first-person navigation
- **tracking**: `TrackingSubsystem` boundary, the owned `TrackingFeed`
  handle, and `ThreadedTracker` (background head-pose sampling)
- **controller**: `OffAxisCameraController`, one parallax-corrected frame
- **renderer**: `RenderSubstrate` trait (window, input, drawing)
- **scene**: static room scene
- **config**: TOML configuration
- **app**: the frame loop (`run`)
*/

mod app;
mod config;
mod controller;
mod error;
mod timing;
pub mod camera;
pub mod log;
pub mod renderer;
pub mod scene;
pub mod tracking;

pub use app::{diagnostics_overlay, run, RunSummary, TrackingStatus};
pub use config::{AppConfig, CameraConfig, SceneConfig, TrackingConfig, WindowConfig};
pub use controller::{EdgeTrigger, FrameReport, OffAxisCameraController};
pub use error::{Error, Result};
pub use timing::RateMeter;

// Re-export math library at crate root
pub use glam;
