//! Camera module - logical pose, navigation, off-axis projection, and the
//! per-frame render camera.
//!
//! The logical `CameraPose` is what the user navigates. Head tracking only
//! ever produces transient values derived from it (`CameraPose::displaced`,
//! `RenderCamera`), so tracked offsets cannot leak into navigation.

mod camera;
mod frustum;
mod navigation;
mod pose;
mod projection;

pub use camera::RenderCamera;
pub use frustum::Frustum;
pub use navigation::{FirstPersonNavigator, NavigationInput, Navigator};
pub use pose::{CameraPose, ProjectionKind};
pub use projection::{
    off_axis_rh_gl, ClipPlanes, FrustumBounds, ScreenGeometry, MIN_VIEWING_DISTANCE,
};
