/// Camera pose - the logical, navigable camera.
///
/// The pose is owned by the frame loop and only ever mutated by navigation.
/// Head tracking never writes into it: the eye offset is applied to a
/// by-value copy returned from `displaced()`.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use super::projection::ClipPlanes;

/// Default projection used when no tracked projection is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionKind {
    #[default]
    Perspective,
    /// `fovy` is then the full view height in world units.
    Orthographic,
}

/// Logical camera pose: where the viewer stands and looks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fovy: f32,
    pub projection: ProjectionKind,
}

impl CameraPose {
    pub fn new(position: Vec3, target: Vec3, up: Vec3, fovy: f32) -> Self {
        Self {
            position,
            target,
            up,
            fovy,
            projection: ProjectionKind::Perspective,
        }
    }

    /// Transient render pose: same target and up, eye moved by `eye_offset`.
    ///
    /// Returns a copy; `self` is never modified, so the offset cannot
    /// accumulate into the navigation state across frames.
    pub fn displaced(&self, eye_offset: Vec3) -> CameraPose {
        CameraPose {
            position: self.position + eye_offset,
            ..*self
        }
    }

    /// Unit view direction.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// `up` is usable: non-zero and not parallel to the view direction.
    pub fn has_valid_up(&self) -> bool {
        let forward = self.forward();
        forward != Vec3::ZERO && forward.cross(self.up).length_squared() > 1e-8
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Symmetric projection for this pose's kind and FOV.
    pub fn default_projection(&self, aspect_ratio: f32, clip: ClipPlanes) -> Mat4 {
        match self.projection {
            ProjectionKind::Perspective => {
                Mat4::perspective_rh_gl(self.fovy.to_radians(), aspect_ratio, clip.near, clip.far)
            }
            ProjectionKind::Orthographic => {
                let top = 0.5 * self.fovy;
                let right = top * aspect_ratio;
                Mat4::orthographic_rh_gl(-right, right, -top, top, clip.near, clip.far)
            }
        }
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::new(Vec3::new(4.0, 2.0, 4.0), Vec3::new(0.0, 1.8, 0.0), Vec3::Y, 60.0)
    }
}

#[cfg(test)]
#[path = "pose_tests.rs"]
mod tests;
