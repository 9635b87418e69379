/// RenderCamera - the per-frame camera handed to the render substrate.
///
/// Built from the transient render pose and the off-axis projection. It is
/// a by-value snapshot: the substrate uses its projection in place of the
/// default one for the draw calls it receives it with, and nothing carries
/// over to the next frame.

use glam::{Mat4, Vec3};
use crate::renderer::Viewport;
use super::frustum::Frustum;
use super::pose::CameraPose;

/// Camera used for exactly one frame's scene draw.
#[derive(Debug, Clone)]
pub struct RenderCamera {
    eye_position: Vec3,
    view_matrix: Mat4,
    projection_matrix: Mat4,
    frustum: Frustum,
    viewport: Viewport,
}

impl RenderCamera {
    /// Create a render camera from explicit matrices.
    ///
    /// The culling frustum is extracted from `projection * view`.
    pub fn new(eye_position: Vec3, view: Mat4, projection: Mat4, viewport: Viewport) -> Self {
        Self {
            eye_position,
            view_matrix: view,
            projection_matrix: projection,
            frustum: Frustum::from_view_projection(&(projection * view)),
            viewport,
        }
    }

    /// Look from `render_pose` with `projection` overriding the pose's default.
    pub fn from_pose(render_pose: &CameraPose, projection: Mat4, viewport: Viewport) -> Self {
        Self::new(render_pose.position, render_pose.view_matrix(), projection, viewport)
    }

    // ===== GETTERS =====

    /// Eye point the view matrix was built from (base position + eye offset).
    pub fn eye_position(&self) -> Vec3 {
        self.eye_position
    }

    /// View matrix (inverse of the camera's world transform).
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Projection matrix (off-axis for tracked frames).
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    /// Frustum planes for culling.
    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    /// Viewport dimensions and depth range.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Project a world-space point to viewport pixels (x right, y down) and
    /// depth in `[min_depth, max_depth]`.
    ///
    /// Returns `None` for points behind the eye.
    pub fn world_to_viewport(&self, point: Vec3) -> Option<Vec3> {
        let clip = self.view_projection_matrix() * point.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(self.viewport.ndc_to_pixels(ndc))
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
