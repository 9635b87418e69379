/// Off-axis projection - asymmetric frustum bounds and the matrix built from them.
///
/// All matrices follow the OpenGL clip convention (right-handed view space
/// looking down -Z, NDC depth in [-1, 1]), the same convention as
/// `Mat4::perspective_rh_gl`.

use glam::{Mat4, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Smallest eye-to-screen distance used when deriving bounds.
///
/// A head that reaches (or passes) the screen plane would otherwise produce
/// infinite slopes.
pub const MIN_VIEWING_DISTANCE: f32 = 1e-3;

/// Near and far clipping distances. Fixed for the lifetime of the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipPlanes {
    pub near: f32,
    pub far: f32,
}

impl ClipPlanes {
    pub fn new(near: f32, far: f32) -> Self {
        Self { near, far }
    }

    /// `0 < near < far`, both finite.
    pub fn is_valid(&self) -> bool {
        self.near.is_finite() && self.far.is_finite() && self.near > 0.0 && self.near < self.far
    }
}

impl Default for ClipPlanes {
    fn default() -> Self {
        Self { near: 0.1, far: 100.0 }
    }
}

/// Asymmetric frustum bounds measured on the near plane.
///
/// `left`/`right` are x extents and `bottom`/`top` y extents of the near
/// rectangle in view space. A symmetric frustum has `left == -right` and
/// `bottom == -top`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrustumBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl FrustumBounds {
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Bounds equivalent to a symmetric perspective with vertical FOV
    /// `fovy_radians`.
    pub fn symmetric(fovy_radians: f32, aspect_ratio: f32, near: f32) -> Self {
        let top = near * (0.5 * fovy_radians).tan();
        let right = top * aspect_ratio;
        Self { left: -right, right, top, bottom: -top }
    }

    /// `left < right`, `bottom < top`, all finite.
    pub fn is_valid(&self) -> bool {
        [self.left, self.right, self.top, self.bottom].iter().all(|v| v.is_finite())
            && self.left < self.right
            && self.bottom < self.top
    }

    /// Width over height of the near rectangle.
    pub fn aspect_ratio(&self) -> f32 {
        (self.right - self.left) / (self.top - self.bottom)
    }

    /// The asymmetric perspective matrix for these bounds (the `glFrustum` matrix).
    pub fn projection(&self, clip: ClipPlanes) -> Mat4 {
        off_axis_rh_gl(self.left, self.right, self.bottom, self.top, clip.near, clip.far)
    }
}

/// Build an off-axis perspective projection.
///
/// The near rectangle `[left, right] x [bottom, top]` at `z = -near` maps to
/// the NDC face `z = -1`; its projection through the origin onto `z = -far`
/// maps to `z = +1`. Unlike `Mat4::perspective_rh_gl` the frustum does not
/// have to be centered on the optical axis: the third column carries the
/// skew `(r + l) / (r - l)` and `(t + b) / (t - b)`.
pub fn off_axis_rh_gl(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let inv_width = 1.0 / (right - left);
    let inv_height = 1.0 / (top - bottom);
    let inv_depth = 1.0 / (far - near);

    Mat4::from_cols(
        Vec4::new(2.0 * near * inv_width, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 * near * inv_height, 0.0, 0.0),
        Vec4::new(
            (right + left) * inv_width,
            (top + bottom) * inv_height,
            -(far + near) * inv_depth,
            -1.0,
        ),
        Vec4::new(0.0, 0.0, -2.0 * far * near * inv_depth, 0.0),
    )
}

/// Physical screen geometry used by trackers to turn an eye position into
/// frustum bounds.
///
/// Lengths are in screen heights: the screen is `aspect_ratio` wide and `1`
/// tall, centered on the origin, and the viewer sits `viewing_distance` in
/// front of it when in the neutral pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenGeometry {
    pub aspect_ratio: f32,
    pub near_plane: f32,
    pub viewing_distance: f32,
}

impl ScreenGeometry {
    pub fn new(aspect_ratio: f32, near_plane: f32, viewing_distance: f32) -> Self {
        Self { aspect_ratio, near_plane, viewing_distance }
    }

    /// Viewing distance chosen so that a centered eye sees exactly a symmetric
    /// frustum of vertical FOV `fovy_radians`.
    pub fn from_fov(aspect_ratio: f32, near_plane: f32, fovy_radians: f32) -> Self {
        let viewing_distance = 0.5 / (0.5 * fovy_radians).tan();
        Self { aspect_ratio, near_plane, viewing_distance }
    }

    /// Bounds for an eye displaced by `eye` from the neutral pose.
    ///
    /// Moving the head right shifts both side planes left on the near plane,
    /// which is what keeps the screen edges fixed in the rendered image.
    pub fn bounds_for_eye(&self, eye: Vec3) -> FrustumBounds {
        let distance = (self.viewing_distance + eye.z).max(MIN_VIEWING_DISTANCE);
        let scale = self.near_plane / distance;
        let half_width = 0.5 * self.aspect_ratio;

        FrustumBounds {
            left: (-half_width - eye.x) * scale,
            right: (half_width - eye.x) * scale,
            top: (0.5 - eye.y) * scale,
            bottom: (-0.5 - eye.y) * scale,
        }
    }

    /// Bounds for the neutral (centered) eye.
    pub fn neutral_bounds(&self) -> FrustumBounds {
        self.bounds_for_eye(Vec3::ZERO)
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
