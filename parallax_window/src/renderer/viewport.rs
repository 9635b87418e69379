/// Viewport dimensions and depth range

use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Full-window viewport with depth `[0, 1]`.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }

    /// Width over height. Zero-height viewports report 1.0.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// NDC (`[-1, 1]^3`, y up) to pixels (y down) and depth range.
    pub fn ndc_to_pixels(&self, ndc: Vec3) -> Vec3 {
        Vec3::new(
            self.x + (ndc.x + 1.0) * 0.5 * self.width,
            self.y + (1.0 - ndc.y) * 0.5 * self.height,
            self.min_depth + (ndc.z + 1.0) * 0.5 * (self.max_depth - self.min_depth),
        )
    }
}
