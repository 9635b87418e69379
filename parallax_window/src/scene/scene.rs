/// Room scene: a ground plane, three walls, and random columns.

use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::camera::Frustum;
use super::color::Color;

/// Half size of the square room floor.
pub const ROOM_HALF_EXTENT: f32 = 16.0;

// ===== AABB =====

/// Axis-Aligned Bounding Box in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self { min: center - half, max: center + half }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// The 8 corners, bit i of the index selecting max (1) or min (0) on axis i.
    pub fn corners(&self) -> [Vec3; 8] {
        std::array::from_fn(|i| {
            Vec3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            )
        })
    }

    /// Test if this AABB intersects (overlaps) another AABB.
    pub fn intersects(&self, other: &AABB) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x
        && self.min.y <= other.max.y && self.max.y >= other.min.y
        && self.min.z <= other.max.z && self.max.z >= other.min.z
    }
}

// ===== SCENE CONTENT =====

/// Axis-aligned solid box with an optional wireframe outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneBox {
    pub center: Vec3,
    pub size: Vec3,
    pub color: Color,
    pub wire_color: Option<Color>,
}

impl SceneBox {
    pub fn aabb(&self) -> AABB {
        AABB::from_center_size(self.center, self.size)
    }
}

/// Horizontal plane at `center.y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundPlane {
    pub center: Vec3,
    pub size: Vec2,
    pub color: Color,
}

impl GroundPlane {
    /// Corners in winding order.
    pub fn corners(&self) -> [Vec3; 4] {
        let hx = self.size.x * 0.5;
        let hz = self.size.y * 0.5;
        let c = self.center;
        [
            Vec3::new(c.x - hx, c.y, c.z - hz),
            Vec3::new(c.x + hx, c.y, c.z - hz),
            Vec3::new(c.x + hx, c.y, c.z + hz),
            Vec3::new(c.x - hx, c.y, c.z + hz),
        ]
    }
}

/// Static scene drawn each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub ground: GroundPlane,
    pub boxes: Vec<SceneBox>,
}

impl Scene {
    /// Ground, blue/lime/gold walls, and `columns` random columns.
    ///
    /// The same `seed` always produces the same room.
    pub fn room(columns: usize, seed: u64) -> Self {
        let extent = ROOM_HALF_EXTENT;
        let mut boxes = vec![
            SceneBox {
                center: Vec3::new(-extent, 2.5, 0.0),
                size: Vec3::new(1.0, 5.0, 2.0 * extent),
                color: Color::BLUE,
                wire_color: None,
            },
            SceneBox {
                center: Vec3::new(extent, 2.5, 0.0),
                size: Vec3::new(1.0, 5.0, 2.0 * extent),
                color: Color::LIME,
                wire_color: None,
            },
            SceneBox {
                center: Vec3::new(0.0, 2.5, extent),
                size: Vec3::new(2.0 * extent, 5.0, 1.0),
                color: Color::GOLD,
                wire_color: None,
            },
        ];

        let mut rng = StdRng::seed_from_u64(seed);
        boxes.extend((0..columns).map(|_| {
            let height = rng.random_range(1..=12) as f32;
            let x = rng.random_range(-15..=15) as f32;
            let z = rng.random_range(-15..=15) as f32;
            SceneBox {
                center: Vec3::new(x, height * 0.5, z),
                size: Vec3::new(2.0, height, 2.0),
                color: Color::rgb(rng.random_range(20..=255), rng.random_range(10..=55), 30),
                wire_color: Some(Color::MAROON),
            }
        }));

        Self {
            ground: GroundPlane {
                center: Vec3::ZERO,
                size: Vec2::splat(2.0 * extent),
                color: Color::LIGHT_GRAY,
            },
            boxes,
        }
    }

    /// Boxes that may be visible through `frustum`.
    pub fn visible_boxes<'a>(&'a self, frustum: &'a Frustum) -> impl Iterator<Item = &'a SceneBox> + 'a {
        self.boxes.iter().filter(move |b| frustum.intersects_aabb(&b.aabb()))
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
