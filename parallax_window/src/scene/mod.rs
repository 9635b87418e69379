//! Scene module - static room geometry drawn behind the virtual window.
//!
//! The scene is plain data: the render substrate decides how to draw boxes
//! and planes. Culling uses `Frustum::intersects_aabb` on each box.

mod color;
mod scene;

pub use color::Color;
pub use scene::{AABB, GroundPlane, Scene, SceneBox, ROOM_HALF_EXTENT};
