/// First-person navigation - the only writer of the logical camera pose.

use glam::{Vec2, Vec3};
use super::pose::CameraPose;

/// Pitch is kept this far (radians) away from straight up/down so `up`
/// never becomes parallel to the view direction.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Raw navigation input for one frame.
///
/// Movement axes are in `[-1, 1]` (keys held), `look_delta` in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NavigationInput {
    /// +1 forward (W), -1 backward (S)
    pub forward: f32,
    /// +1 right (D), -1 left (A)
    pub right: f32,
    /// +1 up, -1 down
    pub up: f32,
    /// Mouse movement since the previous frame
    pub look_delta: Vec2,
}

impl NavigationInput {
    pub fn is_idle(&self) -> bool {
        self.forward == 0.0 && self.right == 0.0 && self.up == 0.0 && self.look_delta == Vec2::ZERO
    }
}

/// Updates a camera pose from input.
pub trait Navigator {
    fn update(&mut self, pose: &mut CameraPose, input: &NavigationInput, dt: f32);
}

/// WASD + mouse-look camera with the movement plane fixed to world XZ.
#[derive(Debug, Clone, Copy)]
pub struct FirstPersonNavigator {
    /// World units per second
    pub move_speed: f32,
    /// Radians per pixel of mouse movement
    pub look_sensitivity: f32,
}

impl FirstPersonNavigator {
    pub fn new(move_speed: f32, look_sensitivity: f32) -> Self {
        Self { move_speed, look_sensitivity }
    }
}

impl Default for FirstPersonNavigator {
    fn default() -> Self {
        Self::new(5.0, 0.003)
    }
}

impl Navigator for FirstPersonNavigator {
    fn update(&mut self, pose: &mut CameraPose, input: &NavigationInput, dt: f32) {
        if input.is_idle() {
            return;
        }

        let to_target = pose.target - pose.position;
        let distance = to_target.length().max(1e-3);
        let direction = to_target / distance;

        let mut yaw = direction.z.atan2(direction.x);
        let mut pitch = direction.y.clamp(-1.0, 1.0).asin();
        yaw += input.look_delta.x * self.look_sensitivity;
        pitch = (pitch - input.look_delta.y * self.look_sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);

        let direction = Vec3::new(pitch.cos() * yaw.cos(), pitch.sin(), pitch.cos() * yaw.sin());

        let planar_forward = Vec3::new(direction.x, 0.0, direction.z).normalize_or_zero();
        let planar_right = planar_forward.cross(Vec3::Y);
        let step = self.move_speed * dt;
        let movement = planar_forward * input.forward * step
            + planar_right * input.right * step
            + Vec3::Y * input.up * step;

        pose.position += movement;
        pose.target = pose.position + direction * distance;
        pose.up = Vec3::Y;
    }
}

#[cfg(test)]
#[path = "navigation_tests.rs"]
mod tests;
