/// Off-axis camera controller - per-frame parallax-corrected rendering
///
/// Owns the logical camera pose. Each frame it lets the navigator move the
/// pose, latches the tracker's snapshot, and draws through a transient
/// render camera built from `pose.displaced(offset)` and the off-axis
/// projection. The logical pose is never written with the offset.

use glam::Vec3;
use crate::camera::{CameraPose, ClipPlanes, FrustumBounds, Navigator, ProjectionKind, RenderCamera};
use crate::renderer::{FrameInput, RenderSubstrate, Viewport};
use crate::scene::Scene;
use crate::tracking::{TrackingFeed, TrackingSnapshot, TrackingSubsystem};

/// Turns a held button into one event per press.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeTrigger {
    was_held: bool,
}

impl EdgeTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// True only on the frame `held` goes from released to pressed.
    pub fn update(&mut self, held: bool) -> bool {
        let fired = held && !self.was_held;
        self.was_held = held;
        fired
    }
}

/// What one controller frame did.
#[derive(Debug, Clone)]
pub struct FrameReport {
    /// Camera the scene was drawn with
    pub camera: RenderCamera,
    pub eye_offset: Vec3,
    pub bounds: FrustumBounds,
    /// A calibration was forwarded this frame
    pub calibrated: bool,
}

pub struct OffAxisCameraController {
    pose: CameraPose,
    clip: ClipPlanes,
    calibrate_trigger: EdgeTrigger,
    frames: u64,
}

impl OffAxisCameraController {
    pub fn new(pose: CameraPose, clip: ClipPlanes) -> Self {
        Self {
            pose,
            clip,
            calibrate_trigger: EdgeTrigger::new(),
            frames: 0,
        }
    }

    /// Logical (navigation) pose.
    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    pub fn clip(&self) -> ClipPlanes {
        self.clip
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Camera for one frame: eye at `pose.position + offset`, same target
    /// and up, projection from the tracked bounds.
    ///
    /// Orthographic poses keep their default projection; only the eye moves.
    pub fn render_camera(&self, snapshot: &TrackingSnapshot, viewport: Viewport) -> RenderCamera {
        let render_pose = self.pose.displaced(snapshot.eye_offset);
        let projection = match self.pose.projection {
            ProjectionKind::Perspective => snapshot.bounds.projection(self.clip),
            ProjectionKind::Orthographic => {
                render_pose.default_projection(viewport.aspect_ratio(), self.clip)
            }
        };
        RenderCamera::from_pose(&render_pose, projection, viewport)
    }

    /// Run one frame: navigate, read tracking, calibrate on a fresh press,
    /// draw the scene.
    ///
    /// Offset and bounds are latched before the calibration is forwarded, so
    /// this frame renders one consistent (pre-calibration) state.
    pub fn frame<S, N, R>(
        &mut self,
        feed: &mut TrackingFeed<S>,
        navigator: &mut N,
        substrate: &mut R,
        scene: &Scene,
        input: &FrameInput,
        dt: f32,
    ) -> FrameReport
    where
        S: TrackingSubsystem,
        N: Navigator + ?Sized,
        R: RenderSubstrate + ?Sized,
    {
        navigator.update(&mut self.pose, &input.navigation, dt);

        feed.poll();
        let snapshot = feed.snapshot();
        let camera = self.render_camera(&snapshot, substrate.viewport());

        let calibrated = self.calibrate_trigger.update(input.calibrate_held);
        if calibrated {
            feed.calibrate();
        }

        substrate.draw_scene(&camera, scene);
        self.frames += 1;

        FrameReport {
            camera,
            eye_offset: snapshot.eye_offset,
            bounds: snapshot.bounds,
            calibrated,
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
