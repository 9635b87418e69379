/// Mock render substrate for unit tests (no window required)
///
/// Replays scripted input, records every camera it is asked to draw with,
/// and requests close after a fixed number of presented frames.

use glam::{Mat4, Vec3};
use crate::camera::RenderCamera;
use crate::error::{Error, Result};
use crate::scene::{Color, Scene};
use super::{FrameInput, Overlay, RenderSubstrate, Viewport};

/// One `draw_scene` call as seen by the substrate.
#[derive(Debug, Clone)]
pub struct DrawRecord {
    pub eye_position: Vec3,
    pub projection: Mat4,
    pub view: Mat4,
    pub box_count: usize,
}

pub struct MockSubstrate {
    pub viewport: Viewport,
    pub frame_limit: usize,
    pub inputs: Vec<FrameInput>,
    pub frames_begun: usize,
    pub frames_presented: usize,
    pub draws: Vec<DrawRecord>,
    pub overlays: Vec<Overlay>,
    /// Fail `end_frame` on this (1-based) frame
    pub fail_on_frame: Option<usize>,
}

impl MockSubstrate {
    pub fn new(frame_limit: usize) -> Self {
        Self {
            viewport: Viewport::new(1280.0, 720.0),
            frame_limit,
            inputs: Vec::new(),
            frames_begun: 0,
            frames_presented: 0,
            draws: Vec::new(),
            overlays: Vec::new(),
            fail_on_frame: None,
        }
    }

    pub fn with_inputs(mut self, inputs: Vec<FrameInput>) -> Self {
        self.inputs = inputs;
        self
    }
}

impl RenderSubstrate for MockSubstrate {
    fn close_requested(&self) -> bool {
        self.frames_presented >= self.frame_limit
    }

    fn poll_input(&mut self) -> FrameInput {
        self.inputs.get(self.frames_begun).copied().unwrap_or_default()
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn begin_frame(&mut self, _clear: Color) {
        self.frames_begun += 1;
    }

    fn draw_scene(&mut self, camera: &RenderCamera, scene: &Scene) {
        self.draws.push(DrawRecord {
            eye_position: camera.eye_position(),
            projection: *camera.projection_matrix(),
            view: *camera.view_matrix(),
            box_count: scene.visible_boxes(camera.frustum()).count(),
        });
    }

    fn draw_overlay(&mut self, overlay: &Overlay) {
        self.overlays.push(overlay.clone());
    }

    fn end_frame(&mut self) -> Result<()> {
        if self.fail_on_frame == Some(self.frames_begun) {
            return Err(Error::BackendError("mock window lost".to_string()));
        }
        self.frames_presented += 1;
        Ok(())
    }
}
