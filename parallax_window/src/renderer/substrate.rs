/// Render substrate trait - window lifecycle, input, drawing

use crate::camera::{NavigationInput, RenderCamera};
use crate::error::Result;
use crate::scene::{Color, Scene};
use super::Viewport;

// ============================================================================
// Frame input
// ============================================================================

/// Everything the frame loop needs from one input poll.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// First-person movement and mouse look
    pub navigation: NavigationInput,
    /// Calibrate key currently held (level, not edge)
    pub calibrate_held: bool,
}

// ============================================================================
// Overlay
// ============================================================================

/// Diagnostic text drawn on top of the 3D view.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayText {
    pub text: String,
    /// Top-left corner in pixels
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

/// Translucent panel with text lines, drawn in screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    /// Panel rectangle (x, y, width, height) in pixels
    pub panel: (i32, i32, i32, i32),
    pub panel_fill: Color,
    pub panel_border: Color,
    pub lines: Vec<OverlayText>,
}

// ============================================================================
// Render substrate trait
// ============================================================================

/// Window + rasterizer the frame loop draws through.
///
/// Calls arrive in this order every frame: `poll_input`, `begin_frame`,
/// `draw_scene`, `draw_overlay`, `end_frame`.
pub trait RenderSubstrate {
    /// The window was asked to close (close button, Escape).
    fn close_requested(&self) -> bool;

    /// Sample keyboard and mouse state for this frame.
    fn poll_input(&mut self) -> FrameInput;

    /// Current drawable area.
    fn viewport(&self) -> Viewport;

    /// Start a frame and clear it.
    fn begin_frame(&mut self, clear: Color);

    /// Draw the scene through `camera`.
    ///
    /// `camera.projection_matrix()` replaces the substrate's default
    /// symmetric projection for this call only.
    fn draw_scene(&mut self, camera: &RenderCamera, scene: &Scene);

    /// Draw screen-space diagnostics.
    fn draw_overlay(&mut self, overlay: &Overlay);

    /// Present the frame.
    ///
    /// # Errors
    ///
    /// Returns `Error::BackendError` if the window can no longer be updated.
    fn end_frame(&mut self) -> Result<()>;
}
