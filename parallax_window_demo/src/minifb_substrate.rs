/// MinifbSubstrate - software wireframe renderer on a minifb window
///
/// Boxes and the floor grid are projected with the frame's render camera,
/// clipped in homogeneous clip space, and rasterized as lines into a
/// `Canvas` that is pushed to the window on `end_frame`.

use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};
use parallax_window::camera::{NavigationInput, RenderCamera};
use parallax_window::glam::{Mat4, Vec2, Vec3, Vec4};
use parallax_window::renderer::{FrameInput, Overlay, RenderSubstrate, Viewport};
use parallax_window::scene::{Color, Scene};
use parallax_window::{Error, Result, WindowConfig};
use crate::canvas::Canvas;

const TEXT_SCALE: i32 = 2;
const GRID_STEP: f32 = 2.0;

pub struct MinifbSubstrate {
    window: Window,
    canvas: Canvas,
    last_mouse: Option<(f32, f32)>,
}

impl MinifbSubstrate {
    pub fn new(config: &WindowConfig) -> Result<Self> {
        let (width, height) = (config.width as usize, config.height as usize);
        let mut window = Window::new(&config.title, width, height, WindowOptions::default())
            .map_err(|e| Error::InitializationFailed(format!("window creation failed: {}", e)))?;
        window.set_target_fps(60);

        Ok(Self {
            window,
            canvas: Canvas::new(width, height),
            last_mouse: None,
        })
    }

    fn axis(&self, positive: Key, negative: Key) -> f32 {
        let mut value = 0.0;
        if self.window.is_key_down(positive) {
            value += 1.0;
        }
        if self.window.is_key_down(negative) {
            value -= 1.0;
        }
        value
    }

    /// Mouse movement while the left button is held (minifb cannot grab the
    /// cursor).
    fn look_delta(&mut self) -> Vec2 {
        let position = self.window.get_mouse_pos(MouseMode::Pass);
        let dragging = self.window.get_mouse_down(MouseButton::Left);
        let delta = match (dragging, self.last_mouse, position) {
            (true, Some(last), Some(now)) => Vec2::new(now.0 - last.0, now.1 - last.1),
            _ => Vec2::ZERO,
        };
        self.last_mouse = if dragging { position } else { None };
        delta
    }

    fn segment(&mut self, view_projection: &Mat4, viewport: &Viewport, a: Vec3, b: Vec3, color: Color) {
        let clip_a = *view_projection * a.extend(1.0);
        let clip_b = *view_projection * b.extend(1.0);
        let Some((a, b)) = clip_segment(clip_a, clip_b) else {
            return;
        };
        let to_pixels = |p: Vec4| {
            let pixel = viewport.ndc_to_pixels(p.truncate() / p.w);
            (pixel.x.round() as i32, pixel.y.round() as i32)
        };
        self.canvas.line(to_pixels(a), to_pixels(b), color);
    }
}

/// Clip a segment against the GL view volume (`-w <= x, y, z <= w`).
fn clip_segment(a: Vec4, b: Vec4) -> Option<(Vec4, Vec4)> {
    let distances = |p: Vec4| {
        [p.w + p.x, p.w - p.x, p.w + p.y, p.w - p.y, p.w + p.z, p.w - p.z]
    };
    let (da, db) = (distances(a), distances(b));
    let (mut t0, mut t1) = (0.0f32, 1.0f32);

    for (&d0, &d1) in da.iter().zip(db.iter()) {
        if d0 < 0.0 && d1 < 0.0 {
            return None;
        }
        if d0 < 0.0 {
            t0 = t0.max(d0 / (d0 - d1));
        } else if d1 < 0.0 {
            t1 = t1.min(d0 / (d0 - d1));
        }
    }
    if t0 > t1 {
        return None;
    }
    Some((a + (b - a) * t0, a + (b - a) * t1))
}

/// The 12 edges of a box as corner index pairs (see `AABB::corners`).
fn box_edges() -> impl Iterator<Item = (usize, usize)> {
    [1usize, 2, 4]
        .into_iter()
        .flat_map(|bit| (0..8).filter(move |i| i & bit == 0).map(move |i| (i, i | bit)))
}

impl RenderSubstrate for MinifbSubstrate {
    fn close_requested(&self) -> bool {
        !self.window.is_open() || self.window.is_key_down(Key::Escape)
    }

    fn poll_input(&mut self) -> FrameInput {
        FrameInput {
            navigation: NavigationInput {
                forward: self.axis(Key::W, Key::S),
                right: self.axis(Key::D, Key::A),
                up: self.axis(Key::E, Key::Q),
                look_delta: self.look_delta(),
            },
            calibrate_held: self.window.is_key_down(Key::Space),
        }
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn begin_frame(&mut self, clear: Color) {
        self.canvas.clear(clear);
    }

    fn draw_scene(&mut self, camera: &RenderCamera, scene: &Scene) {
        let view_projection = camera.view_projection_matrix();
        let viewport = *camera.viewport();

        let ground = &scene.ground;
        let half = ground.size * 0.5;
        let steps_x = (ground.size.x / GRID_STEP).round() as i32;
        let steps_z = (ground.size.y / GRID_STEP).round() as i32;
        for i in 0..=steps_x {
            let x = ground.center.x - half.x + i as f32 * GRID_STEP;
            let a = Vec3::new(x, ground.center.y, ground.center.z - half.y);
            let b = Vec3::new(x, ground.center.y, ground.center.z + half.y);
            self.segment(&view_projection, &viewport, a, b, ground.color);
        }
        for i in 0..=steps_z {
            let z = ground.center.z - half.y + i as f32 * GRID_STEP;
            let a = Vec3::new(ground.center.x - half.x, ground.center.y, z);
            let b = Vec3::new(ground.center.x + half.x, ground.center.y, z);
            self.segment(&view_projection, &viewport, a, b, ground.color);
        }

        for scene_box in scene.visible_boxes(camera.frustum()) {
            let corners = scene_box.aabb().corners();
            let color = scene_box.wire_color.unwrap_or(scene_box.color);
            for (i, j) in box_edges() {
                self.segment(&view_projection, &viewport, corners[i], corners[j], color);
            }
        }
    }

    fn draw_overlay(&mut self, overlay: &Overlay) {
        let (x, y, width, height) = overlay.panel;
        self.canvas.fill_rect(x, y, width, height, overlay.panel_fill);
        self.canvas.stroke_rect(x, y, width, height, overlay.panel_border);
        for line in &overlay.lines {
            self.canvas.text(line.x, line.y, &line.text, line.color, TEXT_SCALE);
        }
    }

    fn end_frame(&mut self) -> Result<()> {
        self.window
            .update_with_buffer(self.canvas.pixels(), self.canvas.width(), self.canvas.height())
            .map_err(|e| Error::BackendError(format!("window update failed: {}", e)))
    }
}
