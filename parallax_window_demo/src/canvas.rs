/// Canvas - 32-bit software framebuffer with lines, rectangles and text

use parallax_window::scene::Color;
use crate::font::{glyph, GLYPH_HEIGHT, GLYPH_WIDTH};

pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

fn unpack(pixel: u32) -> Color {
    Color::rgb((pixel >> 16) as u8, (pixel >> 8) as u8, pixel as u8)
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `0x00RRGGBB` pixels, row-major, top row first.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_rgb_u32());
    }

    /// Blend `color` into one pixel; out-of-bounds writes are dropped.
    pub fn put(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let index = y as usize * self.width + x as usize;
        let blended = if color.a == 255 { color } else { color.over(unpack(self.pixels[index])) };
        self.pixels[index] = blended.to_rgb_u32();
    }

    /// Bresenham line between two pixel positions.
    pub fn line(&mut self, from: (i32, i32), to: (i32, i32), color: Color) {
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let sx = if x < to.0 { 1 } else { -1 };
        let sy = if y < to.1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put(x, y, color);
            if x == to.0 && y == to.1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        for row in y.max(0)..(y + height).min(self.height as i32) {
            for col in x.max(0)..(x + width).min(self.width as i32) {
                self.put(col, row, color);
            }
        }
    }

    pub fn stroke_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        let (right, bottom) = (x + width - 1, y + height - 1);
        self.line((x, y), (right, y), color);
        self.line((right, y), (right, bottom), color);
        self.line((right, bottom), (x, bottom), color);
        self.line((x, bottom), (x, y), color);
    }

    /// Draw `text` with its top-left corner at (x, y), each glyph pixel
    /// `scale` pixels wide.
    pub fn text(&mut self, x: i32, y: i32, text: &str, color: Color, scale: i32) {
        let advance = (GLYPH_WIDTH + 1) * scale;
        for (i, c) in text.chars().enumerate() {
            let origin_x = x + i as i32 * advance;
            for (row, bits) in glyph(c).iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (0b100 >> col) != 0 {
                        self.fill_rect(
                            origin_x + col * scale,
                            y + row as i32 * scale,
                            scale,
                            scale,
                            color,
                        );
                    }
                }
            }
        }
    }

    /// Height of one text line at `scale`, including spacing.
    pub fn line_height(scale: i32) -> i32 {
        (GLYPH_HEIGHT + 2) * scale
    }
}
