/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const OFF_WHITE: Color = Color::rgb(245, 245, 245);
    pub const LIGHT_GRAY: Color = Color::rgb(200, 200, 200);
    pub const DARK_GRAY: Color = Color::rgb(80, 80, 80);
    pub const BLUE: Color = Color::rgb(0, 121, 241);
    pub const LIME: Color = Color::rgb(0, 158, 47);
    pub const GOLD: Color = Color::rgb(255, 203, 0);
    pub const MAROON: Color = Color::rgb(190, 33, 55);
    pub const SKY_BLUE: Color = Color::rgb(102, 191, 255);

    /// Packed `0x00RRGGBB`, the layout of 32-bit software framebuffers.
    pub fn to_rgb_u32(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Alpha-blend `self` over `background` using `self.a`.
    pub fn over(self, background: Color) -> Color {
        let alpha = u32::from(self.a);
        let blend = |fg: u8, bg: u8| -> u8 {
            ((u32::from(fg) * alpha + u32::from(bg) * (255 - alpha)) / 255) as u8
        };
        Color::rgb(
            blend(self.r, background.r),
            blend(self.g, background.g),
            blend(self.b, background.b),
        )
    }

    /// Same color with alpha scaled by `factor` in `[0, 1]`.
    pub fn fade(self, factor: f32) -> Color {
        let a = (f32::from(self.a) * factor.clamp(0.0, 1.0)).round() as u8;
        Color { a, ..self }
    }
}
