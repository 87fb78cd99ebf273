//! Per-frame drawing commands.
//!
//! A [`Canvas`] is plain data: a background colour and a list of filled
//! circles in normalized coordinates (`[0, 1]²`, origin bottom-left) with
//! radii in pixels. Scenes fill it; the GPU renderer consumes it.

use glam::Vec2;

/// An sRGB colour with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Opaque colour from `0xRRGGBB`.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xFF) as f32 / 255.0;
        Self::rgb(channel(16), channel(8), channel(0))
    }

    /// Convert the colour channels to linear light, keeping alpha.
    pub fn to_linear(self) -> Self {
        Self {
            r: srgb_to_linear(self.r),
            g: srgb_to_linear(self.g),
            b: srgb_to_linear(self.b),
            a: self.a,
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// A filled circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Normalized centre.
    pub center: Vec2,
    /// Radius in pixels.
    pub radius: f32,
    pub color: Color,
}

#[derive(Debug, Clone)]
pub struct Canvas {
    background: Color,
    circles: Vec<Circle>,
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            background: Color::BLACK,
            circles: Vec::new(),
        }
    }

    /// Start a new frame filled with `color`.
    pub fn clear(&mut self, color: Color) {
        self.background = color;
        self.circles.clear();
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.circles.push(Circle { center, radius, color });
    }

    /// Draw many circles sharing one radius and colour.
    pub fn circles<I>(&mut self, centers: I, radius: f32, color: Color)
    where
        I: IntoIterator<Item = Vec2>,
    {
        self.circles
            .extend(centers.into_iter().map(|center| Circle { center, radius, color }));
    }

    #[inline]
    pub fn background(&self) -> Color {
        self.background
    }

    #[inline]
    pub fn shapes(&self) -> &[Circle] {
        &self.circles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.circles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex(0x112F41);
        assert!((c.r - 17.0 / 255.0).abs() < 1e-6);
        assert!((c.g - 47.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 65.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
        assert_eq!(Color::from_hex(0xFFFFFF), Color::WHITE);
        assert_eq!(Color::from_hex(0xFF0000), Color::RED);
    }

    #[test]
    fn test_linear_conversion_endpoints() {
        assert_eq!(Color::BLACK.to_linear(), Color::BLACK);
        let white = Color::WHITE.to_linear();
        assert!((white.r - 1.0).abs() < 1e-6);
        // Mid grey is much darker in linear light
        let grey = Color::rgb(0.5, 0.5, 0.5).to_linear();
        assert!((grey.r - 0.214).abs() < 1e-3);
    }

    #[test]
    fn test_clear_resets_shapes() {
        let mut canvas = Canvas::new();
        canvas.circles([Vec2::ZERO, Vec2::ONE], 2.0, Color::WHITE);
        canvas.circle(Vec2::splat(0.5), 5.0, Color::RED);
        assert_eq!(canvas.len(), 3);
        assert_eq!(canvas.shapes()[2].radius, 5.0);

        canvas.clear(Color::from_hex(0x112F41));
        assert!(canvas.is_empty());
        assert_eq!(canvas.background(), Color::from_hex(0x112F41));
    }
}
