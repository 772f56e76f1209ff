/// Straight-alpha RGBA color, one byte per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color with alpha scaled by `num/den` (integer arithmetic,
    /// truncating like the original palette derivation).
    pub const fn with_alpha_fraction(self, num: u16, den: u16) -> Self {
        let a = (self.a as u16 * num / den) as u8;
        Self { a, ..self }
    }

    /// Derives the three-slot level palette from a single accent color:
    /// one-third alpha, two-thirds alpha, full.
    pub const fn level_palette(self) -> [Self; 3] {
        [
            self.with_alpha_fraction(1, 3),
            self.with_alpha_fraction(2, 3),
            self,
        ]
    }
}

/// Drawable bounds in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn square(size: f32) -> Self {
        Self::new(size, size)
    }

    /// Inset from the bounds edge to the arc stroke centerline. Keeps the
    /// ring at `center_radius` from the center, but never lets the stroke
    /// spill past the bounds.
    pub fn stroke_inset(self, center_radius: f32, stroke_width: f32) -> f32 {
        let min_size = self.width.min(self.height);
        let inset = min_size / 2.0 - center_radius;
        let min_inset = (stroke_width / 2.0).ceil();
        inset.max(min_inset)
    }
}
