/// Straight RGB color, channels in `[0, 1]`.
///
/// Transparency is carried separately on the style descriptors, matching how
/// plot styles expose it to users (a 0..1 "transparency" slider rather than
/// alpha). Backends combine the two when they build their paint state.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorRgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ColorRgb {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Converts to 8-bit channels for backends that want byte colors.
    #[inline]
    pub fn to_u8(self) -> (u8, u8, u8) {
        let scale = |c: f32| (c.clamp(0.0, 1.0) * 255.0) as u8;
        (scale(self.r), scale(self.g), scale(self.b))
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}
