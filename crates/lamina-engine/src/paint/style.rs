use super::ColorRgb;

/// Stroke style for line fragments.
///
/// Styles are immutable for the duration of a render and shared by many
/// fragments through `Arc`. The draw emitter compares styles by handle
/// identity (`Arc::ptr_eq`), never by value, so two styles with equal fields
/// still count as distinct pen states.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: ColorRgb,
    /// 0 = opaque, 1 = fully transparent.
    pub transparency: f32,
    pub width: f32,
    /// A hidden style is still applied to the canvas as a no-draw pen; the
    /// draw calls themselves are never skipped.
    pub hidden: bool,
}

impl LineStyle {
    #[inline]
    pub fn new(color: ColorRgb, width: f32) -> Self {
        Self {
            color,
            transparency: 0.0,
            width,
            hidden: false,
        }
    }

    #[inline]
    pub fn hidden() -> Self {
        Self {
            hidden: true,
            ..Self::new(ColorRgb::black(), 0.0)
        }
    }

    /// Effective alpha for backends that blend with straight alpha.
    #[inline]
    pub fn opacity(&self) -> f32 {
        1.0 - self.transparency.clamp(0.0, 1.0)
    }
}

/// Fill style for triangle fragments.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceStyle {
    pub color: ColorRgb,
    /// 0 = opaque, 1 = fully transparent.
    pub transparency: f32,
    /// Hidden surfaces become a no-fill brush, not skipped draw calls.
    pub hidden: bool,
}

impl SurfaceStyle {
    #[inline]
    pub fn new(color: ColorRgb) -> Self {
        Self {
            color,
            transparency: 0.0,
            hidden: false,
        }
    }

    #[inline]
    pub fn hidden() -> Self {
        Self {
            hidden: true,
            ..Self::new(ColorRgb::black())
        }
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        1.0 - self.transparency.clamp(0.0, 1.0)
    }
}
