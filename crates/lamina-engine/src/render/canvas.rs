use crate::coords::Vec2;
use crate::paint::{LineStyle, SurfaceStyle};

/// Backend drawing surface.
///
/// Pen and brush are sticky state: a style applies to every subsequent draw
/// call until replaced, with `None` meaning "draw nothing for that channel".
/// Calls take effect in issue order and must not be reordered by the
/// backend.
///
/// Errors are the backend's own and propagate out of the render call
/// unwrapped; a failure partway through emission leaves the surface
/// partially drawn.
pub trait Canvas {
    type Error;

    /// Sets the stroke state for subsequent lines. A hidden style draws
    /// nothing but is still a distinct pen state.
    fn set_pen(&mut self, pen: Option<&LineStyle>) -> Result<(), Self::Error>;

    /// Sets the fill state for subsequent polygons.
    fn set_brush(&mut self, brush: Option<&SurfaceStyle>) -> Result<(), Self::Error>;

    /// Draws a filled polygon through `points` with the current brush.
    fn draw_polygon(&mut self, points: &[Vec2]) -> Result<(), Self::Error>;

    /// Draws a segment from `a` to `b` with the current pen.
    fn draw_line(&mut self, a: Vec2, b: Vec2) -> Result<(), Self::Error>;
}
