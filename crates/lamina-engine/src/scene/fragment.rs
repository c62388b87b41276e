use std::sync::Arc;

use crate::coords::{Bounds, Point3};
use crate::paint::{LineStyle, SurfaceStyle};

/// Identifies the logical plot object a fragment came from.
///
/// Compared for equality only; the overlap scan uses it to avoid reporting a
/// shape against itself.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ObjectId(pub u32);

/// Primitive kind of a [`Fragment`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FragmentKind {
    Triangle,
    LineSegment,
    Path,
}

/// Camera-space depth extent of a fragment.
///
/// Depth increases away from the viewer, so the fragment with the larger
/// `max` is drawn earlier. `max >= min` holds for any fragment built from
/// finite depths.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DepthRange {
    pub min: f32,
    pub max: f32,
}

impl DepthRange {
    /// Depth extent over a point run.
    ///
    /// Any NaN depth poisons the whole range to (NaN, NaN); the depth sort's
    /// total ordering then places the fragment at the far end instead of
    /// breaking comparator totality.
    pub fn from_points(points: &[Point3]) -> Self {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for p in points {
            if p.depth.is_nan() {
                return Self {
                    min: f32::NAN,
                    max: f32::NAN,
                };
            }
            min = min.min(p.depth);
            max = max.max(p.depth);
        }
        Self { min, max }
    }
}

/// One drawable projected primitive.
///
/// Depth range and screen-plane bounds are derived from the points at
/// construction and never change afterwards; the per-kind point count is
/// enforced by the constructor signatures.
#[derive(Debug, Clone)]
pub struct Fragment {
    kind: FragmentKind,
    points: Vec<Point3>,
    depth_range: DepthRange,
    bounds: Bounds,
    object: ObjectId,
    line_style: Option<Arc<LineStyle>>,
    surface_style: Option<Arc<SurfaceStyle>>,
}

impl Fragment {
    /// A filled triangle. `surface` of `None` means nothing is painted for
    /// the fill channel.
    pub fn triangle(
        points: [Point3; 3],
        object: ObjectId,
        surface: Option<Arc<SurfaceStyle>>,
    ) -> Self {
        Self::build(FragmentKind::Triangle, points.to_vec(), object, None, surface)
    }

    /// A stroked segment between two projected points.
    pub fn line_segment(
        points: [Point3; 2],
        object: ObjectId,
        line: Option<Arc<LineStyle>>,
    ) -> Self {
        Self::build(FragmentKind::LineSegment, points.to_vec(), object, line, None)
    }

    /// An arbitrary polyline. Paths participate in sorting and overlap
    /// detection but the draw stage does not emit them; see the emitter.
    pub fn path(points: Vec<Point3>, object: ObjectId, line: Option<Arc<LineStyle>>) -> Self {
        Self::build(FragmentKind::Path, points, object, line, None)
    }

    fn build(
        kind: FragmentKind,
        points: Vec<Point3>,
        object: ObjectId,
        line_style: Option<Arc<LineStyle>>,
        surface_style: Option<Arc<SurfaceStyle>>,
    ) -> Self {
        let depth_range = DepthRange::from_points(&points);
        let mut bounds = Bounds::EMPTY;
        for p in &points {
            bounds.include(p.xy());
        }
        Self {
            kind,
            points,
            depth_range,
            bounds,
            object,
            line_style,
            surface_style,
        }
    }

    #[inline]
    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    #[inline]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    #[inline]
    pub fn depth_range(&self) -> DepthRange {
        self.depth_range
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn object(&self) -> ObjectId {
        self.object
    }

    #[inline]
    pub fn line_style(&self) -> Option<&Arc<LineStyle>> {
        self.line_style.as_ref()
    }

    #[inline]
    pub fn surface_style(&self) -> Option<&Arc<SurfaceStyle>> {
        self.surface_style.as_ref()
    }
}
