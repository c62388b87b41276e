//! Scene pipeline: fragments in, draw calls out.
//!
//! Responsibilities:
//! - collect projected fragments from a [`FragmentSource`]
//! - establish back-to-front draw order (depth sort)
//! - flag fragment pairs whose order is ambiguous (diagnostic only)
//! - fit the scene into the caller's target rectangle
//! - hand the sorted stream to the draw emitter

mod fragment;
mod overlap;
mod screen;
mod sort;
mod source;

pub use fragment::{DepthRange, Fragment, FragmentKind, ObjectId};
pub use overlap::{LogOverlaps, OverlapReport, OverlapSink, detect_overlaps};
pub use screen::screen_transform;
pub use sort::depth_sorted_indices;
pub use source::FragmentSource;

use crate::coords::Rect;
use crate::render::{Canvas, emit};

/// One-call painter's-algorithm renderer.
///
/// The fragment buffer is owned here and reused across calls (cleared and
/// refilled each time); sorted order and screen transform are recomputed per
/// call and nothing else persists between renders.
#[derive(Debug, Default)]
pub struct Scene {
    fragments: Vec<Fragment>,
}

impl Scene {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders one frame: collect, sort, scan for ambiguous overlaps, map
    /// to `target`, emit.
    ///
    /// Draw calls reach `canvas` in exactly the sorted order. Overlap
    /// reports go to `diagnostics` and never alter the drawing. A canvas
    /// error aborts emission and propagates unmodified, leaving the canvas
    /// partially drawn.
    pub fn render<C: Canvas>(
        &mut self,
        source: &dyn FragmentSource,
        canvas: &mut C,
        target: Rect,
        diagnostics: &mut dyn OverlapSink,
    ) -> Result<(), C::Error> {
        self.fragments.clear();
        source.emit_fragments(&mut self.fragments);
        log::debug!("rendering {} fragments", self.fragments.len());

        let order = depth_sorted_indices(&self.fragments);
        detect_overlaps(&self.fragments, &order, diagnostics);

        let screen = screen_transform(&self.fragments, target);
        emit(&self.fragments, &order, &screen, canvas)
    }

    /// Fragments collected by the most recent [`render`](Scene::render).
    #[inline]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }
}
