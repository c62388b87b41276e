use std::sync::Arc;

use crate::coords::{Mat3, Vec2};
use crate::paint::{LineStyle, SurfaceStyle};
use crate::scene::{Fragment, FragmentKind};

use super::Canvas;

/// Identity of the style most recently applied to each canvas channel.
///
/// Holding the `Arc` (rather than a raw pointer) keeps the comparison sound
/// even if the caller drops its own handles mid-render.
#[derive(Default)]
struct StyleState {
    line: Option<Arc<LineStyle>>,
    surface: Option<Arc<SurfaceStyle>>,
}

/// Walks `order` and issues draw calls for each fragment.
///
/// Pen/brush updates follow two rules, which together bound backend state
/// changes by the number of style transitions in the stream rather than the
/// fragment count:
/// - a triangle clears any active pen, a line segment clears any active
///   brush (the other channel must not leak into the draw call)
/// - a style is applied only when it differs by identity from the one last
///   applied to its channel; hidden styles are applied like any other and
///   simply paint nothing
///
/// Path fragments are not drawn. The gap is surfaced once per render via a
/// debug log instead of failing.
pub fn emit<C: Canvas>(
    fragments: &[Fragment],
    order: &[usize],
    screen: &Mat3,
    canvas: &mut C,
) -> Result<(), C::Error> {
    canvas.set_pen(None)?;
    canvas.set_brush(None)?;

    let mut state = StyleState::default();
    let mut points: Vec<Vec2> = Vec::with_capacity(3);
    let mut paths_skipped = false;

    for &i in order {
        let frag = &fragments[i];
        points.clear();
        points.extend(
            frag.points()
                .iter()
                .map(|p| screen.transform_point(p.xy())),
        );

        match frag.kind() {
            FragmentKind::Triangle => {
                if state.line.take().is_some() {
                    canvas.set_pen(None)?;
                }
                if let Some(style) = frag.surface_style() {
                    let unchanged = state
                        .surface
                        .as_ref()
                        .is_some_and(|last| Arc::ptr_eq(last, style));
                    if !unchanged {
                        canvas.set_brush(Some(style))?;
                        state.surface = Some(Arc::clone(style));
                    }
                }
                canvas.draw_polygon(&points)?;
            }
            FragmentKind::LineSegment => {
                if state.surface.take().is_some() {
                    canvas.set_brush(None)?;
                }
                if let Some(style) = frag.line_style() {
                    let unchanged = state
                        .line
                        .as_ref()
                        .is_some_and(|last| Arc::ptr_eq(last, style));
                    if !unchanged {
                        canvas.set_pen(Some(style))?;
                        state.line = Some(Arc::clone(style));
                    }
                }
                canvas.draw_line(points[0], points[1])?;
            }
            FragmentKind::Path => {
                if !paths_skipped {
                    log::debug!("path fragments are not drawn; skipping");
                    paths_skipped = true;
                }
            }
        }
    }

    Ok(())
}
