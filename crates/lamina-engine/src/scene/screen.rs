use crate::coords::{Bounds, Mat3, Rect};

use super::Fragment;

/// Builds the transform mapping projected scene content into `target`.
///
/// The scale is uniform (the smaller of the per-axis fits), so the scene's
/// aspect ratio survives and neither axis clips. The scene's bounding-box
/// center lands on the target rectangle's center.
///
/// Degenerate scenes never fail: an axis with zero or non-finite extent
/// (including the empty fragment set) falls back to the interval [0, 1]
/// before the scale is computed.
pub fn screen_transform(fragments: &[Fragment], target: Rect) -> Mat3 {
    let mut bounds = Bounds::EMPTY;
    for frag in fragments {
        for p in frag.points() {
            if p.is_xy_finite() {
                bounds.include(p.xy());
            }
        }
    }

    let (min_x, max_x) = fallback_axis(bounds.min.x, bounds.max.x);
    let (min_y, max_y) = fallback_axis(bounds.min.y, bounds.max.y);

    let scale = f32::min(
        target.width() / (max_x - min_x),
        target.height() / (max_y - min_y),
    );

    let target_center = target.center();
    Mat3::translation(target_center.x, target_center.y)
        * Mat3::scaling(scale)
        * Mat3::translation(-0.5 * (min_x + max_x), -0.5 * (min_y + max_y))
}

/// Replaces a zero-extent or non-finite axis interval with [0, 1].
fn fallback_axis(min: f32, max: f32) -> (f32, f32) {
    if min == max || !min.is_finite() || !max.is_finite() {
        (0.0, 1.0)
    } else {
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Point3, Vec2};
    use crate::scene::ObjectId;

    fn seg(a: (f32, f32), b: (f32, f32)) -> Fragment {
        Fragment::line_segment(
            [Point3::new(a.0, a.1, 0.0), Point3::new(b.0, b.1, 0.0)],
            ObjectId(0),
            None,
        )
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    // ── aspect-preserving fit ────────────────────────────────────────────

    #[test]
    fn tall_scene_fits_by_the_limiting_axis() {
        // Source box [0,10]x[0,20] into (0,0)-(100,100): y limits, scale 5.
        let frags = vec![seg((0.0, 0.0), (10.0, 20.0))];
        let m = screen_transform(&frags, Rect::new(0.0, 0.0, 100.0, 100.0));

        // Box center maps to target center.
        assert!(close(m.transform_point(Vec2::new(5.0, 10.0)), Vec2::new(50.0, 50.0)));
        // Unit step in x scales by 5.
        let dx = m.transform_point(Vec2::new(6.0, 10.0)).x - 50.0;
        assert!((dx - 5.0).abs() < 1e-3);
    }

    #[test]
    fn offset_target_rect_centers_content() {
        let frags = vec![seg((0.0, 0.0), (4.0, 4.0))];
        let m = screen_transform(&frags, Rect::new(10.0, 20.0, 40.0, 40.0));
        assert!(close(m.transform_point(Vec2::new(2.0, 2.0)), Vec2::new(30.0, 40.0)));
    }

    // ── degenerate scenes ────────────────────────────────────────────────

    #[test]
    fn empty_scene_equals_unit_box_scene() {
        let target = Rect::new(0.0, 0.0, 80.0, 60.0);
        let empty = screen_transform(&[], target);
        let unit = screen_transform(&[seg((0.0, 0.0), (1.0, 1.0))], target);
        assert_eq!(empty, unit);
    }

    #[test]
    fn all_nan_scene_equals_unit_box_scene() {
        let target = Rect::new(0.0, 0.0, 80.0, 60.0);
        let nan = screen_transform(
            &[seg((f32::NAN, f32::NAN), (f32::NAN, f32::NAN))],
            target,
        );
        let unit = screen_transform(&[seg((0.0, 0.0), (1.0, 1.0))], target);
        assert_eq!(nan, unit);
    }

    #[test]
    fn zero_extent_axis_falls_back_independently() {
        // All points share x = 3: the x axis falls back to [0,1] while y
        // keeps its real extent.
        let frags = vec![seg((3.0, 0.0), (3.0, 10.0))];
        let m = screen_transform(&frags, Rect::new(0.0, 0.0, 100.0, 100.0));
        // y extent 10 vs fallback x extent 1: scale = min(100/1, 100/10) = 10.
        let p0 = m.transform_point(Vec2::new(3.0, 0.0));
        let p1 = m.transform_point(Vec2::new(3.0, 10.0));
        assert!((p1.y - p0.y - 100.0).abs() < 1e-3);
    }

    // ── invertibility ────────────────────────────────────────────────────

    #[test]
    fn transform_round_trips_through_inverse() {
        let frags = vec![seg((-5.0, 2.0), (7.0, 9.0))];
        let m = screen_transform(&frags, Rect::new(0.0, 0.0, 640.0, 480.0));
        let inv = m.inverse().unwrap();
        let p = Vec2::new(1.5, 4.5);
        assert!(close(inv.transform_point(m.transform_point(p)), p));
    }
}
