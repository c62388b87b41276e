use core::cmp::Ordering;

use super::Fragment;

/// Back-to-front draw order over `fragments`, as a permutation of indices.
///
/// Fragments whose depth range reaches farther from the viewer come first.
/// The result is a full permutation; the overlap scan's early-exit pruning
/// relies on the max-depth monotonicity established here.
pub fn depth_sorted_indices(fragments: &[Fragment]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..fragments.len()).collect();
    order.sort_unstable_by(|&a, &b| draw_order(&fragments[a], &fragments[b]));
    order
}

/// Comparator for back-to-front drawing: max depth descending, ties broken
/// by min depth descending.
///
/// Keys compare via `f32::total_cmp`, which keeps the ordering total when a
/// depth is NaN: a positive NaN ranks above +inf, so a poisoned range sorts
/// as farthest rather than producing an inconsistent sort.
fn draw_order(a: &Fragment, b: &Fragment) -> Ordering {
    let ra = a.depth_range();
    let rb = b.depth_range();
    match rb.max.total_cmp(&ra.max) {
        Ordering::Equal => rb.min.total_cmp(&ra.min),
        o => o,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Point3;
    use crate::scene::ObjectId;

    fn seg(min_depth: f32, max_depth: f32) -> Fragment {
        Fragment::line_segment(
            [
                Point3::new(0.0, 0.0, min_depth),
                Point3::new(1.0, 1.0, max_depth),
            ],
            ObjectId(0),
            None,
        )
    }

    fn sorted_ranges(fragments: &[Fragment]) -> Vec<(f32, f32)> {
        depth_sorted_indices(fragments)
            .into_iter()
            .map(|i| {
                let r = fragments[i].depth_range();
                (r.min, r.max)
            })
            .collect()
    }

    // ── primary ordering ─────────────────────────────────────────────────

    #[test]
    fn larger_max_depth_comes_first() {
        let frags = vec![seg(0.0, 1.0), seg(0.0, 5.0), seg(0.0, 3.0)];
        assert_eq!(
            sorted_ranges(&frags),
            vec![(0.0, 5.0), (0.0, 3.0), (0.0, 1.0)]
        );
    }

    #[test]
    fn result_is_a_permutation() {
        let frags = vec![seg(0.0, 2.0), seg(1.0, 2.0), seg(0.0, 9.0)];
        let mut order = depth_sorted_indices(&frags);
        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2]);
    }

    // ── tie-break ────────────────────────────────────────────────────────

    #[test]
    fn equal_max_breaks_tie_on_min_descending() {
        let frags = vec![seg(1.0, 5.0), seg(4.0, 5.0), seg(2.0, 5.0)];
        assert_eq!(
            sorted_ranges(&frags),
            vec![(4.0, 5.0), (2.0, 5.0), (1.0, 5.0)]
        );
    }

    // ── NaN policy ───────────────────────────────────────────────────────

    #[test]
    fn nan_range_sorts_farthest() {
        let frags = vec![seg(0.0, f32::INFINITY), seg(0.0, f32::NAN), seg(0.0, 2.0)];
        let order = depth_sorted_indices(&frags);
        assert_eq!(order[0], 1);
        assert_eq!(order[1], 0);
        assert_eq!(order[2], 2);
    }
}
