use super::Fragment;

/// One ambiguous pair found by the overlap scan.
///
/// Indices refer to the original fragment collection, with `first` the
/// fragment drawn earlier. Painter's-algorithm ordering cannot guarantee a
/// correct image for such a pair; the scan reports it and moves on.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct OverlapReport {
    pub first: usize,
    pub second: usize,
}

/// Destination for overlap diagnostics.
pub trait OverlapSink {
    fn report(&mut self, overlap: OverlapReport);
}

/// Collects reports into a vector for later inspection.
impl OverlapSink for Vec<OverlapReport> {
    fn report(&mut self, overlap: OverlapReport) {
        self.push(overlap);
    }
}

/// Forwards each report to the `log` facade at warn level.
#[derive(Debug, Default)]
pub struct LogOverlaps;

impl OverlapSink for LogOverlaps {
    fn report(&mut self, overlap: OverlapReport) {
        log::warn!(
            "ambiguous draw order between fragments {} and {}",
            overlap.first,
            overlap.second
        );
    }
}

/// Scans the sorted order for fragment pairs whose draw order is ambiguous:
/// different owning objects, intersecting screen-plane bounds, and depth
/// ranges that are not cleanly separated in the draw direction.
///
/// The inner scan stops as soon as the inner fragment's max depth drops
/// below the outer fragment's min depth. `order` is monotone descending in
/// max depth, so no later fragment can reach back into the outer range.
/// Diagnostic only: the order is never altered and drawing is not
/// suppressed.
pub fn detect_overlaps(fragments: &[Fragment], order: &[usize], sink: &mut dyn OverlapSink) {
    for idx in 0..order.len().saturating_sub(1) {
        let outer = &fragments[order[idx]];
        let outer_bounds = outer.bounds();
        let outer_min_depth = outer.depth_range().min;

        for &inner_idx in &order[idx + 1..] {
            let inner = &fragments[inner_idx];

            if inner.object() == outer.object() {
                continue;
            }

            if inner.depth_range().max < outer_min_depth {
                break;
            }

            if inner.bounds().intersects(outer_bounds) {
                sink.report(OverlapReport {
                    first: order[idx],
                    second: inner_idx,
                });
            }
        }
    }
}
