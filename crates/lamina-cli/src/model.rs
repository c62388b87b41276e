//! Demo fragment source: two interpenetrating cubes and coordinate axes.
//!
//! Projection is a plain yaw/pitch rotation with orthographic depth, enough
//! to exercise the pipeline; real plot scenes arrive through the same
//! `FragmentSource` boundary with their own camera mathematics.

use std::sync::Arc;

use lamina_engine::coords::Point3;
use lamina_engine::paint::{ColorRgb, LineStyle, SurfaceStyle};
use lamina_engine::scene::{Fragment, FragmentSource, ObjectId};

/// Corner index bits select the sign per axis: bit 0 = x, bit 1 = y, bit 2 = z.
const FACES: [[usize; 4]; 6] = [
    [0, 2, 6, 4], // x-
    [1, 3, 7, 5], // x+
    [0, 1, 5, 4], // y-
    [2, 3, 7, 6], // y+
    [0, 1, 3, 2], // z-
    [4, 5, 7, 6], // z+
];

fn cube_corners(center: [f32; 3], half: f32) -> [[f32; 3]; 8] {
    core::array::from_fn(|i| {
        let sign = |bit: usize| if i >> bit & 1 == 1 { half } else { -half };
        [
            center[0] + sign(0),
            center[1] + sign(1),
            center[2] + sign(2),
        ]
    })
}

/// Cube edges: corner pairs differing in exactly one index bit.
fn cube_edges() -> Vec<(usize, usize)> {
    let mut edges = Vec::with_capacity(12);
    for a in 0..8usize {
        for bit in 0..3 {
            let b = a ^ (1 << bit);
            if a < b {
                edges.push((a, b));
            }
        }
    }
    edges
}

pub struct DemoScene {
    pub yaw: f32,
    pub pitch: f32,
}

impl DemoScene {
    /// Rotates a model-space point and projects it orthographically.
    ///
    /// Depth is the rotated z coordinate: +z points away from the viewer,
    /// so larger depth is farther, matching the sort convention. Screen y
    /// is flipped because canvas +Y points down.
    fn project(&self, p: [f32; 3]) -> Point3 {
        let (sy, cy) = self.yaw.sin_cos();
        let x1 = p[0] * cy - p[2] * sy;
        let z1 = p[0] * sy + p[2] * cy;

        let (sp, cp) = self.pitch.sin_cos();
        let y2 = p[1] * cp - z1 * sp;
        let z2 = p[1] * sp + z1 * cp;

        Point3::new(x1, -y2, z2)
    }

    fn push_cube(
        &self,
        out: &mut Vec<Fragment>,
        object: ObjectId,
        center: [f32; 3],
        half: f32,
        surface: &Arc<SurfaceStyle>,
        edges: Option<&Arc<LineStyle>>,
    ) {
        let corners = cube_corners(center, half).map(|c| self.project(c));

        for face in FACES {
            let [a, b, c, d] = face.map(|i| corners[i]);
            out.push(Fragment::triangle([a, b, c], object, Some(surface.clone())));
            out.push(Fragment::triangle([a, c, d], object, Some(surface.clone())));
        }

        if let Some(style) = edges {
            for (a, b) in cube_edges() {
                out.push(Fragment::line_segment(
                    [corners[a], corners[b]],
                    object,
                    Some(style.clone()),
                ));
            }
        }
    }
}

impl FragmentSource for DemoScene {
    fn emit_fragments(&self, out: &mut Vec<Fragment>) {
        let slate = Arc::new(SurfaceStyle::new(ColorRgb::new(0.35, 0.55, 0.85)));
        let amber = Arc::new(SurfaceStyle {
            transparency: 0.25,
            ..SurfaceStyle::new(ColorRgb::new(0.9, 0.6, 0.2))
        });
        let outline = Arc::new(LineStyle::new(ColorRgb::new(0.1, 0.15, 0.25), 1.0));
        let axis = Arc::new(LineStyle::new(ColorRgb::new(0.3, 0.3, 0.3), 0.75));

        // The cubes interpenetrate, so the overlap scan has something to say.
        self.push_cube(out, ObjectId(1), [-0.35, 0.0, 0.0], 0.55, &slate, Some(&outline));
        self.push_cube(out, ObjectId(2), [0.4, 0.1, 0.3], 0.5, &amber, None);

        for end in [[1.4, 0.0, 0.0], [0.0, 1.4, 0.0], [0.0, 0.0, 1.4]] {
            out.push(Fragment::line_segment(
                [self.project([0.0; 3]), self.project(end)],
                ObjectId(3),
                Some(axis.clone()),
            ));
        }
    }
}
