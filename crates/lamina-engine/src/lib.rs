//! Lamina engine crate.
//!
//! Painter's-algorithm core for vector-output 3D plot rendering: fragments
//! arrive projected, get depth-sorted, checked for ambiguous overlaps,
//! fitted to a target rectangle, and emitted as back-to-front draw calls
//! against a pluggable canvas backend. No depth buffer; draw order is the
//! occlusion mechanism.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
