//! Style model shared between fragment producers and canvas backends.
//!
//! Scope:
//! - color representation (straight-alpha RGB plus a transparency channel)
//! - line and surface style descriptors, shared by handle
//!
//! Geometry types remain in `coords`.

mod color;
mod style;

pub use color::ColorRgb;
pub use style::{LineStyle, SurfaceStyle};
