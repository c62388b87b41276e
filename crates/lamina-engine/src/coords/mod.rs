//! Geometry value types shared across the render pipeline.
//!
//! Canonical space:
//! - Projected screen-plane coordinates, +X right, +Y down
//! - A separate depth coordinate per point; larger depth is farther from
//!   the viewer and is drawn first

mod bounds;
mod mat3;
mod point3;
mod rect;
mod vec2;

pub use bounds::Bounds;
pub use mat3::Mat3;
pub use point3::Point3;
pub use rect::Rect;
pub use vec2::Vec2;
