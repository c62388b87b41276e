//! SVG canvas backend for `lamina-engine`.
//!
//! Draw calls become SVG elements written straight to any [`std::io::Write`]
//! in issue order, which preserves the painter's-algorithm occlusion (later
//! elements paint over earlier ones).
//!
//! # Quick start
//!
//! ```rust,ignore
//! use lamina_engine::coords::Rect;
//! use lamina_engine::scene::{LogOverlaps, Scene};
//! use lamina_svg::SvgCanvas;
//!
//! let target = Rect::new(0.0, 0.0, 640.0, 480.0);
//! let mut canvas = SvgCanvas::new(std::fs::File::create("plot.svg")?, 640.0, 480.0)?;
//! Scene::new().render(&my_source, &mut canvas, target, &mut LogOverlaps)?;
//! canvas.finish()?;
//! ```

mod canvas;

pub use canvas::SvgCanvas;
