use std::io::{self, Write};

use lamina_engine::coords::Vec2;
use lamina_engine::paint::{LineStyle, SurfaceStyle};
use lamina_engine::render::Canvas;

/// Resolved stroke state, ready for attribute output.
#[derive(Debug, Clone, PartialEq)]
struct Stroke {
    rgb: (u8, u8, u8),
    opacity: f32,
    width: f32,
}

/// Resolved fill state.
#[derive(Debug, Clone, PartialEq)]
struct Fill {
    rgb: (u8, u8, u8),
    opacity: f32,
}

/// Canvas backend that writes one SVG element per draw call.
///
/// Pen/brush state is held as pre-resolved attribute values; a hidden style
/// resolves to the same "paint nothing" state as no style at all, so hidden
/// fragments still produce elements, just invisible ones.
#[derive(Debug)]
pub struct SvgCanvas<W: Write> {
    out: W,
    pen: Option<Stroke>,
    brush: Option<Fill>,
}

impl<W: Write> SvgCanvas<W> {
    /// Starts an SVG document of the given pixel size and writes the
    /// opening tag.
    pub fn new(mut out: W, width: f32, height: f32) -> io::Result<Self> {
        writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\">"
        )?;
        Ok(Self {
            out,
            pen: None,
            brush: None,
        })
    }

    /// Closes the document and hands the writer back.
    pub fn finish(mut self) -> io::Result<W> {
        writeln!(self.out, "</svg>")?;
        self.out.flush()?;
        Ok(self.out)
    }

    fn fill_attrs(&self) -> String {
        match &self.brush {
            None => "fill=\"none\"".to_owned(),
            Some(f) => {
                let (r, g, b) = f.rgb;
                if f.opacity < 1.0 {
                    format!(
                        "fill=\"rgb({r},{g},{b})\" fill-opacity=\"{:.3}\"",
                        f.opacity
                    )
                } else {
                    format!("fill=\"rgb({r},{g},{b})\"")
                }
            }
        }
    }

    fn stroke_attrs(&self) -> String {
        match &self.pen {
            None => "stroke=\"none\"".to_owned(),
            Some(s) => {
                let (r, g, b) = s.rgb;
                let mut attrs =
                    format!("stroke=\"rgb({r},{g},{b})\" stroke-width=\"{:.2}\"", s.width);
                if s.opacity < 1.0 {
                    attrs.push_str(&format!(" stroke-opacity=\"{:.3}\"", s.opacity));
                }
                attrs
            }
        }
    }
}

impl<W: Write> Canvas for SvgCanvas<W> {
    type Error = io::Error;

    fn set_pen(&mut self, pen: Option<&LineStyle>) -> io::Result<()> {
        self.pen = match pen {
            Some(style) if !style.hidden => Some(Stroke {
                rgb: style.color.to_u8(),
                opacity: style.opacity(),
                width: style.width,
            }),
            _ => None,
        };
        Ok(())
    }

    fn set_brush(&mut self, brush: Option<&SurfaceStyle>) -> io::Result<()> {
        self.brush = match brush {
            Some(style) if !style.hidden => Some(Fill {
                rgb: style.color.to_u8(),
                opacity: style.opacity(),
            }),
            _ => None,
        };
        Ok(())
    }

    fn draw_polygon(&mut self, points: &[Vec2]) -> io::Result<()> {
        let mut coords = String::new();
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                coords.push(' ');
            }
            coords.push_str(&format!("{:.2},{:.2}", p.x, p.y));
        }
        writeln!(
            self.out,
            "  <polygon points=\"{coords}\" {} {}/>",
            self.fill_attrs(),
            self.stroke_attrs()
        )
    }

    fn draw_line(&mut self, a: Vec2, b: Vec2) -> io::Result<()> {
        writeln!(
            self.out,
            "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>",
            a.x,
            a.y,
            b.x,
            b.y,
            self.stroke_attrs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lamina_engine::paint::ColorRgb;

    fn render<F>(draw: F) -> String
    where
        F: FnOnce(&mut SvgCanvas<Vec<u8>>) -> io::Result<()>,
    {
        let mut canvas = SvgCanvas::new(Vec::new(), 100.0, 100.0).unwrap();
        draw(&mut canvas).unwrap();
        String::from_utf8(canvas.finish().unwrap()).unwrap()
    }

    #[test]
    fn document_has_svg_envelope() {
        let svg = render(|_| Ok(()));
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn polygon_uses_current_brush() {
        let svg = render(|c| {
            c.set_brush(Some(&SurfaceStyle::new(ColorRgb::new(1.0, 0.0, 0.0))))?;
            c.draw_polygon(&[
                Vec2::new(0.0, 0.0),
                Vec2::new(10.0, 0.0),
                Vec2::new(0.0, 10.0),
            ])
        });
        assert!(svg.contains("<polygon points=\"0.00,0.00 10.00,0.00 0.00,10.00\""));
        assert!(svg.contains("fill=\"rgb(255,0,0)\""));
    }

    #[test]
    fn hidden_brush_paints_nothing() {
        let svg = render(|c| {
            c.set_brush(Some(&SurfaceStyle::hidden()))?;
            c.draw_polygon(&[Vec2::zero(), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)])
        });
        // The element is still written; only its paint is disabled.
        assert!(svg.contains("<polygon"));
        assert!(svg.contains("fill=\"none\""));
    }

    #[test]
    fn line_uses_current_pen() {
        let mut style = LineStyle::new(ColorRgb::new(0.0, 0.0, 1.0), 2.0);
        style.transparency = 0.5;
        let svg = render(|c| {
            c.set_pen(Some(&style))?;
            c.draw_line(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0))
        });
        assert!(svg.contains("<line x1=\"1.00\" y1=\"2.00\" x2=\"3.00\" y2=\"4.00\""));
        assert!(svg.contains("stroke=\"rgb(0,0,255)\""));
        assert!(svg.contains("stroke-width=\"2.00\""));
        assert!(svg.contains("stroke-opacity=\"0.500\""));
    }

    #[test]
    fn clearing_the_pen_disables_strokes() {
        let svg = render(|c| {
            c.set_pen(Some(&LineStyle::new(ColorRgb::black(), 1.0)))?;
            c.set_pen(None)?;
            c.draw_line(Vec2::zero(), Vec2::new(5.0, 5.0))
        });
        assert!(svg.contains("stroke=\"none\""));
    }

    #[test]
    fn elements_appear_in_issue_order() {
        let svg = render(|c| {
            c.set_brush(Some(&SurfaceStyle::new(ColorRgb::white())))?;
            c.draw_polygon(&[Vec2::zero(), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)])?;
            c.set_pen(Some(&LineStyle::new(ColorRgb::black(), 1.0)))?;
            c.draw_line(Vec2::zero(), Vec2::new(2.0, 2.0))
        });
        let polygon_at = svg.find("<polygon").unwrap();
        let line_at = svg.find("<line").unwrap();
        assert!(polygon_at < line_at);
    }
}
