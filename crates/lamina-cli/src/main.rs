mod model;

use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result};
use lamina_engine::coords::Rect;
use lamina_engine::logging::{LoggingConfig, init_logging};
use lamina_engine::scene::Scene;
use lamina_svg::SvgCanvas;

use model::DemoScene;

const WIDTH: f32 = 640.0;
const HEIGHT: f32 = 480.0;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let path = std::env::args().nth(1).unwrap_or_else(|| "scene.svg".into());

    let file = File::create(&path).with_context(|| format!("creating {path}"))?;
    let mut canvas =
        SvgCanvas::new(BufWriter::new(file), WIDTH, HEIGHT).context("writing svg header")?;

    let source = DemoScene { yaw: 0.6, pitch: 0.45 };
    let mut overlaps = Vec::new();

    Scene::new()
        .render(
            &source,
            &mut canvas,
            Rect::new(0.0, 0.0, WIDTH, HEIGHT),
            &mut overlaps,
        )
        .context("rendering scene")?;
    canvas.finish().context("finalizing svg")?;

    if !overlaps.is_empty() {
        log::warn!(
            "{} fragment pairs have ambiguous draw order; the output may show them incorrectly",
            overlaps.len()
        );
    }
    println!("wrote {path}");
    Ok(())
}
