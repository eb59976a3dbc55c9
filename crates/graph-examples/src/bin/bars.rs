// File: crates/graph-examples/src/bin/bars.rs
// Summary: Minimal example that renders a single bar series with category labels to PNG.

use anyhow::{Context, Result};
use graph_core::{Canvas, ChartOptions, Layout, Series, SeriesMarks, SkiaSurface, Theme};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();

    let series = Series::new("Rainfall", vec![12.0, 30.5, 22.0, 8.0, 17.5, 26.0])
        .with_marks(SeriesMarks { average: true, ..Default::default() });
    let options = ChartOptions::default()
        .with_title("Rainfall (mm)")
        .with_xaxis_labels(["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);

    let layout = Layout::new(graph_core::types::WIDTH, graph_core::types::HEIGHT, true);
    let theme = Theme::light();
    let surface = SkiaSurface::for_layout(&layout, 2.0, theme.background)?;
    let canvas = Canvas::new(surface, layout, vec![series], options).with_theme(theme);
    canvas.draw()?;

    let bytes = canvas.into_surface().to_png_bytes()?;
    let out = std::path::PathBuf::from("target/out/example_bars.png");
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&out, bytes).with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}
