// File: crates/demo/src/main.rs
// Summary: Demo loads a category CSV (label column + one column per series) and renders it to PNG.
// Usage: graph-demo <data.csv> [theme] [--statistic-labels]
// - A series header ending in ":line" is drawn as a line; other series are bars.

use anyhow::{Context, Result};
use graph_core::{theme, Canvas, ChartOptions, Layout, Series, SeriesKind, SkiaSurface, YLabelText};
use std::path::{Path, PathBuf};

const LINE_SUFFIX: &str = ":line";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let raw = args.next().context("usage: graph-demo <data.csv> [theme] [--statistic-labels]")?;
    let mut theme_name = "light".to_string();
    let mut label_text = YLabelText::SeriesMax;
    for arg in args {
        if arg == "--statistic-labels" {
            label_text = YLabelText::Statistic;
        } else {
            theme_name = arg;
        }
    }

    let path = PathBuf::from(&raw);
    let (labels, series) = load_category_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    if series.is_empty() {
        anyhow::bail!("no series columns found; expected a label column followed by value columns");
    }
    tracing::info!(categories = labels.len(), series = series.len(), "loaded {}", path.display());

    let title = path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_string();
    let options = ChartOptions::default()
        .with_title(title)
        .with_xaxis_labels(labels)
        .with_y_axis_label_text(label_text);

    let theme = theme::find(&theme_name);
    let layout = Layout::new(graph_core::types::WIDTH, graph_core::types::HEIGHT, true);
    let surface = SkiaSurface::for_layout(&layout, 2.0, theme.background)?;
    let canvas = Canvas::new(surface, layout, series, options).with_theme(theme);
    canvas.draw()?;

    let out = out_name_for(&path);
    let bytes = canvas.into_surface().to_png_bytes()?;
    std::fs::write(&out, bytes).with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Produce output file name like target/out/graph_<stem>.png
fn out_name_for(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("graph_{stem}.png"));
    out
}

/// First column holds category labels; every further column is one series.
fn load_category_csv(path: &Path) -> Result<(Vec<String>, Vec<Series>)> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_category_csv(file)
}

/// A row with any non-numeric cell is dropped whole, label included, so
/// every series stays aligned with the category labels.
fn read_category_csv<R: std::io::Read>(input: R) -> Result<(Vec<String>, Vec<Series>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let mut series = headers
        .iter()
        .skip(1)
        .map(|h| match h.strip_suffix(LINE_SUFFIX) {
            Some(name) => Series::new(name, Vec::new()).with_kind(SeriesKind::Line),
            None => Series::new(h.as_str(), Vec::new()),
        })
        .collect::<Vec<_>>();

    let mut labels = Vec::new();
    'rows: for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let mut values = Vec::with_capacity(series.len());
        for (col, s) in series.iter().enumerate() {
            let cell = rec.get(col + 1).unwrap_or_default();
            match cell.parse::<f64>() {
                Ok(v) if v.is_finite() => values.push(v),
                _ => {
                    tracing::warn!(row = row + 1, column = %s.title, cell, "skipping row with non-numeric cell");
                    continue 'rows;
                }
            }
        }
        labels.push(rec.get(0).unwrap_or_default().to_string());
        for (s, v) in series.iter_mut().zip(values) {
            s.values.push(v);
        }
    }
    Ok((labels, series))
}
