// File: crates/graph-core/src/charts.rs
// Summary: Bar and line chart bodies drawn on top of the series renderer's plot area.

use crate::canvas::ChartCanvas;
use crate::error::Result;
use crate::renderer::{ChartBody, SeriesRenderer};
use crate::series::SeriesStats;
use crate::surface::DrawSurface;

/// Fraction of a category slot a bar fills.
const BAR_FILL: f32 = 0.8;
const LINE_WIDTH: f32 = 1.0;
const MARKER_LINE_WIDTH: f32 = 0.5;
const POINT_RADIUS: f32 = 1.0;

/// One filled bar per value, axes drawn first.
#[derive(Clone, Copy, Debug, Default)]
pub struct BarChart;

/// Connected points at slot centers, axes drawn last.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineChart;

/// Width of one value slot across the plot area.
fn slot_width<S: SeriesStats, C: ChartCanvas, B>(r: &SeriesRenderer<'_, S, C, B>) -> Option<f32> {
    let n = r.series().values().len();
    (n > 0).then(|| r.plot_area_width() / n as f32)
}

fn height_of<S: SeriesStats, C: ChartCanvas, B>(r: &SeriesRenderer<'_, S, C, B>, value: f64) -> f32 {
    r.point_height_percentage(value) as f32 * r.plot_area_height()
}

impl ChartBody for BarChart {
    fn render_chart<S: SeriesStats, C: ChartCanvas>(&self, r: &SeriesRenderer<'_, S, C, Self>) -> Result<()> {
        r.render_axes();
        let Some(slot) = slot_width(r) else { return Ok(()) };
        let bar_width = slot * BAR_FILL;
        let heights: Vec<f32> = r.series().values().iter().map(|&v| height_of(r, v)).collect();

        {
            let mut surface = r.canvas().surface();
            surface.set_fill_color(r.color());
            for (i, &h) in heights.iter().enumerate() {
                // Negative and zero heights have nothing to fill above the axis.
                if h <= 0.0 { continue; }
                let x = i as f32 * slot + (slot - bar_width) * 0.5;
                surface.fill_rectangle((x, h), bar_width, h);
            }
        }
        render_marks(r);
        Ok(())
    }
}

impl ChartBody for LineChart {
    fn render_chart<S: SeriesStats, C: ChartCanvas>(&self, r: &SeriesRenderer<'_, S, C, Self>) -> Result<()> {
        if let Some(slot) = slot_width(r) {
            let points: Vec<(f32, f32)> = r
                .series()
                .values()
                .iter()
                .enumerate()
                .map(|(i, &v)| ((i as f32 + 0.5) * slot, height_of(r, v)))
                .collect();

            let mut surface = r.canvas().surface();
            surface.set_stroke_color(r.color());
            surface.set_fill_color(r.color());
            surface.set_line_width(LINE_WIDTH);
            for pair in points.windows(2) {
                surface.stroke_line(pair[0], pair[1]);
            }
            for &p in &points {
                surface.fill_and_stroke_ellipse(p, POINT_RADIUS);
            }
        }
        render_marks(r);
        r.render_axes();
        Ok(())
    }
}

/// Horizontal reference lines for the statistics the series asks to mark.
fn render_marks<S: SeriesStats, C: ChartCanvas, B>(r: &SeriesRenderer<'_, S, C, B>) {
    let series = r.series();
    let marks = series.marks();
    let wanted = [(marks.average, series.avg()), (marks.minimum, series.min()), (marks.maximum, series.max())];
    let ys: Vec<f32> = wanted
        .into_iter()
        .filter_map(|(on, value)| if on { value } else { None })
        .map(|v| height_of(r, v))
        .collect();
    if ys.is_empty() { return; }

    let mut surface = r.canvas().surface();
    surface.set_stroke_color(r.canvas().theme().markers);
    surface.set_line_width(MARKER_LINE_WIDTH);
    for y in ys {
        surface.stroke_horizontal_line(0.0, r.plot_area_width(), y);
    }
    surface.set_line_width(LINE_WIDTH);
}
