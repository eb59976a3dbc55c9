// File: crates/graph-core/src/renderer.rs
// Summary: SeriesRenderer: plots one series onto a shared canvas (axes, labels, chart body hook).
// Notes:
// - Plot area size is derived once from the canvas graph area at construction.
//   A renderer built before the graph area changes is stale; build a new one.
// - Surface borrows are scoped to one command batch so chart bodies can call
//   back into the renderer while drawing.

use crate::axis::{self, AxisStats, YLabelText};
use crate::canvas::ChartCanvas;
use crate::error::{ChartError, Result};
use crate::scale;
use crate::series::SeriesStats;
use crate::surface::{DrawSurface, HAlign, Overflow, TextBox, VAlign};
use crate::theme::Color;
use crate::types::{
    DEFAULT_SERIES_COLOR, ORIGIN_MARKER_RADIUS, PLOT_MARGIN_X, PLOT_MARGIN_Y, X_LABEL_HEIGHT, X_LABEL_Y,
    Y_LABEL_HEIGHT, Y_LABEL_WIDTH, Y_LABEL_X,
};

/// Chart-type specific drawing of a series' data shapes.
///
/// Implementations usually call [`SeriesRenderer::render_axes`] before or
/// after drawing their shapes.
pub trait ChartBody: Sized {
    fn render_chart<S: SeriesStats, C: ChartCanvas>(&self, renderer: &SeriesRenderer<'_, S, C, Self>) -> Result<()>;
}

/// Body of a renderer that was never given a chart type. Rendering it is a
/// programming error and always fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct AbstractChart;

impl ChartBody for AbstractChart {
    fn render_chart<S: SeriesStats, C: ChartCanvas>(&self, _renderer: &SeriesRenderer<'_, S, C, Self>) -> Result<()> {
        Err(ChartError::NotImplemented("render_chart must be provided by a concrete chart type"))
    }
}

pub struct SeriesRenderer<'a, S, C, B = AbstractChart> {
    series: &'a S,
    canvas: &'a C,
    color: Color,
    plot_area_width: f32,
    plot_area_height: f32,
    body: B,
}

impl<'a, S: SeriesStats, C: ChartCanvas> SeriesRenderer<'a, S, C, AbstractChart> {
    /// Renderer without a chart body; `render` fails with `NotImplemented`.
    pub fn new(series: &'a S, canvas: &'a C, color: Option<&str>) -> Result<Self> {
        Self::with_body(series, canvas, color, AbstractChart)
    }
}

impl<'a, S: SeriesStats, C: ChartCanvas, B: ChartBody> SeriesRenderer<'a, S, C, B> {
    /// Bind `series` to `canvas`. `color` is six hex digits and defaults to black.
    pub fn with_body(series: &'a S, canvas: &'a C, color: Option<&str>, body: B) -> Result<Self> {
        check_series(series)?;
        let graph_area = canvas.graph_area();
        if !graph_area.width.is_finite() || !graph_area.height.is_finite() {
            return Err(ChartError::TypeMismatch(format!(
                "canvas graph area must have a finite size, got {}x{}",
                graph_area.width, graph_area.height
            )));
        }
        let hex = color.unwrap_or(DEFAULT_SERIES_COLOR);
        let color = Color::from_hex(hex)
            .ok_or_else(|| ChartError::TypeMismatch(format!("color must be six hex digits, got {hex:?}")))?;

        Ok(Self {
            series,
            canvas,
            color,
            plot_area_width: graph_area.width - PLOT_MARGIN_X,
            plot_area_height: graph_area.height - PLOT_MARGIN_Y,
            body,
        })
    }

    pub fn render(&self) -> Result<()> {
        tracing::trace!(plot_w = self.plot_area_width, plot_h = self.plot_area_height, "render series");
        self.body.render_chart(self)
    }
}

impl<'a, S: SeriesStats, C: ChartCanvas, B> SeriesRenderer<'a, S, C, B> {
    pub fn series(&self) -> &'a S { self.series }

    pub fn canvas(&self) -> &'a C { self.canvas }

    pub fn color(&self) -> Color { self.color }

    pub fn plot_area_width(&self) -> f32 { self.plot_area_width }

    pub fn plot_area_height(&self) -> f32 { self.plot_area_height }

    /// Axis lines, origin marker, y-axis statistic labels and x-axis category labels.
    pub fn render_axes(&self) {
        let axes = self.canvas.theme().axes;
        {
            let mut surface = self.canvas.surface();
            surface.set_stroke_color(axes);
            surface.set_fill_color(axes);
            surface.stroke_horizontal_line(0.0, self.plot_area_width, 0.0);
            surface.stroke_vertical_line(0.0, self.plot_area_height, 0.0);
            surface.fill_and_stroke_ellipse((0.0, 0.0), ORIGIN_MARKER_RADIUS);
        }

        let stats = AxisStats::of(self.series);
        let policy = self.canvas.options().y_axis_label_text;
        for value in stats.in_label_order() {
            let text = match policy {
                YLabelText::SeriesMax => axis::format_value(stats.max),
                YLabelText::Statistic => axis::format_value(value),
            };
            self.add_y_axis_label(value, &text);
        }

        self.add_x_axis_labels();
    }

    /// Category labels tiled left to right in equal, non-overlapping slots.
    pub fn add_x_axis_labels(&self) {
        let labels = &self.canvas.options().xaxis_labels;
        let Some(slot_width) = axis::category_slot_width(self.plot_area_width, labels.len()) else {
            return;
        };
        let mut surface = self.canvas.surface();
        for (i, label) in labels.iter().enumerate() {
            let position = axis::category_slot_position(i + 1, slot_width);
            let options = TextBox::new((position, X_LABEL_Y), slot_width, X_LABEL_HEIGHT)
                .valign(VAlign::Center)
                .align(HAlign::Center)
                .overflow(Overflow::ShrinkToFit);
            surface.text_box(label, &options);
        }
    }

    /// Label `text` at the height of `value`. A value of exactly 0 draws nothing.
    pub fn add_y_axis_label(&self, value: f64, text: &str) {
        if value == 0.0 { return; }
        let y = self.point_height_percentage(value) as f32 * self.plot_area_height;
        let options = TextBox::new((Y_LABEL_X, y), Y_LABEL_WIDTH, Y_LABEL_HEIGHT)
            .valign(VAlign::Bottom)
            .align(HAlign::Right)
            .overflow(Overflow::ShrinkToFit);
        self.canvas.surface().text_box(text, &options);
    }

    /// `value` relative to the largest maximum of any series on the canvas,
    /// rounded to two places; 0 when that cannot be computed.
    pub fn point_height_percentage(&self, value: f64) -> f64 {
        scale::point_height_percentage(value, scale::global_max(self.canvas.series()))
    }
}

fn check_series<S: SeriesStats>(series: &S) -> Result<()> {
    let aggregates = [("min", series.min()), ("max", series.max()), ("avg", series.avg())];
    for (name, value) in aggregates {
        if let Some(v) = value.filter(|v| !v.is_finite()) {
            return Err(ChartError::TypeMismatch(format!("series {name} must be a finite number, got {v}")));
        }
    }
    Ok(())
}
