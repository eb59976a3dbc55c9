// File: crates/graph-core/src/canvas.rs
// Summary: Shared chart canvas: surface, theme, layout, all series, and per-chart options.

use std::cell::{RefCell, RefMut};

use crate::axis::YLabelText;
use crate::charts::{BarChart, LineChart};
use crate::error::Result;
use crate::layout::{Layout, Rect};
use crate::renderer::SeriesRenderer;
use crate::series::{Series, SeriesKind, SeriesStats};
use crate::surface::{DrawSurface, HAlign, Overflow, TextBox, VAlign};
use crate::theme::Theme;

/// What a series renderer reads from the chart it draws onto.
pub trait ChartCanvas {
    type Surface: DrawSurface;
    type Series: SeriesStats;

    /// Mutable access to the document surface. Callers must drop the guard
    /// before borrowing again.
    fn surface(&self) -> RefMut<'_, Self::Surface>;
    fn theme(&self) -> &Theme;
    fn graph_area(&self) -> Rect;
    /// Every series plotted together on this canvas.
    fn series(&self) -> &[Self::Series];
    fn options(&self) -> &ChartOptions;
}

/// Per-chart options.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartOptions {
    pub title: Option<String>,
    /// Category labels for the x-axis, left to right. May be empty.
    pub xaxis_labels: Vec<String>,
    pub y_axis_label_text: YLabelText,
}

impl ChartOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_xaxis_labels<I, L>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.xaxis_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_y_axis_label_text(mut self, text: YLabelText) -> Self {
        self.y_axis_label_text = text;
        self
    }
}

pub struct Canvas<S> {
    surface: RefCell<S>,
    pub theme: Theme,
    pub layout: Layout,
    pub series: Vec<Series>,
    pub options: ChartOptions,
}

impl<S: DrawSurface> Canvas<S> {
    pub fn new(surface: S, layout: Layout, series: Vec<Series>, options: ChartOptions) -> Self {
        Self { surface: RefCell::new(surface), theme: Theme::default(), layout, series, options }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn into_surface(self) -> S {
        self.surface.into_inner()
    }

    /// Draw the title and then every series in order, each with the chart
    /// body its kind selects and its palette color.
    pub fn draw(&self) -> Result<()> {
        self.draw_title();
        for (i, series) in self.series.iter().enumerate() {
            let color = self.theme.series_color(i).to_string();
            tracing::debug!(index = i, title = %series.title, kind = ?series.kind, "drawing series");
            match series.kind {
                SeriesKind::Bar => SeriesRenderer::with_body(series, self, Some(color.as_str()), BarChart)?.render()?,
                SeriesKind::Line => SeriesRenderer::with_body(series, self, Some(color.as_str()), LineChart)?.render()?,
            }
        }
        Ok(())
    }

    fn draw_title(&self) {
        let (Some(title), Some(area)) = (&self.options.title, self.layout.title_area) else {
            return;
        };
        // Surface coordinates are relative to the plot origin.
        let (ox, oy) = self.layout.plot_origin();
        let options = TextBox::new((area.x - ox, area.top() - oy), area.width, area.height)
            .align(HAlign::Center)
            .valign(VAlign::Center)
            .overflow(Overflow::ShrinkToFit);
        let mut surface = self.surface.borrow_mut();
        surface.set_fill_color(self.theme.title);
        surface.text_box(title, &options);
    }
}

impl<S: DrawSurface> ChartCanvas for Canvas<S> {
    type Surface = S;
    type Series = Series;

    fn surface(&self) -> RefMut<'_, S> { self.surface.borrow_mut() }

    fn theme(&self) -> &Theme { &self.theme }

    fn graph_area(&self) -> Rect { self.layout.graph_area() }

    fn series(&self) -> &[Series] { &self.series }

    fn options(&self) -> &ChartOptions { &self.options }
}
