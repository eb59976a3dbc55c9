// File: crates/graph-core/src/layout.rs
// Summary: Document rectangle math: outer padding, optional title band, and the graph area.

use crate::types::{PLOT_OFFSET_X, PLOT_OFFSET_Y};

/// Axis-aligned rectangle in document points. `(x, y)` is the bottom-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }
    pub fn top(&self) -> f32 { self.y + self.height }
    pub fn right(&self) -> f32 { self.x + self.width }
}

/// Splits a document into an optional title band and the graph area below it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub bounds: Rect,
    pub title_area: Option<Rect>,
    pub graph_area: Rect,
}

impl Layout {
    pub const PADDING: f32 = 5.0;
    pub const TITLE_HEIGHT: f32 = 20.0;

    pub fn new(width: f32, height: f32, title: bool) -> Self {
        let bounds = Rect::from_size(width, height);
        let inner_w = (width - 2.0 * Self::PADDING).max(0.0);
        let inner_h = (height - 2.0 * Self::PADDING).max(0.0);

        let title_h = if title { Self::TITLE_HEIGHT.min(inner_h) } else { 0.0 };
        let title_area = title.then(|| {
            Rect::new(Self::PADDING, height - Self::PADDING - title_h, inner_w, title_h)
        });
        let graph_area = Rect::new(Self::PADDING, Self::PADDING, inner_w, inner_h - title_h);

        Self { bounds, title_area, graph_area }
    }

    /// Layout whose graph area is exactly `graph_area`, with no title band.
    pub fn with_graph_area(graph_area: Rect) -> Self {
        let bounds = Rect::new(0.0, 0.0, graph_area.right(), graph_area.top());
        Self { bounds, title_area: None, graph_area }
    }

    pub fn graph_area(&self) -> Rect { self.graph_area }

    /// Document position of the plot origin (where the axes meet).
    pub fn plot_origin(&self) -> (f32, f32) {
        (self.graph_area.x + PLOT_OFFSET_X, self.graph_area.y + PLOT_OFFSET_Y)
    }
}
