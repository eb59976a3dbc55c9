// File: crates/graph-core/src/lib.rs
// Summary: Core library entry point; exports the series renderer, canvas model and drawing surfaces.

pub mod axis;
pub mod canvas;
pub mod charts;
pub mod error;
pub mod layout;
pub mod raster;
pub mod renderer;
pub mod scale;
pub mod series;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::{AxisStats, YLabelText};
pub use canvas::{Canvas, ChartCanvas, ChartOptions};
pub use charts::{BarChart, LineChart};
pub use error::{ChartError, Result};
pub use layout::{Layout, Rect};
pub use raster::SkiaSurface;
pub use renderer::{AbstractChart, ChartBody, SeriesRenderer};
pub use series::{Series, SeriesKind, SeriesMarks, SeriesStats};
pub use surface::{DrawCommand, DrawSurface, RecordingSurface, TextBox};
pub use text::TextShaper;
pub use theme::{Color, Theme};
