// File: crates/graph-core/src/types.rs
// Summary: Shared constants (document size, margins, label boxes) in document points.

/// Default document width in points.
pub const WIDTH: f32 = 500.0;
/// Default document height in points.
pub const HEIGHT: f32 = 200.0;

/// Horizontal space the plot area gives up for y-axis labels.
pub const PLOT_MARGIN_X: f32 = 25.0;
/// Vertical space the plot area gives up for x-axis labels.
pub const PLOT_MARGIN_Y: f32 = 20.0;

/// Offset of the plot origin from the graph area's bottom-left corner.
/// Leaves room for the y labels (left) and x labels (below).
pub const PLOT_OFFSET_X: f32 = 15.0;
pub const PLOT_OFFSET_Y: f32 = 10.0;

/// Radius of the marker drawn where the axes meet.
pub const ORIGIN_MARKER_RADIUS: f32 = 1.0;

/// Y-axis label box, placed left of the axis.
pub const Y_LABEL_X: f32 = -14.0;
pub const Y_LABEL_WIDTH: f32 = 12.0;
pub const Y_LABEL_HEIGHT: f32 = 5.0;

/// X-axis label band, just below the axis.
pub const X_LABEL_Y: f32 = -2.0;
pub const X_LABEL_HEIGHT: f32 = 6.0;

/// Nominal font size before shrink-to-fit, in points.
pub const FONT_SIZE: f32 = 12.0;

/// Series color used when the caller does not choose one.
pub const DEFAULT_SERIES_COLOR: &str = "000000";
