// File: crates/graph-core/src/axis.rs
// Summary: Axis statistics, y-label text policy and x-axis category slot math.

use crate::series::SeriesStats;

/// Which text a y-axis label shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum YLabelText {
    /// Every label shows the series maximum, whatever statistic it is
    /// positioned at. Matches the long-standing output of this renderer.
    #[default]
    SeriesMax,
    /// Each label shows the statistic it is positioned at.
    Statistic,
}

/// The four statistics labelled on the y-axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisStats {
    pub max: f64,
    pub min: f64,
    pub avg: f64,
    pub mid: f64,
}

impl AxisStats {
    /// Absent aggregates count as 0.
    pub fn of<S: SeriesStats + ?Sized>(series: &S) -> Self {
        let max = series.max().unwrap_or(0.0);
        let min = series.min().unwrap_or(0.0);
        let avg = series.avg().unwrap_or(0.0);
        let mid = (min + max) / 2.0;
        Self { max, min, avg, mid }
    }

    /// Statistics in label emission order.
    pub fn in_label_order(&self) -> [f64; 4] {
        [self.max, self.min, self.avg, self.mid]
    }
}

/// Width of one category slot, or `None` when there are no labels.
///
/// With more labels than points of plot width the slot goes negative
/// (e.g. 300 labels over 275 points gives -1). Boxes then overlap with
/// negative widths; raster surfaces skip them.
pub fn category_slot_width(plot_width: f32, count: usize) -> Option<f32> {
    if count == 0 { return None; }
    Some((plot_width / count as f32).floor() - 1.0)
}

/// Left edge of the slot for the 1-based `offset`.
#[inline]
pub fn category_slot_position(offset: usize, slot_width: f32) -> f32 {
    (offset as f32 * slot_width) - slot_width + 1.0
}

/// Text for a numeric label; integral values print without a fraction.
pub fn format_value(value: f64) -> String {
    format!("{value}")
}
