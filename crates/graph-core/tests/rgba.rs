// File: crates/graph-core/tests/rgba.rs
// Purpose: Validate RGBA read-back shape and that the x-axis lands on the expected pixel row.

use graph_core::{Canvas, ChartOptions, Layout, Series, SeriesKind, SkiaSurface, Theme};

#[test]
fn axis_pixels_use_theme_axis_color() {
    let layout = Layout::new(300.0, 150.0, false);
    let theme = Theme::light();
    let surface = SkiaSurface::for_layout(&layout, 2.0, theme.background).expect("raster surface");
    // Line charts draw axes last, so nothing covers them.
    let series = vec![Series::new("s", vec![1.0, 3.0, 2.0]).with_kind(SeriesKind::Line)];
    let canvas = Canvas::new(surface, layout, series, ChartOptions::default()).with_theme(theme.clone());
    canvas.draw().expect("draw");

    let (px, w, h, stride) = canvas.into_surface().to_rgba8().expect("rgba read-back");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Background in the top-left corner.
    assert_eq!(&px[..4], &[theme.background.r, theme.background.g, theme.background.b, 255]);

    // Plot origin sits at (20, 15) points from the bottom-left; at 2px/pt the
    // 2px axis stroke covers rows 269 and 270. Sample 100pt along the axis.
    let (x, y) = (240usize, 270usize);
    let i = y * stride + x * 4;
    let axes = theme.axes;
    assert_eq!(&px[i..i + 4], &[axes.r, axes.g, axes.b, 255]);
}
