// File: crates/graph-core/tests/axes.rs
// Purpose: Axis lines, y-axis statistic labels and x-axis category tiling, checked on recorded commands.

use graph_core::surface::{HAlign, Overflow, VAlign};
use graph_core::{
    Canvas, ChartOptions, DrawCommand, Layout, Rect, RecordingSurface, Series, SeriesRenderer, Theme, YLabelText,
};

fn canvas(series: Vec<Series>, options: ChartOptions) -> Canvas<RecordingSurface> {
    Canvas::new(RecordingSurface::new(), Layout::with_graph_area(Rect::from_size(300.0, 150.0)), series, options)
}

fn y_labels(surface: &RecordingSurface) -> Vec<(String, f32)> {
    surface
        .text_boxes()
        .filter(|(_, b)| b.align == HAlign::Right)
        .map(|(t, b)| (t.to_string(), b.at.1))
        .collect()
}

fn x_labels(surface: &RecordingSurface) -> Vec<(String, f32, f32)> {
    surface
        .text_boxes()
        .filter(|(_, b)| b.align == HAlign::Center)
        .map(|(t, b)| (t.to_string(), b.at.0, b.width))
        .collect()
}

#[test]
fn axes_lines_and_origin_marker() {
    let c = canvas(vec![Series::new("s", vec![2.0, 4.0])], ChartOptions::default());
    SeriesRenderer::new(&c.series[0], &c, None).unwrap().render_axes();
    let axes = Theme::default().axes;
    let cmds = c.into_surface().commands;

    assert_eq!(
        &cmds[..5],
        &[
            DrawCommand::StrokeColor(axes),
            DrawCommand::FillColor(axes),
            DrawCommand::HorizontalLine { x1: 0.0, x2: 275.0, at: 0.0 },
            DrawCommand::VerticalLine { y1: 0.0, y2: 130.0, at: 0.0 },
            DrawCommand::FillAndStrokeEllipse { center: (0.0, 0.0), radius: 1.0 },
        ]
    );
}

#[test]
fn zero_statistics_emit_no_label() {
    // max 10, min 0 (skipped), avg 5, mid 5
    let c = canvas(vec![Series::new("s", vec![0.0, 5.0, 10.0])], ChartOptions::default());
    SeriesRenderer::new(&c.series[0], &c, None).unwrap().render_axes();
    let labels = y_labels(&c.into_surface());

    assert_eq!(labels.len(), 3);
    assert_eq!(labels[0].1, 130.0);
    assert_eq!(labels[1].1, 65.0);
    assert_eq!(labels[2].1, 65.0);
}

#[test]
fn default_label_text_is_series_max() {
    let c = canvas(vec![Series::new("s", vec![0.0, 5.0, 10.0])], ChartOptions::default());
    SeriesRenderer::new(&c.series[0], &c, None).unwrap().render_axes();
    let texts: Vec<String> = y_labels(&c.into_surface()).into_iter().map(|(t, _)| t).collect();
    assert_eq!(texts, ["10", "10", "10"]);
}

#[test]
fn statistic_label_text_shows_each_value() {
    let opts = ChartOptions::default().with_y_axis_label_text(YLabelText::Statistic);
    let c = canvas(vec![Series::new("s", vec![2.0, 4.0, 9.0])], opts);
    SeriesRenderer::new(&c.series[0], &c, None).unwrap().render_axes();
    let texts: Vec<String> = y_labels(&c.into_surface()).into_iter().map(|(t, _)| t).collect();
    // max, min, avg, mid
    assert_eq!(texts, ["9", "2", "5", "5.5"]);
}

#[test]
fn empty_series_emits_no_y_labels() {
    let c = canvas(vec![Series::new("empty", Vec::new())], ChartOptions::default());
    SeriesRenderer::new(&c.series[0], &c, None).unwrap().render_axes();
    assert!(y_labels(&c.into_surface()).is_empty());
}

#[test]
fn y_label_box_geometry() {
    let c = canvas(vec![Series::new("s", vec![4.0])], ChartOptions::default());
    let r = SeriesRenderer::new(&c.series[0], &c, None).unwrap();
    r.add_y_axis_label(2.0, "half");
    r.add_y_axis_label(0.0, "never");
    let surface = c.into_surface();
    let boxes: Vec<_> = surface.text_boxes().collect();

    assert_eq!(boxes.len(), 1);
    let (text, b) = boxes[0];
    assert_eq!(text, "half");
    assert_eq!(b.at, (-14.0, 65.0));
    assert_eq!((b.width, b.height), (12.0, 5.0));
    assert_eq!((b.align, b.valign, b.overflow), (HAlign::Right, VAlign::Bottom, Overflow::ShrinkToFit));
}

#[test]
fn x_labels_tile_without_overlap() {
    let opts = ChartOptions::default().with_xaxis_labels(["Mon", "Tue", "Wed", "Thu", "Fri"]);
    let c = canvas(vec![Series::new("s", vec![1.0; 5])], opts);
    SeriesRenderer::new(&c.series[0], &c, None).unwrap().add_x_axis_labels();
    let labels = x_labels(&c.into_surface());

    let positions: Vec<f32> = labels.iter().map(|l| l.1).collect();
    assert_eq!(positions, [1.0, 55.0, 109.0, 163.0, 217.0]);
    assert!(labels.iter().all(|l| l.2 == 54.0));
    assert_eq!(labels[2].0, "Wed");
    for pair in labels.windows(2) {
        assert!(pair[0].1 + pair[0].2 <= pair[1].1, "slots overlap: {pair:?}");
    }
}

#[test]
fn x_label_box_geometry() {
    let opts = ChartOptions::default().with_xaxis_labels(["only"]);
    let c = canvas(vec![Series::new("s", vec![1.0])], opts);
    SeriesRenderer::new(&c.series[0], &c, None).unwrap().add_x_axis_labels();
    let surface = c.into_surface();
    let (_, b) = surface.text_boxes().next().expect("one label");

    // floor(275 / 1) - 1
    assert_eq!(b.width, 274.0);
    assert_eq!(b.at, (1.0, -2.0));
    assert_eq!(b.height, 6.0);
    assert_eq!((b.align, b.valign, b.overflow), (HAlign::Center, VAlign::Center, Overflow::ShrinkToFit));
}

#[test]
fn more_labels_than_plot_width_gives_negative_slots() {
    let labels = (0..300).map(|i| format!("l{i}")).collect::<Vec<_>>();
    let opts = ChartOptions::default().with_xaxis_labels(labels);
    let c = canvas(vec![Series::new("s", vec![1.0])], opts);
    SeriesRenderer::new(&c.series[0], &c, None).unwrap().add_x_axis_labels();
    let labels = x_labels(&c.into_surface());

    // floor(275 / 300) - 1
    assert_eq!(labels.len(), 300);
    assert!(labels.iter().all(|l| l.2 == -1.0));
    let positions: Vec<f32> = labels.iter().take(3).map(|l| l.1).collect();
    assert_eq!(positions, [1.0, 0.0, -1.0]);
}

#[test]
fn no_x_labels_when_none_configured() {
    for width in [50.0, 300.0, 2000.0] {
        let c = Canvas::new(
            RecordingSurface::new(),
            Layout::with_graph_area(Rect::from_size(width, 150.0)),
            vec![Series::new("s", vec![1.0])],
            ChartOptions::default(),
        );
        SeriesRenderer::new(&c.series[0], &c, None).unwrap().add_x_axis_labels();
        assert!(c.into_surface().commands.is_empty());
    }
}

#[test]
fn labels_use_global_max_across_canvas() {
    // Bound series peaks at 5 but the canvas maximum is 10.
    let c = canvas(
        vec![Series::new("small", vec![5.0]), Series::new("big", vec![10.0])],
        ChartOptions::default(),
    );
    SeriesRenderer::new(&c.series[0], &c, None).unwrap().render_axes();
    let labels = y_labels(&c.into_surface());
    assert!(labels.iter().all(|(_, y)| *y == 65.0), "{labels:?}");
}
