// File: crates/graph-core/benches/axes_bench.rs
// Summary: Axis and label rendering cost against a recording surface, by category count.

use anyhow::Result;
use graph_core::{BarChart, Canvas, ChartCanvas, ChartOptions, Layout, RecordingSurface, Series, SeriesRenderer};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_canvas(n: usize) -> Canvas<RecordingSurface> {
    let values = (0..n).map(|i| (i as f64 * 0.01).sin() * 10.0 + 12.0).collect::<Vec<_>>();
    let labels = (0..n).map(|i| format!("c{i}")).collect::<Vec<_>>();
    let options = ChartOptions::default().with_xaxis_labels(labels);
    Canvas::new(RecordingSurface::new(), Layout::new(800.0, 400.0, false), vec![Series::new("bench", values)], options)
}

fn bench_axes(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_axes");
    for &n in &[10usize, 1_000usize] {
        group.bench_function(format!("bars_{n}"), |b| {
            let canvas = build_canvas(n);
            b.iter(|| -> Result<()> {
                SeriesRenderer::with_body(&canvas.series[0], &canvas, None, BarChart)?.render()?;
                let mut surface = canvas.surface();
                black_box(surface.commands.len());
                surface.clear();
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_axes);
criterion_main!(benches);
