use bar_chart_rs::api::{BarChartConfig, BarChartView, build_bar_chart_scene};
use bar_chart_rs::core::{Point, Rect, resolve_effective_max};
use bar_chart_rs::render::NullRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn sample_data(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            50.0 + (t * 0.37).sin() * 40.0
        })
        .collect()
}

fn bench_effective_max_10k(c: &mut Criterion) {
    let data = sample_data(10_000);

    c.bench_function("effective_max_10k", |b| {
        b.iter(|| resolve_effective_max(black_box(&data), true, 0.0))
    });
}

fn bench_scene_build_10k(c: &mut Criterion) {
    let labels = (0..10_000).map(|i| format!("{i}")).collect();
    let config = BarChartConfig::default()
        .with_data(sample_data(10_000))
        .with_x_labels(labels)
        .with_bar_spacing(0.0);
    let area = Rect::from_size(100_000.0, 1080.0);

    c.bench_function("scene_build_10k", |b| {
        b.iter(|| {
            let _ = build_bar_chart_scene(black_box(&config), area, Point::default())
                .expect("scene build");
        })
    });
}

fn bench_view_render_1k(c: &mut Criterion) {
    let config = BarChartConfig::default().with_data(sample_data(1_000));
    let mut view = BarChartView::new(NullRenderer::default(), config, Rect::from_size(1920.0, 1080.0))
        .expect("view init");

    c.bench_function("view_render_1k", |b| {
        b.iter(|| {
            view.set_auto_max(true);
            view.render_if_invalidated().expect("render");
        })
    });
}

criterion_group!(
    benches,
    bench_effective_max_10k,
    bench_scene_build_10k,
    bench_view_render_1k
);
criterion_main!(benches);
