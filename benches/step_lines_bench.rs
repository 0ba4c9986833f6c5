use chart_waterfall::api::{BarDataset, StepLineOptions, WaterfallChart, WaterfallChartConfig};
use chart_waterfall::core::{BarModel, Viewport};
use chart_waterfall::extensions::compute_step_lines;
use chart_waterfall::render::NullRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// `stacks` categories, each a dummy spacer plus one delta bar, with every
/// neighbour sharing a flat top so all pairs get a connector.
fn staircase(stacks: usize) -> (Vec<BarDataset>, Vec<Option<BarModel>>) {
    let mut datasets = Vec::with_capacity(stacks * 2);
    let mut models = Vec::with_capacity(stacks * 2);
    for i in 0..stacks {
        let stack = format!("s{i}");
        let x = 10.0 + i as f64 * 12.0;
        datasets.push(BarDataset::dummy("spacer", stack.clone(), vec![10.0]));
        datasets.push(BarDataset::new("delta", stack, vec![5.0]));
        models.push(Some(BarModel::new(x, 400.0, 8.0, 500.0)));
        models.push(Some(BarModel::new(x, 300.0, 8.0, 400.0)));
    }
    (datasets, models)
}

fn bench_compute_step_lines_1k(c: &mut Criterion) {
    let (datasets, models) = staircase(1_000);
    let options = StepLineOptions::default();

    c.bench_function("compute_step_lines_1k", |b| {
        b.iter(|| {
            let connectors = compute_step_lines(
                black_box(&datasets),
                |index| models[index],
                black_box(&options),
            );
            black_box(connectors.len());
        })
    });
}

fn bench_render_frame_200(c: &mut Criterion) {
    let (datasets, models) = staircase(200);
    let config = WaterfallChartConfig::new(Viewport::new(2400, 600))
        .with_datasets(datasets)
        .with_animation_duration_ms(0);
    let mut chart = WaterfallChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_bar_models(models).expect("bar models");
    chart.notify_animation_complete().expect("ready");

    c.bench_function("render_frame_with_step_lines_200", |b| {
        b.iter(|| {
            let frame = chart.build_render_frame().expect("frame");
            black_box(frame.polygons.len());
        })
    });
}

criterion_group!(benches, bench_compute_step_lines_1k, bench_render_frame_200);
criterion_main!(benches);
