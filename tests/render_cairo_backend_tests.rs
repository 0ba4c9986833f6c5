#![cfg(feature = "cairo-backend")]

use std::time::Instant;

use cairo::{Context, Format, ImageSurface};
use chart_waterfall::ChartError;
use chart_waterfall::api::{BarDataset, WaterfallChart, WaterfallChartConfig};
use chart_waterfall::core::{BarModel, Viewport};
use chart_waterfall::extensions::WaterfallPlugin;
use chart_waterfall::render::{CairoRenderer, Color};

fn ready_cairo_chart(renderer: CairoRenderer, plugin: WaterfallPlugin) -> WaterfallChart<CairoRenderer> {
    let start = Instant::now();
    let config = WaterfallChartConfig::new(Viewport::new(320, 200))
        .with_dataset(BarDataset::new("open", "s0", vec![80.0]))
        .with_dataset(BarDataset::dummy("spacer", "s1", vec![50.0]))
        .with_dataset(BarDataset::new("loss", "s1", vec![30.0]))
        .with_animation_duration_ms(0);
    let mut chart =
        WaterfallChart::with_plugin_at(renderer, config, plugin, start).expect("chart init");
    chart
        .set_bar_models(vec![
            Some(BarModel::new(60.0, 40.0, 50.0, 160.0)),
            Some(BarModel::new(160.0, 100.0, 50.0, 160.0)),
            Some(BarModel::new(160.0, 40.0, 50.0, 100.0)),
        ])
        .expect("bar models");
    chart
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_bars_and_gradient_connector() {
    let renderer = CairoRenderer::new(320, 200).expect("renderer");
    let mut chart = ready_cairo_chart(renderer, WaterfallPlugin::new());

    assert!(chart.tick(Instant::now()).expect("tick"));
    let renderer = chart.into_renderer().expect("renderer");
    let stats = renderer.last_stats();

    assert_eq!(stats.rects_drawn, 2);
    assert_eq!(stats.polygons_drawn, 1);
    assert_eq!(stats.gradients_built, 1);
    assert_eq!(stats.texts_drawn, 0);
}

#[test]
fn cairo_renderer_draws_debug_labels() {
    let renderer = CairoRenderer::new(320, 200).expect("renderer");
    let mut chart = ready_cairo_chart(renderer, WaterfallPlugin::new().with_debug_annotations(true));

    assert!(chart.tick(Instant::now()).expect("tick"));
    let stats = chart.into_renderer().expect("renderer").last_stats();
    assert_eq!(stats.texts_drawn, 4);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(320, 200).expect("renderer");
    let mut chart = ready_cairo_chart(renderer, WaterfallPlugin::new());
    chart.notify_animation_complete().expect("complete");

    let surface = ImageSurface::create(Format::ARgb32, 320, 200).expect("surface");
    let context = Context::new(&surface).expect("context");
    chart
        .render_on_cairo_context(&context)
        .expect("render on external context");

    let renderer = chart.into_renderer().expect("renderer");
    assert_eq!(renderer.last_stats().polygons_drawn, 1);
}

#[test]
fn cairo_renderer_rejects_invalid_clear_color() {
    let mut renderer = CairoRenderer::new(10, 10).expect("renderer");
    assert!(renderer.set_clear_color(Color::rgba(0.0, 0.0, 0.0, 2.0)).is_err());
    renderer
        .set_clear_color(Color::TRANSPARENT)
        .expect("transparent clear color");
}

#[test]
fn cairo_renderer_writes_png() {
    let renderer = CairoRenderer::new(320, 200).expect("renderer");
    let mut chart = ready_cairo_chart(renderer, WaterfallPlugin::new());
    chart.notify_animation_complete().expect("complete");

    let path = std::env::temp_dir().join(format!("chart-waterfall-{}.png", chart.chart_id().get()));
    let renderer = chart.into_renderer().expect("renderer");
    renderer.write_png(&path).expect("write png");

    let bytes = std::fs::read(&path).expect("read png");
    assert!(bytes.starts_with(b"\x89PNG"));
    let _ = std::fs::remove_file(&path);
}
