#[path = "shared/sample_waterfall.rs"]
mod sample_waterfall;

use chart_waterfall::api::WaterfallChart;
use chart_waterfall::core::Viewport;
use chart_waterfall::extensions::WaterfallPlugin;
use chart_waterfall::render::CairoRenderer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = chart_waterfall::telemetry::init_default_tracing();

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "waterfall.png".to_owned());
    let debug_annotations = std::env::args().any(|arg| arg == "--debug");

    let viewport = Viewport::new(900, 480);
    let renderer = CairoRenderer::new(900, 480)?;
    let plugin = WaterfallPlugin::new().with_debug_annotations(debug_annotations);
    let mut chart =
        WaterfallChart::with_plugin(renderer, sample_waterfall::sample_config(viewport), plugin)?;
    chart.set_bar_models(sample_waterfall::sample_bar_models(viewport))?;
    chart.notify_animation_complete()?;

    let Some(renderer) = chart.into_renderer() else {
        return Err("chart released its renderer".into());
    };
    renderer.write_png(&output)?;
    let stats = renderer.last_stats();
    println!(
        "wrote {output}: rects={} connectors={} labels={}",
        stats.rects_drawn, stats.polygons_drawn, stats.texts_drawn
    );
    Ok(())
}
