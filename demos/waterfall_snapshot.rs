#[path = "shared/sample_waterfall.rs"]
mod sample_waterfall;

use chart_waterfall::api::WaterfallChart;
use chart_waterfall::core::Viewport;
use chart_waterfall::render::NullRenderer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = chart_waterfall::telemetry::init_default_tracing();

    let viewport = Viewport::new(900, 480);
    let mut chart = WaterfallChart::new(NullRenderer::default(), sample_waterfall::sample_config(viewport))?;
    chart.set_bar_models(sample_waterfall::sample_bar_models(viewport))?;

    let before = chart.build_render_frame()?;
    println!(
        "before animation completes: rects={} connectors={}",
        before.rects.len(),
        before.polygons.len()
    );

    chart.notify_animation_complete()?;
    let after = chart.build_render_frame()?;
    println!(
        "after animation completes: rects={} connectors={}",
        after.rects.len(),
        after.polygons.len()
    );
    for polygon in &after.polygons {
        println!("  connector {:?}", polygon.points.as_slice());
    }

    let legend: Vec<String> = chart.legend_items().into_iter().map(|item| item.text).collect();
    println!("legend: {}", legend.join(", "));

    Ok(())
}
