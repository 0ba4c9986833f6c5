#[cfg(feature = "gtk4-adapter")]
#[path = "shared/sample_waterfall.rs"]
mod sample_waterfall;

#[cfg(feature = "gtk4-adapter")]
fn main() {
    use gtk4 as gtk;
    use gtk4::prelude::*;

    use chart_waterfall::api::WaterfallChart;
    use chart_waterfall::core::Viewport;
    use chart_waterfall::platform_gtk::GtkWaterfallAdapter;
    use chart_waterfall::render::CairoRenderer;

    let _ = chart_waterfall::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.chart.waterfall.demo")
        .build();

    app.connect_activate(|app| {
        let viewport = Viewport::new(900, 480);
        let renderer = match CairoRenderer::new(900, 480) {
            Ok(v) => v,
            Err(err) => {
                eprintln!("failed to create renderer: {err}");
                return;
            }
        };
        let mut chart =
            match WaterfallChart::new(renderer, sample_waterfall::sample_config(viewport)) {
                Ok(v) => v,
                Err(err) => {
                    eprintln!("failed to initialize chart: {err}");
                    return;
                }
            };
        if let Err(err) = chart.set_bar_models(sample_waterfall::sample_bar_models(viewport)) {
            eprintln!("failed to lay out bars: {err}");
            return;
        }

        let adapter = GtkWaterfallAdapter::new(chart);
        let window = gtk::ApplicationWindow::builder()
            .application(app)
            .title("chart-waterfall | cash flow")
            .default_width(900)
            .default_height(480)
            .build();
        window.set_child(Some(adapter.widget()));
        window.present();
    });

    let _ = app.run();
}

#[cfg(not(feature = "gtk4-adapter"))]
fn main() {
    println!("run with: cargo run --features desktop --example gtk_waterfall");
}
