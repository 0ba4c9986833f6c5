//! Quarterly cash-flow waterfall shared by the demos.
//!
//! Each category is its own stack: an invisible dummy spacer lifts the delta
//! bar to the running total. Bar geometry is laid out with a plain linear
//! value axis, the way a host chart would after its layout pass.

use chart_waterfall::api::{BarDataset, StepLineStyleOverrides, WaterfallChartConfig, WaterfallMeta};
use chart_waterfall::core::{BarModel, Viewport};
use chart_waterfall::render::Color;

const PLOT_PADDING: f64 = 40.0;
const MAX_VALUE: f64 = 200.0;

/// `(label, spacer, delta)` per category; a zero spacer means a total bar.
const STEPS: [(&str, f64, f64); 5] = [
    ("Opening", 0.0, 120.0),
    ("Sales", 120.0, 30.0),
    ("Payroll", 100.0, 50.0),
    ("Tax", 80.0, 20.0),
    ("Closing", 0.0, 80.0),
];

pub fn sample_config(viewport: Viewport) -> WaterfallChartConfig {
    let mut config = WaterfallChartConfig::new(viewport).with_animation_duration_ms(600);
    for (index, (label, spacer, delta)) in STEPS.iter().enumerate() {
        let stack = format!("step-{index}");
        config = config.with_dataset(BarDataset::dummy(format!("{label} spacer"), stack.clone(), vec![*spacer]));

        let mut bar = BarDataset::new(*label, stack, vec![*delta])
            .with_background_color(Color::from_rgba8(31, 119, 180, 0.85));
        if *label == "Payroll" {
            bar = bar
                .with_background_color(Color::from_rgba8(214, 39, 40, 0.85))
                .with_waterfall(WaterfallMeta::default().with_step_lines(StepLineStyleOverrides {
                    start_color: Some(Color::from_rgba8(214, 39, 40, 0.45)),
                    ..StepLineStyleOverrides::default()
                }));
        }
        config = config.with_dataset(bar);
    }
    config
}

pub fn sample_bar_models(viewport: Viewport) -> Vec<Option<BarModel>> {
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let plot_bottom = height - PLOT_PADDING;
    let px_per_unit = (height - 2.0 * PLOT_PADDING) / MAX_VALUE;
    let slot = (width - 2.0 * PLOT_PADDING) / STEPS.len() as f64;
    let bar_width = slot * 0.6;
    let y = |value: f64| plot_bottom - value * px_per_unit;

    let mut models = Vec::with_capacity(STEPS.len() * 2);
    for (index, (_, spacer, delta)) in STEPS.iter().enumerate() {
        let x = PLOT_PADDING + slot * (index as f64 + 0.5);
        models.push(Some(BarModel::new(x, y(*spacer), bar_width, y(0.0))));
        models.push(Some(BarModel::new(x, y(spacer + delta), bar_width, y(*spacer))));
    }
    models
}
