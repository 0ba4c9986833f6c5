use std::time::{Duration, Instant};

use chart_waterfall::api::{
    BarDataset, ChartOptions, StepLineOptionsOverrides, StepLineStyleOverrides, WaterfallChart,
    WaterfallChartConfig, WaterfallMeta, WaterfallPluginOptions,
};
use chart_waterfall::core::{BarModel, ChartId, Viewport};
use chart_waterfall::extensions::{ChartHost, ChartPlugin, WaterfallPlugin};
use chart_waterfall::render::{Color, NullRenderer};

fn step_datasets() -> Vec<BarDataset> {
    vec![
        BarDataset::new("q1", "a", vec![90.0]),
        BarDataset::new("q2", "b", vec![90.0]),
    ]
}

fn step_models() -> Vec<Option<BarModel>> {
    vec![
        Some(BarModel::new(50.0, 10.0, 40.0, 100.0)),
        Some(BarModel::new(150.0, 10.0, 40.0, 100.0)),
    ]
}

fn build_chart(config: WaterfallChartConfig, start: Instant) -> WaterfallChart<NullRenderer> {
    let mut chart =
        WaterfallChart::with_plugin_at(NullRenderer::default(), config, WaterfallPlugin::new(), start)
            .expect("chart init");
    chart.set_bar_models(step_models()).expect("bar models");
    chart
}

fn step_config(duration_ms: u64) -> WaterfallChartConfig {
    WaterfallChartConfig::new(Viewport::new(400, 200))
        .with_datasets(step_datasets())
        .with_animation_duration_ms(duration_ms)
}

#[test]
fn step_lines_wait_for_animation_duration() {
    let start = Instant::now();
    let mut chart = build_chart(step_config(1_000), start);

    assert!(!chart.plugin_state().is_ready_to_draw_step_lines());
    let frame = chart.build_render_frame().expect("frame");
    assert!(frame.polygons.is_empty());
    assert_eq!(chart.next_timer_deadline(), Some(start + Duration::from_millis(1_000)));

    let rendered = chart
        .tick(start + Duration::from_millis(999))
        .expect("early tick");
    assert!(!rendered);

    let rendered = chart
        .tick(start + Duration::from_millis(1_000))
        .expect("deadline tick");
    assert!(rendered, "readiness must force one redraw");
    assert!(chart.plugin_state().is_ready_to_draw_step_lines());
    assert_eq!(chart.next_timer_deadline(), None);

    let renderer = chart.into_renderer().expect("renderer");
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_polygon_count, 1);
}

#[test]
fn readiness_fires_only_once() {
    let start = Instant::now();
    let mut chart = build_chart(step_config(10), start);

    assert!(chart.tick(start + Duration::from_millis(10)).expect("tick"));
    assert!(!chart.tick(start + Duration::from_millis(20)).expect("tick"));
}

#[test]
fn explicit_animation_complete_skips_timer() {
    let start = Instant::now();
    let mut chart = build_chart(step_config(5_000), start);

    assert!(chart.notify_animation_complete().expect("complete"));
    assert!(chart.plugin_state().is_ready_to_draw_step_lines());
    assert_eq!(chart.next_timer_deadline(), None);
    assert!(!chart.tick(start + Duration::from_secs(10)).expect("tick"));
    assert!(!chart.notify_animation_complete().expect("second complete"));
}

#[test]
fn disabled_step_lines_draw_nothing() {
    let start = Instant::now();
    let plugin_options = WaterfallPluginOptions {
        step_lines: StepLineOptionsOverrides {
            enabled: Some(false),
            ..StepLineOptionsOverrides::default()
        },
    };
    let config = step_config(0).with_waterfall_plugin(plugin_options);
    let mut chart = build_chart(config, start);

    assert!(chart.tick(start).expect("tick"));
    let frame = chart.build_render_frame().expect("frame");
    assert!(frame.polygons.is_empty());
    assert_eq!(frame.rects.len(), 2);
}

#[test]
fn destroyed_chart_ignores_deadline() {
    let start = Instant::now();
    let mut chart = build_chart(step_config(100), start);

    let renderer = chart.destroy().expect("renderer released");
    assert_eq!(renderer.frames_rendered, 0);
    assert!(chart.is_destroyed());

    assert!(!chart.tick(start + Duration::from_millis(100)).expect("tick after destroy"));
    chart.render().expect("render after destroy is a no-op");
    assert!(chart.destroy().is_none());
}

#[test]
fn after_init_normalizes_datasets_and_options() {
    let start = Instant::now();
    let user_options = WaterfallPluginOptions {
        step_lines: StepLineOptionsOverrides {
            enabled: None,
            style: StepLineStyleOverrides {
                start_color: Some(Color::rgb(1.0, 0.0, 0.0)),
                ..StepLineStyleOverrides::default()
            },
        },
    };
    let config = WaterfallChartConfig::new(Viewport::new(400, 200))
        .with_dataset(BarDataset::new("plain", "a", vec![10.0]))
        .with_dataset(BarDataset::dummy("spacer", "b", vec![10.0]))
        .with_waterfall_plugin(user_options);
    let chart = build_chart(config, start);

    let datasets = chart.datasets();
    assert_eq!(datasets[0].waterfall, Some(WaterfallMeta::default()));
    assert_eq!(datasets[1].background_color, Color::TRANSPARENT);

    let merged = chart.options().plugins.water_fall_plugin.step_lines;
    assert_eq!(merged.enabled, Some(true));
    assert_eq!(merged.style.start_color, Some(Color::rgb(1.0, 0.0, 0.0)));
    assert_eq!(merged.style.end_color, Some(Color::rgba(0.0, 0.0, 0.0, 0.0)));
    assert_eq!(merged.style.start_color_stop, Some(0.0));
    assert_eq!(merged.style.end_color_stop, Some(0.6));
    assert!(chart.options().legend.labels.filter.is_some());
    assert!(chart.options().tooltips.filter.is_some());
}

#[test]
fn chart_instances_keep_independent_readiness() {
    let start = Instant::now();
    let mut first = build_chart(step_config(0), start);
    let second = build_chart(step_config(0), start);

    assert_ne!(first.chart_id(), second.chart_id());
    assert!(second.chart_id().get() > first.chart_id().get());
    first.tick(start).expect("tick");
    assert!(first.plugin_state().is_ready_to_draw_step_lines());
    assert!(!second.plugin_state().is_ready_to_draw_step_lines());
}

#[derive(Default)]
struct DetachedHost {
    datasets: Vec<BarDataset>,
    options: ChartOptions,
    redraw_requested: bool,
}

impl ChartHost for DetachedHost {
    fn chart_id(&self) -> ChartId {
        ChartId::next()
    }

    fn datasets(&self) -> &[BarDataset] {
        &self.datasets
    }

    fn datasets_mut(&mut self) -> &mut [BarDataset] {
        &mut self.datasets
    }

    fn bar_model(&self, _dataset_index: usize) -> Option<BarModel> {
        None
    }

    fn options(&self) -> &ChartOptions {
        &self.options
    }

    fn options_mut(&mut self) -> &mut ChartOptions {
        &mut self.options
    }

    fn has_surface(&self) -> bool {
        false
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }
}

#[test]
fn deadline_without_surface_skips_redraw() {
    let start = Instant::now();
    let plugin = WaterfallPlugin::new();
    let mut host = DetachedHost {
        options: ChartOptions::default().with_animation_duration_ms(250),
        ..DetachedHost::default()
    };

    let mut state = plugin.before_init(&host);
    plugin.after_init(&mut state, &mut host, start);
    plugin.on_timer(&mut state, &mut host, start + Duration::from_millis(250));

    assert!(state.is_ready_to_draw_step_lines());
    assert!(!host.redraw_requested);
}
