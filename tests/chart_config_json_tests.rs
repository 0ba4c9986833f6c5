use chart_waterfall::ChartError;
use chart_waterfall::api::{
    BarDataset, CHART_CONFIG_JSON_SCHEMA_V1, StepLineOptionsOverrides, WaterfallChartConfig,
    WaterfallPluginOptions,
};
use chart_waterfall::core::Viewport;
use chart_waterfall::render::Color;

const HOST_CONFIG: &str = r##"{
    "viewport": { "width": 640, "height": 360 },
    "datasets": [
        { "label": "Start", "stack": "s0", "data": [120], "backgroundColor": "#1f77b4" },
        {
            "label": "Spacer",
            "stack": "s1",
            "data": [80],
            "waterfall": { "dummyStack": true }
        },
        {
            "label": "Drop",
            "stack": "s1",
            "data": [-40],
            "backgroundColor": "rgb(214, 39, 40)",
            "waterfall": { "stepLines": { "endColorStop": 0.9 } }
        }
    ],
    "options": {
        "animation": { "duration": 400 },
        "plugins": {
            "waterFallPlugin": { "stepLines": { "startColor": "rgba(0, 0, 0, 0.3)" } }
        }
    }
}"##;

#[test]
fn parses_host_shaped_config() {
    let config = WaterfallChartConfig::from_json_compat_str(HOST_CONFIG).expect("config");

    assert_eq!(config.viewport, Viewport::new(640, 360));
    assert_eq!(config.datasets.len(), 3);
    assert_eq!(config.datasets[0].background_color, Color::from_rgba8(31, 119, 180, 1.0));
    assert_eq!(config.datasets[1].background_color, Color::rgba(0.0, 0.0, 0.0, 0.1));
    assert!(config.datasets[1].is_dummy_stack());
    assert_eq!(
        config.datasets[2].step_line_overrides().end_color_stop,
        Some(0.9)
    );
    assert_eq!(config.options.animation.duration, 400);
    assert_eq!(
        config.options.plugins.water_fall_plugin.step_lines.style.start_color,
        Some(Color::rgba(0.0, 0.0, 0.0, 0.3))
    );
}

#[test]
fn missing_options_take_defaults() {
    let config = WaterfallChartConfig::from_json_compat_str(
        r#"{ "viewport": { "width": 10, "height": 10 } }"#,
    )
    .expect("config");

    assert!(config.datasets.is_empty());
    assert_eq!(config.options.animation.duration, 1_000);
    assert_eq!(
        config.options.plugins.water_fall_plugin,
        WaterfallPluginOptions::default()
    );
}

#[test]
fn contract_v1_payload_is_accepted() {
    let config = WaterfallChartConfig::new(Viewport::new(300, 200))
        .with_dataset(BarDataset::new("a", "s0", vec![5.0]))
        .with_waterfall_plugin(WaterfallPluginOptions {
            step_lines: StepLineOptionsOverrides {
                enabled: Some(false),
                ..StepLineOptionsOverrides::default()
            },
        });

    let json = config.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains(&format!("\"schema_version\": {CHART_CONFIG_JSON_SCHEMA_V1}")));
    assert!(json.contains("\"waterFallPlugin\""));

    let parsed = WaterfallChartConfig::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed.datasets, config.datasets);
    assert_eq!(
        parsed.options.plugins.water_fall_plugin.step_lines.enabled,
        Some(false)
    );
}

#[test]
fn unknown_schema_version_is_rejected() {
    let raw = r#"{
        "schema_version": 7,
        "config": { "viewport": { "width": 10, "height": 10 } }
    }"#;
    let err = WaterfallChartConfig::from_json_compat_str(raw).expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidConfig(message) if message.contains('7')));
}

#[test]
fn zero_viewport_fails_validation() {
    let err = WaterfallChartConfig::from_json_compat_str(
        r#"{ "viewport": { "width": 0, "height": 10 } }"#,
    )
    .expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidViewport { width: 0, height: 10 }));
}

#[test]
fn malformed_json_reports_config_error() {
    let err = WaterfallChartConfig::from_json_compat_str("{ not json").expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}
