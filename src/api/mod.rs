//! Host-facing chart facade, options and dataset model.

mod chart;
mod chart_config;
mod chart_instance;
mod chart_options;
mod dataset;
mod json_contract;
mod legend;
mod lifecycle;
mod step_line_options;

pub use chart::WaterfallChart;
pub use chart_config::WaterfallChartConfig;
pub use chart_instance::ChartInstance;
pub use chart_options::{
    AnimationOptions, ChartOptions, DatasetItemFilter, LegendLabelOptions, LegendOptions,
    PluginOptions, TooltipOptions,
};
pub use dataset::{BarDataset, WaterfallMeta};
pub use json_contract::{CHART_CONFIG_JSON_SCHEMA_V1, WaterfallChartConfigJsonContractV1};
pub use legend::{LegendItem, TooltipItem};
pub use step_line_options::{
    DEFAULT_END_COLOR, DEFAULT_END_COLOR_STOP, DEFAULT_START_COLOR, DEFAULT_START_COLOR_STOP,
    StepLineOptions, StepLineOptionsOverrides, StepLineStyle, StepLineStyleOverrides,
    WaterfallPluginOptions,
};
