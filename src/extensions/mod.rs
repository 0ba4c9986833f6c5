//! Plugin seam and the waterfall step-line plugin.

pub mod deferred;
pub mod plugins;
pub mod step_lines;
pub mod waterfall_plugin;

pub use deferred::{DeferredReadiness, DeferredStatus};
pub use plugins::{ChartHost, ChartPlugin};
pub use step_lines::{
    StackGroup, StackSnapshot, StepConnector, build_connector, collect_stack_groups,
    compute_step_lines, draw_step_lines, group_by_stack, is_adjacent,
};
pub use waterfall_plugin::{
    WATERFALL_PLUGIN_ID, WaterfallContext, WaterfallPlugin, exclude_dummy_stacks,
    initialize_datasets,
};
