use std::time::Instant;

use tracing::{debug, info};

use crate::api::{BarDataset, StepLineOptions, WaterfallMeta};
use crate::core::ChartId;
use crate::render::{Color, RenderFrame};

use super::step_lines::draw_step_lines;
use super::{ChartHost, ChartPlugin, DeferredReadiness};

pub const WATERFALL_PLUGIN_ID: &str = "waterFallPlugin";

/// Per-chart state of the waterfall plugin, owned by the chart wrapper.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterfallContext {
    chart_id: ChartId,
    ready_to_draw_step_lines: bool,
    readiness: Option<DeferredReadiness>,
}

impl WaterfallContext {
    #[must_use]
    pub fn new(chart_id: ChartId) -> Self {
        Self {
            chart_id,
            ready_to_draw_step_lines: false,
            readiness: None,
        }
    }

    #[must_use]
    pub fn chart_id(&self) -> ChartId {
        self.chart_id
    }

    #[must_use]
    pub fn is_ready_to_draw_step_lines(&self) -> bool {
        self.ready_to_draw_step_lines
    }

    #[must_use]
    pub fn readiness(&self) -> Option<&DeferredReadiness> {
        self.readiness.as_ref()
    }
}

/// Lifecycle adapter drawing step lines on waterfall charts.
///
/// Holds only chart-independent configuration; see [`WaterfallContext`] for
/// the per-chart part.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WaterfallPlugin {
    defaults: StepLineOptions,
    debug_annotations: bool,
}

impl WaterfallPlugin {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the built-in defaults that user options are layered over.
    #[must_use]
    pub fn with_defaults(mut self, defaults: StepLineOptions) -> Self {
        self.defaults = defaults;
        self
    }

    /// Draws raw corner coordinates next to every connector.
    #[must_use]
    pub fn with_debug_annotations(mut self, enabled: bool) -> Self {
        self.debug_annotations = enabled;
        self
    }

    #[must_use]
    pub fn defaults(&self) -> StepLineOptions {
        self.defaults
    }

    /// Step-line options currently in effect for `chart`.
    #[must_use]
    pub fn resolved_options(&self, chart: &dyn ChartHost) -> StepLineOptions {
        StepLineOptions::resolve(
            &self.defaults,
            &chart.options().plugins.water_fall_plugin.step_lines,
        )
    }

    fn mark_ready(&self, state: &mut WaterfallContext, chart: &mut dyn ChartHost) {
        state.ready_to_draw_step_lines = true;
        if chart.has_surface() {
            debug!(chart_id = %state.chart_id, "step lines ready, requesting redraw");
            chart.request_redraw();
        } else {
            debug!(chart_id = %state.chart_id, "chart surface gone, skipping step-line redraw");
        }
    }
}

impl ChartPlugin for WaterfallPlugin {
    type State = WaterfallContext;

    fn id(&self) -> &str {
        WATERFALL_PLUGIN_ID
    }

    fn before_init(&self, chart: &dyn ChartHost) -> WaterfallContext {
        WaterfallContext::new(chart.chart_id())
    }

    fn after_init(&self, state: &mut WaterfallContext, chart: &mut dyn ChartHost, now: Instant) {
        initialize_datasets(chart.datasets_mut());

        let resolved = self.resolved_options(chart);
        let options = chart.options_mut();
        options.plugins.water_fall_plugin.step_lines = resolved.into();
        options.tooltips.filter = Some(exclude_dummy_stacks);
        options.legend.labels.filter = Some(exclude_dummy_stacks);

        let delay = options.animation.duration();
        state.readiness = Some(DeferredReadiness::schedule(now, delay));
        info!(
            chart_id = %state.chart_id,
            delay_ms = delay.as_millis() as u64,
            enabled = resolved.enabled,
            "waterfall plugin initialized"
        );
    }

    fn before_draw(&self, _state: &mut WaterfallContext, chart: &mut dyn ChartHost) {
        // Datasets may have been replaced since the last frame.
        initialize_datasets(chart.datasets_mut());
    }

    fn after_draw(
        &self,
        state: &mut WaterfallContext,
        chart: &mut dyn ChartHost,
        frame: &mut RenderFrame,
    ) {
        initialize_datasets(chart.datasets_mut());

        let options = self.resolved_options(chart);
        if options.enabled && state.ready_to_draw_step_lines {
            draw_step_lines(chart, &options, frame, self.debug_annotations);
        }
    }

    fn on_animation_complete(&self, state: &mut WaterfallContext, chart: &mut dyn ChartHost) {
        if let Some(readiness) = state.readiness.as_mut() {
            readiness.cancel();
        }
        if !state.ready_to_draw_step_lines {
            self.mark_ready(state, chart);
        }
    }

    fn on_timer(&self, state: &mut WaterfallContext, chart: &mut dyn ChartHost, now: Instant) {
        let fired = state
            .readiness
            .as_mut()
            .is_some_and(|readiness| readiness.poll(now));
        if fired {
            self.mark_ready(state, chart);
        }
    }

    fn next_deadline(&self, state: &WaterfallContext) -> Option<Instant> {
        state
            .readiness
            .filter(DeferredReadiness::is_pending)
            .map(|readiness| readiness.due_at())
    }

    fn on_destroy(&self, state: &mut WaterfallContext) {
        if let Some(readiness) = state.readiness.as_mut() {
            if readiness.cancel() {
                debug!(chart_id = %state.chart_id, "cancelled pending step-line readiness");
            }
        }
    }
}

/// Ensures every dataset carries waterfall metadata and hides dummy stacks.
///
/// Existing metadata is kept as-is, so running this repeatedly is a no-op.
pub fn initialize_datasets(datasets: &mut [BarDataset]) {
    for dataset in datasets {
        let meta = dataset.waterfall.get_or_insert_with(WaterfallMeta::default);
        if meta.dummy_stack {
            dataset.background_color = Color::TRANSPARENT;
        }
    }
}

/// Legend/tooltip filter hiding dummy-stack datasets.
#[must_use]
pub fn exclude_dummy_stacks(dataset_index: usize, datasets: &[BarDataset]) -> bool {
    !datasets
        .get(dataset_index)
        .is_some_and(BarDataset::is_dummy_stack)
}
