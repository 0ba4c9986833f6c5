use std::time::Instant;

use crate::api::{BarDataset, ChartOptions};
use crate::core::{BarModel, ChartId};
use crate::render::RenderFrame;

/// Live chart handle passed to plugin hooks.
///
/// Plugins may tag datasets and rewrite options, but never own the chart.
pub trait ChartHost {
    fn chart_id(&self) -> ChartId;
    fn datasets(&self) -> &[BarDataset];
    fn datasets_mut(&mut self) -> &mut [BarDataset];
    /// Layout result for the first bar of `dataset_index`, `None` before layout.
    fn bar_model(&self, dataset_index: usize) -> Option<BarModel>;
    fn options(&self) -> &ChartOptions;
    fn options_mut(&mut self) -> &mut ChartOptions;
    /// `false` once the chart has been destroyed.
    fn has_surface(&self) -> bool;
    fn request_redraw(&mut self);
}

/// Lifecycle hooks invoked by the chart wrapper.
///
/// The plugin itself is shared configuration; everything that belongs to one
/// chart lives in `Self::State`, created by `before_init` and handed back to
/// every later hook by the wrapper that owns it.
pub trait ChartPlugin {
    type State;

    fn id(&self) -> &str;

    fn before_init(&self, chart: &dyn ChartHost) -> Self::State;

    fn after_init(&self, _state: &mut Self::State, _chart: &mut dyn ChartHost, _now: Instant) {}

    /// Runs before the host bars are turned into primitives.
    fn before_draw(&self, _state: &mut Self::State, _chart: &mut dyn ChartHost) {}

    fn after_draw(
        &self,
        _state: &mut Self::State,
        _chart: &mut dyn ChartHost,
        _frame: &mut RenderFrame,
    ) {
    }

    /// Host notification that the entry animation finished.
    fn on_animation_complete(&self, _state: &mut Self::State, _chart: &mut dyn ChartHost) {}

    /// Timer poll; `now` comes from the host loop.
    fn on_timer(&self, _state: &mut Self::State, _chart: &mut dyn ChartHost, _now: Instant) {}

    /// Earliest instant at which `on_timer` has work to do.
    fn next_deadline(&self, _state: &Self::State) -> Option<Instant> {
        None
    }

    fn on_destroy(&self, _state: &mut Self::State) {}
}
