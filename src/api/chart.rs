use std::time::Instant;

use tracing::debug;

use crate::core::{BarModel, ChartId, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{ChartPlugin, WaterfallPlugin};
use crate::render::{RenderFrame, Renderer};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::{BarDataset, ChartInstance, ChartOptions, LegendItem, TooltipItem, WaterfallChartConfig};

/// Main facade consumed by host applications.
///
/// Owns the chart instance, one plugin and that plugin's per-chart state, and
/// drives the plugin hooks around every draw pass.
pub struct WaterfallChart<R: Renderer, P: ChartPlugin = WaterfallPlugin> {
    pub(super) instance: ChartInstance<R>,
    pub(super) plugin: P,
    pub(super) plugin_state: P::State,
}

impl<R: Renderer> WaterfallChart<R> {
    /// Creates a chart with the default waterfall plugin.
    pub fn new(renderer: R, config: WaterfallChartConfig) -> ChartResult<Self> {
        Self::with_plugin(renderer, config, WaterfallPlugin::default())
    }
}

impl<R: Renderer, P: ChartPlugin> WaterfallChart<R, P> {
    pub fn with_plugin(renderer: R, config: WaterfallChartConfig, plugin: P) -> ChartResult<Self> {
        Self::with_plugin_at(renderer, config, plugin, Instant::now())
    }

    /// Same as [`Self::with_plugin`] with an explicit construction instant, which
    /// anchors the deferred readiness deadline.
    pub fn with_plugin_at(
        renderer: R,
        config: WaterfallChartConfig,
        plugin: P,
        now: Instant,
    ) -> ChartResult<Self> {
        if !config.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }

        let mut instance = ChartInstance::new(renderer, config)?;
        let mut plugin_state = plugin.before_init(&instance);
        plugin.after_init(&mut plugin_state, &mut instance, now);
        debug!(chart_id = %instance.id(), plugin = plugin.id(), "chart constructed");

        Ok(Self {
            instance,
            plugin,
            plugin_state,
        })
    }

    #[must_use]
    pub fn chart_id(&self) -> ChartId {
        self.instance.id()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.instance.viewport()
    }

    #[must_use]
    pub fn instance(&self) -> &ChartInstance<R> {
        &self.instance
    }

    #[must_use]
    pub fn datasets(&self) -> &[BarDataset] {
        self.instance.datasets()
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        self.instance.options()
    }

    #[must_use]
    pub fn plugin(&self) -> &P {
        &self.plugin
    }

    #[must_use]
    pub fn plugin_state(&self) -> &P::State {
        &self.plugin_state
    }

    pub fn set_datasets(&mut self, datasets: Vec<BarDataset>) {
        self.instance.set_datasets(datasets);
    }

    pub fn set_bar_model(&mut self, dataset_index: usize, model: BarModel) -> ChartResult<()> {
        self.instance.set_bar_model(dataset_index, model)
    }

    pub fn set_bar_models(&mut self, models: Vec<Option<BarModel>>) -> ChartResult<()> {
        self.instance.set_bar_models(models)
    }

    pub fn clear_bar_models(&mut self) {
        self.instance.clear_bar_models();
    }

    #[must_use]
    pub fn legend_items(&self) -> Vec<LegendItem> {
        self.instance.legend_items()
    }

    #[must_use]
    pub fn tooltip_items(&self, data_index: usize) -> Vec<TooltipItem> {
        self.instance.tooltip_items(data_index)
    }

    /// Host bars followed by the plugin overlay for the current layout.
    pub fn build_render_frame(&mut self) -> ChartResult<RenderFrame> {
        self.plugin
            .before_draw(&mut self.plugin_state, &mut self.instance);
        let mut frame = self.instance.build_base_frame();
        self.plugin
            .after_draw(&mut self.plugin_state, &mut self.instance, &mut frame);
        Ok(frame)
    }

    /// Renders one frame. A destroyed chart renders nothing.
    pub fn render(&mut self) -> ChartResult<()> {
        if self.instance.renderer().is_none() {
            debug!(chart_id = %self.instance.id(), "render skipped, chart destroyed");
            return Ok(());
        }
        let frame = self.build_render_frame()?;
        self.instance.take_redraw_request();
        match self.instance.renderer_mut() {
            Some(renderer) => renderer.render(&frame),
            None => Ok(()),
        }
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        if self.instance.renderer().is_none() {
            return Ok(());
        }
        let frame = self.build_render_frame()?;
        self.instance.take_redraw_request();
        match self.instance.renderer_mut() {
            Some(renderer) => renderer.render_on_cairo_context(context, &frame),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn into_renderer(mut self) -> Option<R> {
        self.instance.take_renderer()
    }
}
