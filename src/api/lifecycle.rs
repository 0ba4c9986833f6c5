use std::time::Instant;

use tracing::debug;

use crate::error::ChartResult;
use crate::extensions::ChartPlugin;
use crate::render::Renderer;

use super::WaterfallChart;

impl<R: Renderer, P: ChartPlugin> WaterfallChart<R, P> {
    /// Runs due plugin timers; returns `true` when a redraw was requested.
    ///
    /// Hosts with their own main loop call this and schedule the redraw
    /// themselves (see `platform_gtk`).
    pub fn poll_timers(&mut self, now: Instant) -> bool {
        self.plugin
            .on_timer(&mut self.plugin_state, &mut self.instance, now);
        self.instance.is_redraw_requested()
    }

    /// Runs due plugin timers and renders right away if they asked for it.
    ///
    /// Returns `true` when a frame was rendered.
    pub fn tick(&mut self, now: Instant) -> ChartResult<bool> {
        if !self.poll_timers(now) {
            return Ok(false);
        }
        self.render_requested()
    }

    /// Explicit completion signal for hosts that can guarantee one; makes the
    /// deferred readiness timer unnecessary.
    pub fn notify_animation_complete(&mut self) -> ChartResult<bool> {
        if !self.complete_animation() {
            return Ok(false);
        }
        self.render_requested()
    }

    /// Like [`Self::notify_animation_complete`] but leaves the redraw to the
    /// host; returns `true` when one was requested.
    pub fn complete_animation(&mut self) -> bool {
        self.plugin
            .on_animation_complete(&mut self.plugin_state, &mut self.instance);
        self.instance.is_redraw_requested()
    }

    /// Earliest instant at which `poll_timers` has work to do.
    #[must_use]
    pub fn next_timer_deadline(&self) -> Option<Instant> {
        self.plugin.next_deadline(&self.plugin_state)
    }

    /// Releases the drawing surface. Later renders and timer-driven redraws
    /// become no-ops.
    pub fn destroy(&mut self) -> Option<R> {
        debug!(chart_id = %self.instance.id(), "chart destroyed");
        self.plugin.on_destroy(&mut self.plugin_state);
        self.instance.take_renderer()
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.instance.renderer().is_none()
    }

    /// Consumes a pending redraw request, if any, by rendering once.
    pub fn render_requested(&mut self) -> ChartResult<bool> {
        if !self.instance.take_redraw_request() || self.is_destroyed() {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }
}
