use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use gtk::glib;
use gtk::prelude::*;
use gtk4 as gtk;
use tracing::{trace, warn};

use crate::api::WaterfallChart;
use crate::render::CairoRenderer;

type SharedChart = Rc<RefCell<WaterfallChart<CairoRenderer>>>;

/// Embeds a waterfall chart into a GTK4 `DrawingArea`.
///
/// Draws happen in the area's draw function; the step-line readiness deadline
/// is driven by a one-shot GLib timeout that queues a redraw when it fires.
pub struct GtkWaterfallAdapter {
    chart: SharedChart,
    area: gtk::DrawingArea,
}

impl GtkWaterfallAdapter {
    #[must_use]
    pub fn new(chart: WaterfallChart<CairoRenderer>) -> Self {
        let viewport = chart.viewport();
        let chart: SharedChart = Rc::new(RefCell::new(chart));

        let area = gtk::DrawingArea::new();
        area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));

        let draw_chart = Rc::clone(&chart);
        area.set_draw_func(move |_area, context, _width, _height| {
            if let Err(err) = draw_chart.borrow_mut().render_on_cairo_context(context) {
                warn!(error = %err, "waterfall chart draw failed");
            }
        });

        schedule_timer_poll(&chart, &area);
        Self { chart, area }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    #[must_use]
    pub fn chart(&self) -> SharedChart {
        Rc::clone(&self.chart)
    }

    /// Forwards an explicit animation-complete signal and queues the redraw.
    pub fn notify_animation_complete(&self) {
        if self.chart.borrow_mut().complete_animation() {
            self.area.queue_draw();
        }
    }
}

fn schedule_timer_poll(chart: &SharedChart, area: &gtk::DrawingArea) {
    let Some(deadline) = chart.borrow().next_timer_deadline() else {
        return;
    };
    let delay = deadline.saturating_duration_since(Instant::now());
    trace!(delay_ms = delay.as_millis() as u64, "scheduling step-line readiness poll");

    let chart = Rc::clone(chart);
    let area = area.clone();
    glib::timeout_add_local_once(delay, move || {
        let redraw = chart.borrow_mut().poll_timers(Instant::now());
        if redraw {
            area.queue_draw();
        } else {
            // GLib timeouts have millisecond granularity and may fire early.
            schedule_timer_poll(&chart, &area);
        }
    });
}
