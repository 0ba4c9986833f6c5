use tracing::{debug, trace};

use crate::core::{BarModel, ChartId, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::extensions::ChartHost;
use crate::render::{RectPrimitive, RenderFrame, Renderer};

use super::{BarDataset, ChartOptions, WaterfallChartConfig};

/// Host chart state: datasets, layout results, options and drawing surface.
///
/// This is the handle plugins see through [`ChartHost`]. The surface is the
/// renderer; it is gone once the chart is destroyed.
#[derive(Debug)]
pub struct ChartInstance<R: Renderer> {
    id: ChartId,
    viewport: Viewport,
    datasets: Vec<BarDataset>,
    bar_models: Vec<Option<BarModel>>,
    options: ChartOptions,
    renderer: Option<R>,
    redraw_requested: bool,
}

impl<R: Renderer> ChartInstance<R> {
    pub(super) fn new(renderer: R, config: WaterfallChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let bar_models = vec![None; config.datasets.len()];
        Ok(Self {
            id: ChartId::next(),
            viewport: config.viewport,
            datasets: config.datasets,
            bar_models,
            options: config.options,
            renderer: Some(renderer),
            redraw_requested: false,
        })
    }

    #[must_use]
    pub fn id(&self) -> ChartId {
        self.id
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn datasets(&self) -> &[BarDataset] {
        &self.datasets
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    #[must_use]
    pub fn bar_models(&self) -> &[Option<BarModel>] {
        &self.bar_models
    }

    /// Replaces the datasets; previous layout results are dropped.
    pub fn set_datasets(&mut self, datasets: Vec<BarDataset>) {
        debug!(chart_id = %self.id, count = datasets.len(), "set datasets");
        self.bar_models = vec![None; datasets.len()];
        self.datasets = datasets;
    }

    /// Stores the layout result for the first bar of `dataset_index`.
    pub fn set_bar_model(&mut self, dataset_index: usize, model: BarModel) -> ChartResult<()> {
        model.validate()?;
        let slot = self.bar_models.get_mut(dataset_index).ok_or_else(|| {
            ChartError::InvalidData(format!(
                "bar model index {dataset_index} out of range for {} datasets",
                self.datasets.len()
            ))
        })?;
        *slot = Some(model);
        trace!(chart_id = %self.id, dataset_index, "set bar model");
        Ok(())
    }

    /// Replaces all layout results at once, one entry per dataset.
    pub fn set_bar_models(&mut self, models: Vec<Option<BarModel>>) -> ChartResult<()> {
        if models.len() != self.datasets.len() {
            return Err(ChartError::InvalidData(format!(
                "expected {} bar models, got {}",
                self.datasets.len(),
                models.len()
            )));
        }
        for model in models.iter().flatten() {
            model.validate()?;
        }
        self.bar_models = models;
        Ok(())
    }

    pub fn clear_bar_models(&mut self) {
        self.bar_models.iter_mut().for_each(|slot| *slot = None);
    }

    #[must_use]
    pub fn renderer(&self) -> Option<&R> {
        self.renderer.as_ref()
    }

    pub(super) fn renderer_mut(&mut self) -> Option<&mut R> {
        self.renderer.as_mut()
    }

    pub(super) fn take_renderer(&mut self) -> Option<R> {
        self.renderer.take()
    }

    #[must_use]
    pub fn is_redraw_requested(&self) -> bool {
        self.redraw_requested
    }

    pub(super) fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Host bars for the current layout, before any plugin overlay.
    ///
    /// Fully transparent bars (dummy stacks) produce no primitive.
    #[must_use]
    pub fn build_base_frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for (dataset, model) in self.datasets.iter().zip(&self.bar_models) {
            let Some(model) = model else {
                continue;
            };
            if dataset.background_color.is_fully_transparent() {
                continue;
            }
            frame.rects.push(RectPrimitive::new(
                model.left_x(),
                model.top_edge(),
                model.width,
                model.height(),
                dataset.background_color,
            ));
        }
        frame
    }
}

impl<R: Renderer> ChartHost for ChartInstance<R> {
    fn chart_id(&self) -> ChartId {
        self.id
    }

    fn datasets(&self) -> &[BarDataset] {
        &self.datasets
    }

    fn datasets_mut(&mut self) -> &mut [BarDataset] {
        &mut self.datasets
    }

    fn bar_model(&self, dataset_index: usize) -> Option<BarModel> {
        self.bar_models.get(dataset_index).copied().flatten()
    }

    fn options(&self) -> &ChartOptions {
        &self.options
    }

    fn options_mut(&mut self) -> &mut ChartOptions {
        &mut self.options
    }

    fn has_surface(&self) -> bool {
        self.renderer.is_some()
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }
}
