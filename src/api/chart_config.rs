use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

use super::{BarDataset, ChartOptions, WaterfallPluginOptions};

/// Public chart bootstrap configuration.
///
/// Serializable so host applications can persist/load chart setup in the same
/// camelCase shape the options surface documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterfallChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub datasets: Vec<BarDataset>,
    #[serde(default)]
    pub options: ChartOptions,
}

impl WaterfallChartConfig {
    /// Creates a config with no datasets and default options.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            datasets: Vec::new(),
            options: ChartOptions::default(),
        }
    }

    #[must_use]
    pub fn with_dataset(mut self, dataset: BarDataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    #[must_use]
    pub fn with_datasets(mut self, datasets: impl IntoIterator<Item = BarDataset>) -> Self {
        self.datasets.extend(datasets);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the entry animation duration the step-line readiness waits for.
    #[must_use]
    pub fn with_animation_duration_ms(mut self, duration: u64) -> Self {
        self.options.animation.duration = duration;
        self
    }

    #[must_use]
    pub fn with_waterfall_plugin(mut self, options: WaterfallPluginOptions) -> Self {
        self.options.plugins.water_fall_plugin = options;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for (index, dataset) in self.datasets.iter().enumerate() {
            dataset.background_color.validate().map_err(|err| {
                ChartError::InvalidConfig(format!("dataset {index} background color: {err}"))
            })?;
        }
        Ok(())
    }
}
