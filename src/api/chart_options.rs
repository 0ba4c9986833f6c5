use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{BarDataset, WaterfallPluginOptions};

/// Predicate deciding whether the item for `dataset_index` is shown.
///
/// Used for legend labels and tooltip items.
pub type DatasetItemFilter = fn(dataset_index: usize, datasets: &[BarDataset]) -> bool;

fn default_animation_duration_ms() -> u64 {
    1_000
}

/// Host entry animation settings (`options.animation`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationOptions {
    /// Entry animation duration in milliseconds.
    #[serde(default = "default_animation_duration_ms")]
    pub duration: u64,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            duration: default_animation_duration_ms(),
        }
    }
}

impl AnimationOptions {
    #[must_use]
    pub fn duration(self) -> Duration {
        Duration::from_millis(self.duration)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LegendLabelOptions {
    #[serde(skip)]
    pub filter: Option<DatasetItemFilter>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LegendOptions {
    #[serde(default)]
    pub labels: LegendLabelOptions,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TooltipOptions {
    #[serde(skip)]
    pub filter: Option<DatasetItemFilter>,
}

/// Per-plugin option namespaces (`options.plugins`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginOptions {
    #[serde(default, rename = "waterFallPlugin")]
    pub water_fall_plugin: WaterfallPluginOptions,
}

/// Global chart options tree.
///
/// Filters are runtime-only hooks and are not part of the JSON form.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(default)]
    pub animation: AnimationOptions,
    #[serde(default)]
    pub legend: LegendOptions,
    #[serde(default)]
    pub tooltips: TooltipOptions,
    #[serde(default)]
    pub plugins: PluginOptions,
}

impl ChartOptions {
    #[must_use]
    pub fn with_animation_duration_ms(mut self, duration: u64) -> Self {
        self.animation.duration = duration;
        self
    }

    #[must_use]
    pub fn with_waterfall_plugin(mut self, options: WaterfallPluginOptions) -> Self {
        self.plugins.water_fall_plugin = options;
        self
    }
}
