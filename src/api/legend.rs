use crate::render::{Color, Renderer};

use super::{BarDataset, ChartInstance, DatasetItemFilter};

/// One legend row: a swatch and the dataset label.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendItem {
    pub dataset_index: usize,
    pub text: String,
    pub fill: Color,
}

/// One tooltip line for the hovered category.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipItem {
    pub dataset_index: usize,
    pub data_index: usize,
    pub label: String,
    pub value: f64,
}

impl<R: Renderer> ChartInstance<R> {
    /// Legend rows after the installed label filter.
    #[must_use]
    pub fn legend_items(&self) -> Vec<LegendItem> {
        let datasets = self.datasets();
        let filter = self.options().legend.labels.filter;
        datasets
            .iter()
            .enumerate()
            .filter(|(index, _)| passes(filter, *index, datasets))
            .map(|(dataset_index, dataset)| LegendItem {
                dataset_index,
                text: dataset.label.clone(),
                fill: dataset.background_color,
            })
            .collect()
    }

    /// Tooltip lines for `data_index` after the installed tooltip filter.
    #[must_use]
    pub fn tooltip_items(&self, data_index: usize) -> Vec<TooltipItem> {
        let datasets = self.datasets();
        let filter = self.options().tooltips.filter;
        datasets
            .iter()
            .enumerate()
            .filter(|(index, _)| passes(filter, *index, datasets))
            .filter_map(|(dataset_index, dataset)| {
                dataset.data.get(data_index).map(|value| TooltipItem {
                    dataset_index,
                    data_index,
                    label: dataset.label.clone(),
                    value: *value,
                })
            })
            .collect()
    }
}

fn passes(filter: Option<DatasetItemFilter>, index: usize, datasets: &[BarDataset]) -> bool {
    filter.is_none_or(|filter| filter(index, datasets))
}
