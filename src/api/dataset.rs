use serde::{Deserialize, Serialize};

use crate::render::Color;

use super::StepLineStyleOverrides;

fn default_background_color() -> Color {
    Color::rgba(0.0, 0.0, 0.0, 0.1)
}

/// Waterfall metadata attached to a dataset (`dataset.waterfall`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterfallMeta {
    /// Invisible spacer series that lifts real bars to their position.
    #[serde(default)]
    pub dummy_stack: bool,
    #[serde(default)]
    pub step_lines: StepLineStyleOverrides,
}

impl WaterfallMeta {
    #[must_use]
    pub fn dummy() -> Self {
        Self {
            dummy_stack: true,
            step_lines: StepLineStyleOverrides::default(),
        }
    }

    #[must_use]
    pub fn with_step_lines(mut self, step_lines: StepLineStyleOverrides) -> Self {
        self.step_lines = step_lines;
        self
    }
}

/// One bar series of the host chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarDataset {
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(default)]
    pub data: Vec<f64>,
    #[serde(default = "default_background_color")]
    pub background_color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waterfall: Option<WaterfallMeta>,
}

impl BarDataset {
    #[must_use]
    pub fn new(label: impl Into<String>, stack: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            stack: Some(stack.into()),
            data,
            background_color: default_background_color(),
            waterfall: None,
        }
    }

    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    #[must_use]
    pub fn with_waterfall(mut self, meta: WaterfallMeta) -> Self {
        self.waterfall = Some(meta);
        self
    }

    /// Shorthand for a dummy-stack spacer.
    #[must_use]
    pub fn dummy(label: impl Into<String>, stack: impl Into<String>, data: Vec<f64>) -> Self {
        Self::new(label, stack, data).with_waterfall(WaterfallMeta::dummy())
    }

    #[must_use]
    pub fn is_dummy_stack(&self) -> bool {
        self.waterfall.is_some_and(|meta| meta.dummy_stack)
    }

    #[must_use]
    pub fn first_value(&self) -> Option<f64> {
        self.data.first().copied()
    }

    #[must_use]
    pub fn step_line_overrides(&self) -> StepLineStyleOverrides {
        self.waterfall
            .map(|meta| meta.step_lines)
            .unwrap_or_default()
    }
}
