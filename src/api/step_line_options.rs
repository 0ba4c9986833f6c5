use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::render::Color;

pub const DEFAULT_START_COLOR_STOP: f64 = 0.0;
pub const DEFAULT_END_COLOR_STOP: f64 = 0.6;
pub const DEFAULT_START_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.55);
pub const DEFAULT_END_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

/// Gradient used to fill one step-line connector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepLineStyle {
    pub start_color_stop: f64,
    pub end_color_stop: f64,
    pub start_color: Color,
    pub end_color: Color,
}

impl Default for StepLineStyle {
    fn default() -> Self {
        Self {
            start_color_stop: DEFAULT_START_COLOR_STOP,
            end_color_stop: DEFAULT_END_COLOR_STOP,
            start_color: DEFAULT_START_COLOR,
            end_color: DEFAULT_END_COLOR,
        }
    }
}

impl StepLineStyle {
    /// Applies `layer` on top of `self`.
    ///
    /// Every `Some` field of the layer wins, including `0.0` stops. Invalid
    /// layer values are logged and the lower layer is kept, so resolution
    /// never fails.
    #[must_use]
    pub fn layered(self, layer: &StepLineStyleOverrides) -> Self {
        Self {
            start_color_stop: pick_stop("startColorStop", self.start_color_stop, layer.start_color_stop),
            end_color_stop: pick_stop("endColorStop", self.end_color_stop, layer.end_color_stop),
            start_color: pick_color("startColor", self.start_color, layer.start_color),
            end_color: pick_color("endColor", self.end_color, layer.end_color),
        }
    }
}

/// Resolved `plugins.waterFallPlugin.stepLines` options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepLineOptions {
    pub enabled: bool,
    #[serde(flatten)]
    pub style: StepLineStyle,
}

impl Default for StepLineOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            style: StepLineStyle::default(),
        }
    }
}

impl StepLineOptions {
    /// Layers user plugin options over `defaults`.
    #[must_use]
    pub fn resolve(defaults: &Self, user: &StepLineOptionsOverrides) -> Self {
        Self {
            enabled: user.enabled.unwrap_or(defaults.enabled),
            style: defaults.style.layered(&user.style),
        }
    }

    /// Style for one dataset: per-dataset overrides layered over these options.
    #[must_use]
    pub fn style_for(&self, dataset_overrides: &StepLineStyleOverrides) -> StepLineStyle {
        self.style.layered(dataset_overrides)
    }
}

/// Partial gradient style. Used for user plugin options and for per-dataset
/// `waterfall.stepLines` overrides.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepLineStyleOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_color_stop: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_color_stop: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_color: Option<Color>,
}

impl StepLineStyleOverrides {
    #[must_use]
    pub fn with_color_stops(mut self, start: f64, end: f64) -> Self {
        self.start_color_stop = Some(start);
        self.end_color_stop = Some(end);
        self
    }

    #[must_use]
    pub fn with_colors(mut self, start: Color, end: Color) -> Self {
        self.start_color = Some(start);
        self.end_color = Some(end);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<StepLineStyle> for StepLineStyleOverrides {
    fn from(style: StepLineStyle) -> Self {
        Self {
            start_color_stop: Some(style.start_color_stop),
            end_color_stop: Some(style.end_color_stop),
            start_color: Some(style.start_color),
            end_color: Some(style.end_color),
        }
    }
}

/// User-facing, partial `stepLines` options.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepLineOptionsOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(flatten)]
    pub style: StepLineStyleOverrides,
}

impl From<StepLineOptions> for StepLineOptionsOverrides {
    fn from(options: StepLineOptions) -> Self {
        Self {
            enabled: Some(options.enabled),
            style: options.style.into(),
        }
    }
}

/// Options namespace of the waterfall plugin (`plugins.waterFallPlugin`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterfallPluginOptions {
    #[serde(default)]
    pub step_lines: StepLineOptionsOverrides,
}

fn pick_stop(field: &'static str, lower: f64, layer: Option<f64>) -> f64 {
    match layer {
        Some(value) if value.is_finite() && (0.0..=1.0).contains(&value) => value,
        Some(value) => {
            warn!(field, value, fallback = lower, "ignoring step-line color stop outside [0, 1]");
            lower
        }
        None => lower,
    }
}

fn pick_color(field: &'static str, lower: Color, layer: Option<Color>) -> Color {
    match layer {
        Some(color) if color.validate().is_ok() => color,
        Some(color) => {
            warn!(field, color = ?color, "ignoring step-line color with invalid channels");
            lower
        }
        None => lower,
    }
}
