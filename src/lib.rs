//! chart-waterfall: step-line connectors for stacked waterfall bar charts.
//!
//! The crate sits on top of a host chart's draw cycle. The host supplies
//! datasets and the computed geometry of each dataset's first bar; the
//! waterfall plugin tags dummy stacks, resolves step-line options and, once
//! the entry animation is over, appends gradient connectors between adjacent
//! stacks to every frame.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{WaterfallChart, WaterfallChartConfig};
pub use error::{ChartError, ChartResult};
pub use extensions::WaterfallPlugin;
