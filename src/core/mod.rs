pub mod bar_model;
pub mod types;

pub use bar_model::BarModel;
pub use types::{ChartId, PixelPoint, Viewport};
