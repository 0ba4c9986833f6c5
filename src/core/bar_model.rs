use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Host layout result for the first bar of one dataset, in pixel space.
///
/// `y` is the value end of the bar and `base` the zero end. For a positive
/// value `y < base` (canvas y grows downward); for a negative one `y > base`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarModel {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub base: f64,
}

impl BarModel {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, base: f64) -> Self {
        Self { x, y, width, base }
    }

    #[must_use]
    pub fn left_x(self) -> f64 {
        self.x - self.width / 2.0
    }

    #[must_use]
    pub fn right_x(self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Upper pixel edge regardless of the value sign.
    #[must_use]
    pub fn top_edge(self) -> f64 {
        self.y.min(self.base)
    }

    #[must_use]
    pub fn height(self) -> f64 {
        (self.base - self.y).abs()
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() || !self.base.is_finite() {
            return Err(ChartError::InvalidData(
                "bar model coordinates must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(ChartError::InvalidData(
                "bar model width must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::BarModel;

    #[test]
    fn edges_are_centered_on_x() {
        let model = BarModel::new(100.0, 20.0, 30.0, 80.0);
        assert_eq!(model.left_x(), 85.0);
        assert_eq!(model.right_x(), 115.0);
        assert_eq!(model.top_edge(), 20.0);
        assert_eq!(model.height(), 60.0);
    }

    #[test]
    fn negative_bar_keeps_top_edge_at_base() {
        let model = BarModel::new(10.0, 90.0, 4.0, 50.0);
        assert_eq!(model.top_edge(), 50.0);
        assert_eq!(model.height(), 40.0);
    }

    #[test]
    fn rejects_non_finite_geometry() {
        let err = BarModel::new(f64::NAN, 0.0, 1.0, 0.0)
            .validate()
            .expect_err("nan x must fail");
        assert!(format!("{err}").contains("bar model coordinates"));
    }
}
