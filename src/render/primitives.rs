use smallvec::SmallVec;

use crate::core::PixelPoint;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as a CSS color string, see `render::css_color`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels and a 0..=1 alpha, the way CSS
    /// `rgba()` spells it.
    #[must_use]
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            alpha,
        )
    }

    #[must_use]
    pub fn is_fully_transparent(self) -> bool {
        self.alpha == 0.0
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// One gradient stop; `offset` is a 0..=1 position along the gradient axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Color,
}

impl ColorStop {
    #[must_use]
    pub const fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.offset.is_finite() || !(0.0..=1.0).contains(&self.offset) {
            return Err(ChartError::InvalidData(
                "gradient stop offset must be finite and in [0, 1]".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Linear gradient between `(x0, y0)` and `(x1, y1)` in pixel space.
///
/// Mirrors the 2D canvas `createLinearGradient` + `addColorStop` contract.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub stops: SmallVec<[ColorStop; 2]>,
}

impl LinearGradient {
    #[must_use]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            stops: SmallVec::new(),
        }
    }

    /// Vertical gradient at `x = 0` from `y_start` down to `y_end`.
    #[must_use]
    pub fn vertical(y_start: f64, y_end: f64) -> Self {
        Self::new(0.0, y_start, 0.0, y_end)
    }

    #[must_use]
    pub fn with_stop(mut self, offset: f64, color: Color) -> Self {
        self.stops.push(ColorStop::new(offset, color));
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x0.is_finite() || !self.y0.is_finite() || !self.x1.is_finite() || !self.y1.is_finite()
        {
            return Err(ChartError::InvalidData(
                "gradient axis coordinates must be finite".to_owned(),
            ));
        }
        for stop in &self.stops {
            stop.validate()?;
        }
        Ok(())
    }
}

/// Paint used to fill a closed path.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Fill {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Solid(color) => color.validate(),
            Self::LinearGradient(gradient) => gradient.validate(),
        }
    }
}

/// Draw command for one filled rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_width: 0.0,
            border_color: Color::TRANSPARENT,
        }
    }

    #[must_use]
    pub const fn with_border(mut self, border_width: f64, border_color: Color) -> Self {
        self.border_width = border_width;
        self.border_color = border_color;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width < 0.0 || self.height < 0.0
        {
            return Err(ChartError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(ChartError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Draw command for one closed, filled path.
///
/// Points are visited in order and the path is closed back to the first one.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPrimitive {
    pub points: SmallVec<[PixelPoint; 4]>,
    pub fill: Fill,
}

impl PolygonPrimitive {
    #[must_use]
    pub fn new(points: impl IntoIterator<Item = PixelPoint>, fill: Fill) -> Self {
        Self {
            points: points.into_iter().collect(),
            fill,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.points.len() < 3 {
            return Err(ChartError::InvalidData(
                "polygon needs at least 3 points".to_owned(),
            ));
        }
        if self.points.iter().any(|point| !point.is_finite()) {
            return Err(ChartError::InvalidData(
                "polygon coordinates must be finite".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
