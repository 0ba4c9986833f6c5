//! CSS color strings for the configuration surface.
//!
//! Chart options spell colors the way a 2D canvas `fillStyle` does
//! (`rgba(0, 0, 0, 0.55)`, `#1f77b4`, `transparent`). They are parsed into
//! [`Color`] once at load time so draw passes only handle numeric channels.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(input: &str) -> ChartResult<Self> {
        let normalized = input.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "transparent" => return Ok(Self::TRANSPARENT),
            "black" => return Ok(Self::BLACK),
            "white" => return Ok(Self::WHITE),
            _ => {}
        }

        if let Some(hex) = normalized.strip_prefix('#') {
            return parse_hex(input, hex);
        }
        if let Some(args) = functional_args(&normalized, "rgba") {
            return parse_rgb_function(input, args);
        }
        if let Some(args) = functional_args(&normalized, "rgb") {
            return parse_rgb_function(input, args);
        }

        Err(invalid(input, "unsupported color syntax"))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            to_channel8(self.red),
            to_channel8(self.green),
            to_channel8(self.blue),
            self.alpha
        )
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

fn functional_args<'a>(normalized: &'a str, name: &str) -> Option<&'a str> {
    normalized
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_rgb_function(input: &str, args: &str) -> ChartResult<Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(invalid(input, "expected 3 or 4 comma-separated components"));
    }

    let red = parse_channel8(input, parts[0])?;
    let green = parse_channel8(input, parts[1])?;
    let blue = parse_channel8(input, parts[2])?;
    let alpha = match parts.get(3) {
        Some(raw) => parse_alpha(input, raw)?,
        None => 1.0,
    };

    Ok(Color::rgba(red / 255.0, green / 255.0, blue / 255.0, alpha))
}

fn parse_channel8(input: &str, raw: &str) -> ChartResult<f64> {
    let value: f64 = raw
        .parse()
        .map_err(|_| invalid(input, "color channel is not a number"))?;
    if !value.is_finite() || !(0.0..=255.0).contains(&value) {
        return Err(invalid(input, "color channel must be in [0, 255]"));
    }
    Ok(value)
}

fn parse_alpha(input: &str, raw: &str) -> ChartResult<f64> {
    let value: f64 = raw
        .parse()
        .map_err(|_| invalid(input, "alpha is not a number"))?;
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(invalid(input, "alpha must be in [0, 1]"));
    }
    Ok(value)
}

fn parse_hex(input: &str, hex: &str) -> ChartResult<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid(input, "hex color contains non-hex digits"));
    }

    let nibble = |index: usize| -> ChartResult<u8> {
        u8::from_str_radix(&hex[index..=index], 16).map_err(|_| invalid(input, "bad hex digit"))
    };
    let byte = |index: usize| -> ChartResult<u8> {
        u8::from_str_radix(&hex[index..index + 2], 16).map_err(|_| invalid(input, "bad hex pair"))
    };

    match hex.len() {
        3 => Ok(Color::from_rgba8(
            nibble(0)? * 17,
            nibble(1)? * 17,
            nibble(2)? * 17,
            1.0,
        )),
        6 => Ok(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, 1.0)),
        8 => Ok(Color::from_rgba8(
            byte(0)?,
            byte(2)?,
            byte(4)?,
            f64::from(byte(6)?) / 255.0,
        )),
        _ => Err(invalid(input, "hex color must have 3, 6 or 8 digits")),
    }
}

fn to_channel8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn invalid(input: &str, reason: &str) -> ChartError {
    ChartError::InvalidColor {
        input: input.to_owned(),
        reason: reason.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use crate::render::Color;

    #[test]
    fn parses_rgba_with_spaces() {
        let color: Color = "rgba(0, 0, 0, 0.55)".parse().expect("valid rgba");
        assert_eq!(color, Color::rgba(0.0, 0.0, 0.0, 0.55));
    }

    #[test]
    fn parses_compact_rgba_and_keywords() {
        let color: Color = "rgba(0,0,0,0)".parse().expect("valid rgba");
        assert_eq!(color, Color::TRANSPARENT);
        assert_eq!("Transparent".parse::<Color>().expect("keyword"), Color::TRANSPARENT);
    }

    #[test]
    fn parses_hex_forms() {
        assert_eq!("#fff".parse::<Color>().expect("short hex"), Color::WHITE);
        assert_eq!("#000000".parse::<Color>().expect("long hex"), Color::BLACK);
        let with_alpha = "#ff000000".parse::<Color>().expect("hex with alpha");
        assert_eq!(with_alpha.red, 1.0);
        assert_eq!(with_alpha.alpha, 0.0);
    }

    #[test]
    fn rejects_out_of_range_alpha() {
        let err = "rgba(0, 0, 0, 1.5)".parse::<Color>().expect_err("alpha > 1");
        assert!(format!("{err}").contains("alpha must be in [0, 1]"));
    }

    #[test]
    fn rejects_unknown_syntax() {
        let err = "hsl(10, 20%, 30%)".parse::<Color>().expect_err("hsl unsupported");
        assert!(format!("{err}").contains("unsupported color syntax"));
    }

    #[test]
    fn display_uses_css_rgba() {
        assert_eq!(Color::rgba(0.0, 0.0, 0.0, 0.55).to_string(), "rgba(0, 0, 0, 0.55)");
        assert_eq!(Color::WHITE.to_string(), "rgba(255, 255, 255, 1)");
    }
}
