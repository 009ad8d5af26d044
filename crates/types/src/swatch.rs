//! Swatch configuration: the options recognized by the color view.

use serde::{Deserialize, Serialize};

use crate::color::{Color, ParseColorError};

/// Default corner radius, in pixels
pub const DEFAULT_CORNER_RADIUS: f64 = 4.0;

/// Default side length of one checkerboard square, in pixels
pub const DEFAULT_PIXEL_SIZE: i32 = 8;

/// Style options for a swatch.
///
/// Values are stored as given; [`SwatchConfig::apply_attribute`] only checks
/// that they parse. Geometry policy (tile size, radius clamping) is applied
/// when rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SwatchConfig {
    /// First checkerboard color (diagonal cells)
    #[serde(default = "default_background_color1")]
    pub background_color1: Color,
    /// Second checkerboard color (anti-diagonal cells)
    #[serde(default = "default_background_color2")]
    pub background_color2: Color,
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f64,
    /// Side length of one checkerboard square
    #[serde(default = "default_pixel_size")]
    pub background_pixel_size: i32,
    /// The displayed color
    #[serde(default)]
    pub color: Color,
}

fn default_background_color1() -> Color {
    Color::LIGHT_GRAY
}

fn default_background_color2() -> Color {
    Color::GRAY
}

fn default_corner_radius() -> f64 {
    DEFAULT_CORNER_RADIUS
}

fn default_pixel_size() -> i32 {
    DEFAULT_PIXEL_SIZE
}

impl Default for SwatchConfig {
    fn default() -> Self {
        Self {
            background_color1: default_background_color1(),
            background_color2: default_background_color2(),
            corner_radius: default_corner_radius(),
            background_pixel_size: default_pixel_size(),
            color: Color::TRANSPARENT,
        }
    }
}

/// Error raised while applying a style attribute
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AttributeError {
    #[error("unknown attribute {0:?}")]
    UnknownKey(String),
    #[error("attribute {key}: {source}")]
    Color {
        key: String,
        #[source]
        source: ParseColorError,
    },
    #[error("attribute {key}: invalid dimension {value:?} (expected N, Npx or Ndp)")]
    Dimension { key: String, value: String },
}

impl SwatchConfig {
    /// Apply a single `key=value` style attribute.
    ///
    /// Colors take `#RRGGBB` / `#AARRGGBB`; dimensions take `N`, `Npx` or
    /// `Ndp`, where dp values are multiplied by `density`.
    pub fn apply_attribute(
        &mut self,
        key: &str,
        value: &str,
        density: f64,
    ) -> Result<(), AttributeError> {
        let color = |value: &str| {
            value.parse::<Color>().map_err(|source| AttributeError::Color {
                key: key.to_string(),
                source,
            })
        };

        match key {
            "backgroundColor1" => self.background_color1 = color(value)?,
            "backgroundColor2" => self.background_color2 = color(value)?,
            "color" => self.color = color(value)?,
            "cornerRadius" => self.corner_radius = parse_dimension(key, value, density)?,
            "backgroundPixelSize" => {
                self.background_pixel_size = to_pixel_size(parse_dimension(key, value, density)?)
            }
            _ => return Err(AttributeError::UnknownKey(key.to_string())),
        }

        log::debug!("Applied swatch attribute {}={}", key, value);
        Ok(())
    }

    /// Apply several attributes in order, stopping at the first failure.
    pub fn apply_attributes<'a, I>(&mut self, attrs: I, density: f64) -> Result<(), AttributeError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, value) in attrs {
            self.apply_attribute(key, value, density)?;
        }
        Ok(())
    }
}

/// Round a dimension to whole pixels, away from zero at the half. A non-zero
/// dimension never rounds to zero pixels.
fn to_pixel_size(px: f64) -> i32 {
    let rounded = if px >= 0.0 { (px + 0.5) as i32 } else { (px - 0.5) as i32 };
    if rounded != 0 || px == 0.0 {
        rounded
    } else if px > 0.0 {
        1
    } else {
        -1
    }
}

fn parse_dimension(key: &str, value: &str, density: f64) -> Result<f64, AttributeError> {
    let err = || AttributeError::Dimension {
        key: key.to_string(),
        value: value.to_string(),
    };
    let value_trimmed = value.trim();

    let (number, scale) = if let Some(n) = value_trimmed.strip_suffix("dp") {
        (n, density)
    } else if let Some(n) = value_trimmed.strip_suffix("px") {
        (n, 1.0)
    } else {
        (value_trimmed, 1.0)
    };

    let parsed: f64 = number.trim().parse().map_err(|_| err())?;
    if !parsed.is_finite() {
        return Err(err());
    }
    Ok(parsed * scale)
}
