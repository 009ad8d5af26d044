//! Foundational color type used throughout ColorView.
//!
//! Colors are 32-bit ARGB words (`0xAARRGGBB`), not premultiplied. Cairo's
//! `ARGB32` surfaces store premultiplied pixels, so conversions in both
//! directions live here as well.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// ARGB color with alpha channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const LIGHT_GRAY: Color = Color(0xFFCC_CCCC);
    pub const GRAY: Color = Color(0xFF88_8888);
    pub const DARK_GRAY: Color = Color(0xFF44_4444);

    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    pub const fn from_argb8(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Build from floating point channels in `0.0..=1.0` (clamped).
    pub fn from_rgba_f64(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::from_argb8(unit_to_u8(a), unit_to_u8(r), unit_to_u8(g), unit_to_u8(b))
    }

    pub const fn argb(&self) -> u32 {
        self.0
    }

    pub const fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(&self) -> u8 {
        self.0 as u8
    }

    pub fn to_rgba_f64(&self) -> (f64, f64, f64, f64) {
        (
            self.red() as f64 / 255.0,
            self.green() as f64 / 255.0,
            self.blue() as f64 / 255.0,
            self.alpha() as f64 / 255.0,
        )
    }

    /// Pixel word for a cairo `ARGB32` surface (premultiplied alpha).
    pub fn to_premultiplied_argb32(&self) -> u32 {
        let a = self.alpha() as u32;
        let mul = |c: u8| (c as u32 * a + 127) / 255;
        a << 24 | mul(self.red()) << 16 | mul(self.green()) << 8 | mul(self.blue())
    }

    /// Inverse of [`Color::to_premultiplied_argb32`].
    pub fn from_premultiplied_argb32(pixel: u32) -> Self {
        let a = pixel >> 24;
        if a == 0 {
            return Self::TRANSPARENT;
        }
        let unmul = |shift: u32| {
            let c = (pixel >> shift) & 0xFF;
            ((c * 255 + a / 2) / a).min(255)
        };
        Self(a << 24 | unmul(16) << 16 | unmul(8) << 8 | unmul(0))
    }

    /// Apply to Cairo context
    #[cfg(feature = "cairo")]
    pub fn apply_to_cairo(&self, cr: &cairo::Context) {
        let (r, g, b, a) = self.to_rgba_f64();
        cr.set_source_rgba(r, g, b, a);
    }

    /// Convert to GTK RGBA
    #[cfg(feature = "gtk")]
    pub fn to_gdk_rgba(&self) -> gdk4::RGBA {
        let (r, g, b, a) = self.to_rgba_f64();
        gdk4::RGBA::new(r as f32, g as f32, b as f32, a as f32)
    }

    /// Create from GTK RGBA
    #[cfg(feature = "gtk")]
    pub fn from_gdk_rgba(rgba: &gdk4::RGBA) -> Self {
        Self::from_rgba_f64(
            rgba.red() as f64,
            rgba.green() as f64,
            rgba.blue() as f64,
            rgba.alpha() as f64,
        )
    }
}

fn unit_to_u8(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Error returned when a color string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color {0:?}: expected #RGB, #ARGB, #RRGGBB or #AARRGGBB")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }

        // Shorthand forms repeat each nibble
        let expanded: String = match hex.len() {
            3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => hex.to_string(),
            _ => return Err(err()),
        };
        let value = u32::from_str_radix(&expanded, 16).map_err(|_| err())?;

        Ok(if expanded.len() == 6 {
            Self(0xFF00_0000 | value)
        } else {
            Self(value)
        })
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
