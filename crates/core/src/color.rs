//! Color types and conversion functions for shade-finder.
//!
//! Three representations are in play:
//! - `Rgb`: 8-bit channels, the only form that crosses the system boundary
//!   (as a `#rrggbb` string).
//! - `RawRgb`: unclamped `f64` channels on the 0..=255 scale, the output of
//!   channel arithmetic and HSV reconstruction.
//! - `Hsv`: hue in degrees [0, 360), saturation and value in [0, 1]. Always
//!   re-derived from an `Rgb`, never stored.
//!
//! All conversions are pure functions. Quantization back to 8 bits happens in
//! exactly one place, [`rgb_to_hex`], which clamps before rounding and is
//! therefore total over any `f64` input.

use crate::error::ShadeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// 8-bit RGB color.
///
/// Serializes as a hex string `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// RGB channels on the 0..=255 scale, not yet clamped or rounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Hue/saturation/value triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `"#rrggbb"` or `"rrggbb"` (case insensitive).
    ///
    /// Returns `None` for anything that is not exactly six hex digits.
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        hex_to_rgb(hex)
    }

    /// Formats as lowercase `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self.r.into(), self.g.into(), self.b.into())
    }

    /// Multiplies every channel by `factor`, leaving the result unclamped.
    pub fn scale(self, factor: f64) -> RawRgb {
        let raw = RawRgb::from(self);
        RawRgb {
            r: raw.r * factor,
            g: raw.g * factor,
            b: raw.b * factor,
        }
    }

    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self)
    }
}

impl From<Rgb> for RawRgb {
    fn from(c: Rgb) -> Self {
        RawRgb {
            r: f64::from(c.r),
            g: f64::from(c.g),
            b: f64::from(c.b),
        }
    }
}

impl RawRgb {
    /// Clamps, rounds and formats as lowercase `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }
}

impl Hsv {
    pub fn to_rgb(self) -> RawRgb {
        hsv_to_rgb(self)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ShadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s).ok_or_else(|| {
            ShadeError::InvalidColor(format!("expected 6 hex digits like #3498db, got {s:?}"))
        })
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Parses a hex color string with an optional leading `#`.
///
/// Exactly six ASCII hex digits are required; anything else yields `None`.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    // from_str_radix alone would accept a leading '+'.
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

/// Quantizes one channel to 8 bits: clamp to [0, 255], then round.
///
/// NaN maps to 0.
fn quantize(c: f64) -> u8 {
    c.clamp(0.0, 255.0).round() as u8
}

/// Formats three channels as lowercase `"#rrggbb"`.
///
/// Each channel is clamped to [0, 255] and rounded first, so this never
/// fails for out-of-range or fractional input.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    format!("#{:02x}{:02x}{:02x}", quantize(r), quantize(g), quantize(b))
}

/// Hue in degrees before wrapping: in (-60, 0) when red is the max channel
/// and blue exceeds green, otherwise in [0, 300).
///
/// Offsets are added to this value and wrapped once.
pub(crate) fn sector_hue(c: Rgb) -> f64 {
    let RawRgb { r, g, b } = RawRgb::from(c);
    let max = r.max(g).max(b);
    let delta = max - r.min(g).min(b);

    let sector = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta) % 6.0
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    sector * 60.0
}

/// Decomposes an RGB color into hue/saturation/value.
///
/// Hue is 0 for achromatic colors. Saturation is 0 when the color is black.
pub fn rgb_to_hsv(c: Rgb) -> Hsv {
    let RawRgb { r, g, b } = RawRgb::from(c);
    let max = r.max(g).max(b);
    let delta = max - r.min(g).min(b);

    let h = (sector_hue(c) + 360.0) % 360.0;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    Hsv { h, s, v: max / 255.0 }
}

/// Reconstructs RGB channels (0..=255 scale) from hue/saturation/value.
///
/// `h` must already be in [0, 360). The result is left unclamped; callers
/// quantize through [`rgb_to_hex`].
pub fn hsv_to_rgb(hsv: Hsv) -> RawRgb {
    let Hsv { h, s, v } = hsv;
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    RawRgb {
        r: (r + m) * 255.0,
        g: (g + m) * 255.0,
        b: (b + m) * 255.0,
    }
}
