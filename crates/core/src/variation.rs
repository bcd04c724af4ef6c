//! Variation generator: derives a fixed, ordered set of named colors from
//! one seed color.
//!
//! Three transform families run in a fixed order: lightness scaling, hue
//! rotation, saturation adjustment. Candidates are serialized to hex and
//! deduplicated on that hex; the first candidate to produce a hex keeps it and
//! later ones are dropped along with their labels.

use crate::color::{hex_to_rgb, rgb_to_hsv, sector_hue, Hsv, Rgb};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::trace;

/// One named, derived color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variation {
    pub label: String,
    /// Lowercase `"#rrggbb"`.
    pub hex: String,
}

/// A single transform applied to the seed color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Multiply every RGB channel by `factor`.
    Lightness { label: &'static str, factor: f64 },
    /// Rotate the hue by `degrees`, keeping saturation and value.
    HueShift { degrees: i32 },
    /// Multiply saturation by `factor` (capped at 1), keeping hue and value.
    Saturation { label: &'static str, factor: f64 },
}

/// Every transform, in generation order.
pub const TRANSFORMS: [Transform; 11] = [
    Transform::Lightness {
        label: "Lighter",
        factor: 1.3,
    },
    Transform::Lightness {
        label: "Light",
        factor: 1.15,
    },
    Transform::Lightness {
        label: "Original",
        factor: 1.0,
    },
    Transform::Lightness {
        label: "Dark",
        factor: 0.85,
    },
    Transform::Lightness {
        label: "Darker",
        factor: 0.7,
    },
    Transform::HueShift { degrees: -30 },
    Transform::HueShift { degrees: -15 },
    Transform::HueShift { degrees: 15 },
    Transform::HueShift { degrees: 30 },
    Transform::Saturation {
        label: "More Saturated",
        factor: 1.3,
    },
    Transform::Saturation {
        label: "Less Saturated",
        factor: 0.7,
    },
];

impl Transform {
    /// Display label, e.g. `"Dark"` or `"Hue -30°"`.
    pub fn label(&self) -> String {
        match self {
            Transform::Lightness { label, .. } | Transform::Saturation { label, .. } => {
                (*label).to_string()
            }
            Transform::HueShift { degrees } => format!("Hue {degrees:+}°"),
        }
    }

    /// Applies the transform and serializes the result.
    ///
    /// `hsv` must be `rgb_to_hsv(seed)`; it is passed in so a generator run
    /// decomposes the seed once. Hue shifts start from the unwrapped sector
    /// hue instead of `hsv.h`.
    pub fn apply(&self, seed: Rgb, hsv: Hsv) -> String {
        match *self {
            Transform::Lightness { factor, .. } => seed.scale(factor).to_hex(),
            Transform::HueShift { degrees } => Hsv {
                h: shift_hue(sector_hue(seed), f64::from(degrees)),
                ..hsv
            }
            .to_rgb()
            .to_hex(),
            Transform::Saturation { factor, .. } => Hsv {
                s: (hsv.s * factor).min(1.0),
                ..hsv
            }
            .to_rgb()
            .to_hex(),
        }
    }
}

/// Rotates a hue by `degrees`, wrapping into [0, 360).
///
/// `h` may be an unwrapped sector hue in (-60, 300) and `degrees` lies in
/// [-300, 300]; the single wrap here is the only one applied to a rotated hue.
pub fn shift_hue(h: f64, degrees: f64) -> f64 {
    (h + degrees + 360.0) % 360.0
}

/// Generates the deduplicated variation list for `seed`.
///
/// Pure and deterministic: the same seed always yields the same labels,
/// hexes and order.
pub fn generate(seed: Rgb) -> Vec<Variation> {
    let hsv = rgb_to_hsv(seed);
    let mut seen = HashSet::with_capacity(TRANSFORMS.len());

    TRANSFORMS
        .iter()
        .filter_map(|t| {
            let hex = t.apply(seed, hsv);
            if seen.insert(hex.clone()) {
                Some(Variation {
                    label: t.label(),
                    hex,
                })
            } else {
                trace!(label = %t.label(), %hex, "dropping duplicate variation");
                None
            }
        })
        .collect()
}

/// Generates variations for a hex seed (`"#rrggbb"` or `"rrggbb"`).
///
/// Empty or malformed input yields an empty list.
pub fn generate_from_hex(hex: &str) -> Vec<Variation> {
    hex_to_rgb(hex).map(generate).unwrap_or_default()
}
