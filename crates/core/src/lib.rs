#![deny(unsafe_code)]
//! Core color engine for shade-finder.
//!
//! Provides the color-space converters (`hex_to_rgb`, `rgb_to_hex`,
//! `rgb_to_hsv`, `hsv_to_rgb`), the variation generator that derives a
//! deduplicated palette of named colors from one seed, the injectable
//! color-name table, and the input resolution used by presentation shells.

pub mod color;
pub mod error;
pub mod names;
pub mod resolve;
pub mod variation;

pub use color::{hex_to_rgb, hsv_to_rgb, rgb_to_hex, rgb_to_hsv, Hsv, RawRgb, Rgb};
pub use error::ShadeError;
pub use names::{ColorNames, NameTable};
pub use resolve::{classify, lookup, Lookup, Resolution, DEFAULT_SEED, NAME_NOT_RECOGNIZED};
pub use variation::{generate, generate_from_hex, Transform, Variation};
