//! Input resolution: turns the raw text a user typed into a seed color and
//! its variations.
//!
//! A `#` prefix selects the hex path, which needs a full `#rrggbb`. Anything
//! else longer than two characters is treated as a color name. Shorter input
//! is considered still being typed and produces nothing, without flagging an
//! unknown name.

use crate::color::{hex_to_rgb, Rgb};
use crate::names::ColorNames;
use crate::variation::{generate, Variation};
use serde::Serialize;
use tracing::debug;

/// Seed shown before the user has entered anything.
pub const DEFAULT_SEED: &str = "#3498db";

/// Message a shell shows when [`Lookup::name_not_recognized`] is set.
pub const NAME_NOT_RECOGNIZED: &str =
    "Color name not recognized. Try names like \"red\", \"blue\", \"coral\", etc.";

/// Names shorter than this many characters are not looked up.
const MIN_NAME_CHARS: usize = 3;

/// How an input string was understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A complete `#rrggbb` code.
    Hex(Rgb),
    /// A name found in the table.
    Named { name: String, color: Rgb },
    /// A name-shaped input with no table entry.
    Unrecognized,
    /// Empty, too short, or a partial hex code.
    Incomplete,
}

impl Resolution {
    /// The seed color, if the input resolved to one.
    pub fn seed(&self) -> Option<Rgb> {
        match self {
            Resolution::Hex(color) | Resolution::Named { color, .. } => Some(*color),
            Resolution::Unrecognized | Resolution::Incomplete => None,
        }
    }
}

/// Result handed to a presentation shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lookup {
    pub variations: Vec<Variation>,
    pub name_not_recognized: bool,
}

/// Classifies `input` without generating variations.
pub fn classify<N: ColorNames + ?Sized>(input: &str, names: &N) -> Resolution {
    let resolution = if input.starts_with('#') {
        hex_to_rgb(input).map_or(Resolution::Incomplete, Resolution::Hex)
    } else if input.chars().count() >= MIN_NAME_CHARS {
        match names.lookup(input) {
            Some(color) => Resolution::Named {
                name: input.trim().to_string(),
                color,
            },
            None => Resolution::Unrecognized,
        }
    } else {
        Resolution::Incomplete
    };
    debug!(input, ?resolution, "classified color input");
    resolution
}

/// Resolves `input` and generates the variations for it.
///
/// Unresolvable input yields an empty list; `name_not_recognized` is set only
/// when a name was looked up and missed.
pub fn lookup<N: ColorNames + ?Sized>(input: &str, names: &N) -> Lookup {
    let resolution = classify(input, names);
    Lookup {
        variations: resolution.seed().map(generate).unwrap_or_default(),
        name_not_recognized: resolution == Resolution::Unrecognized,
    }
}
