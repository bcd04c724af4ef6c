//! Color-name lookup: a read-only mapping from human-readable names to colors.
//!
//! Callers inject the mapping through the [`ColorNames`] trait so tests and
//! alternative dictionaries can stand in for the built-in CSS table.

use crate::color::{hex_to_rgb, Rgb};
use crate::error::ShadeError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Read-only name -> color mapping.
pub trait ColorNames {
    /// Looks up `name` case-insensitively after trimming surrounding
    /// whitespace. Matching is exact otherwise.
    fn lookup(&self, name: &str) -> Option<Rgb>;
}

/// One record of a color-name table file: `{"name": "Coral", "hex": "#ff7f50"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct NameEntry {
    pub name: String,
    pub hex: String,
}

/// A color-name table keyed by lowercased name.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    colors: HashMap<String, Rgb>,
    /// Names in insertion order, as first written.
    names: Vec<String>,
}

impl NameTable {
    /// Builds a table from `(name, hex)` pairs.
    ///
    /// When two entries share a name (ignoring case), the first one wins.
    /// Returns `ShadeError::InvalidNameTable` if any hex value is malformed.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, ShadeError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut table = Self::default();
        for (name, hex) in pairs {
            let color = hex_to_rgb(hex).ok_or_else(|| {
                ShadeError::InvalidNameTable(format!("entry {name:?} has invalid hex {hex:?}"))
            })?;
            table.insert(name, color);
        }
        Ok(table)
    }

    /// Parses a JSON array of `{"name", "hex"}` records.
    pub fn from_json(json: &str) -> Result<Self, ShadeError> {
        let entries: Vec<NameEntry> =
            serde_json::from_str(json).map_err(|e| ShadeError::InvalidNameTable(e.to_string()))?;
        Self::from_pairs(entries.iter().map(|e| (e.name.as_str(), e.hex.as_str())))
    }

    /// Reads and parses a JSON table file.
    pub fn from_path(path: &Path) -> Result<Self, ShadeError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ShadeError::Io(format!("failed to read {}: {e}", path.display())))?;
        let table = Self::from_json(&json)?;
        debug!(path = %path.display(), names = table.len(), "loaded color-name table");
        Ok(table)
    }

    /// The CSS named colors.
    pub fn builtin() -> Self {
        let mut table = Self::default();
        for &(name, r, g, b) in CSS_COLORS {
            table.insert(name, Rgb::new(r, g, b));
        }
        table
    }

    fn insert(&mut self, name: &str, color: Rgb) {
        let key = normalize_name(name);
        if !self.colors.contains_key(&key) {
            self.colors.insert(key, color);
            self.names.push(name.trim().to_string());
        }
    }

    /// Returns the number of distinct names.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl ColorNames for NameTable {
    fn lookup(&self, name: &str) -> Option<Rgb> {
        self.colors.get(&normalize_name(name)).copied()
    }
}

/// Ordered `(name, color)` pairs. Like [`NameTable`], the first entry whose
/// name matches wins.
impl<S: AsRef<str>> ColorNames for [(S, Rgb)] {
    fn lookup(&self, name: &str) -> Option<Rgb> {
        let wanted = normalize_name(name);
        self.iter()
            .find(|(k, _)| normalize_name(k.as_ref()) == wanted)
            .map(|(_, c)| *c)
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[rustfmt::skip]
const CSS_COLORS: &[(&str, u8, u8, u8)] = &[
    ("aliceblue", 240, 248, 255),
    ("antiquewhite", 250, 235, 215),
    ("aqua", 0, 255, 255),
    ("aquamarine", 127, 255, 212),
    ("azure", 240, 255, 255),
    ("beige", 245, 245, 220),
    ("bisque", 255, 228, 196),
    ("black", 0, 0, 0),
    ("blanchedalmond", 255, 235, 205),
    ("blue", 0, 0, 255),
    ("blueviolet", 138, 43, 226),
    ("brown", 165, 42, 42),
    ("burlywood", 222, 184, 135),
    ("cadetblue", 95, 158, 160),
    ("chartreuse", 127, 255, 0),
    ("chocolate", 210, 105, 30),
    ("coral", 255, 127, 80),
    ("cornflowerblue", 100, 149, 237),
    ("cornsilk", 255, 248, 220),
    ("crimson", 220, 20, 60),
    ("cyan", 0, 255, 255),
    ("darkblue", 0, 0, 139),
    ("darkcyan", 0, 139, 139),
    ("darkgoldenrod", 184, 134, 11),
    ("darkgray", 169, 169, 169),
    ("darkgreen", 0, 100, 0),
    ("darkgrey", 169, 169, 169),
    ("darkkhaki", 189, 183, 107),
    ("darkmagenta", 139, 0, 139),
    ("darkolivegreen", 85, 107, 47),
    ("darkorange", 255, 140, 0),
    ("darkorchid", 153, 50, 204),
    ("darkred", 139, 0, 0),
    ("darksalmon", 233, 150, 122),
    ("darkseagreen", 143, 188, 143),
    ("darkslateblue", 72, 61, 139),
    ("darkslategray", 47, 79, 79),
    ("darkslategrey", 47, 79, 79),
    ("darkturquoise", 0, 206, 209),
    ("darkviolet", 148, 0, 211),
    ("deeppink", 255, 20, 147),
    ("deepskyblue", 0, 191, 255),
    ("dimgray", 105, 105, 105),
    ("dimgrey", 105, 105, 105),
    ("dodgerblue", 30, 144, 255),
    ("firebrick", 178, 34, 34),
    ("floralwhite", 255, 250, 240),
    ("forestgreen", 34, 139, 34),
    ("fuchsia", 255, 0, 255),
    ("gainsboro", 220, 220, 220),
    ("ghostwhite", 248, 248, 255),
    ("gold", 255, 215, 0),
    ("goldenrod", 218, 165, 32),
    ("gray", 128, 128, 128),
    ("green", 0, 128, 0),
    ("greenyellow", 173, 255, 47),
    ("grey", 128, 128, 128),
    ("honeydew", 240, 255, 240),
    ("hotpink", 255, 105, 180),
    ("indianred", 205, 92, 92),
    ("indigo", 75, 0, 130),
    ("ivory", 255, 255, 240),
    ("khaki", 240, 230, 140),
    ("lavender", 230, 230, 250),
    ("lavenderblush", 255, 240, 245),
    ("lawngreen", 124, 252, 0),
    ("lemonchiffon", 255, 250, 205),
    ("lightblue", 173, 216, 230),
    ("lightcoral", 240, 128, 128),
    ("lightcyan", 224, 255, 255),
    ("lightgoldenrodyellow", 250, 250, 210),
    ("lightgray", 211, 211, 211),
    ("lightgreen", 144, 238, 144),
    ("lightgrey", 211, 211, 211),
    ("lightpink", 255, 182, 193),
    ("lightsalmon", 255, 160, 122),
    ("lightseagreen", 32, 178, 170),
    ("lightskyblue", 135, 206, 250),
    ("lightslategray", 119, 136, 153),
    ("lightslategrey", 119, 136, 153),
    ("lightsteelblue", 176, 196, 222),
    ("lightyellow", 255, 255, 224),
    ("lime", 0, 255, 0),
    ("limegreen", 50, 205, 50),
    ("linen", 250, 240, 230),
    ("magenta", 255, 0, 255),
    ("maroon", 128, 0, 0),
    ("mediumaquamarine", 102, 205, 170),
    ("mediumblue", 0, 0, 205),
    ("mediumorchid", 186, 85, 211),
    ("mediumpurple", 147, 112, 219),
    ("mediumseagreen", 60, 179, 113),
    ("mediumslateblue", 123, 104, 238),
    ("mediumspringgreen", 0, 250, 154),
    ("mediumturquoise", 72, 209, 204),
    ("mediumvioletred", 199, 21, 133),
    ("midnightblue", 25, 25, 112),
    ("mintcream", 245, 255, 250),
    ("mistyrose", 255, 228, 225),
    ("moccasin", 255, 228, 181),
    ("navajowhite", 255, 222, 173),
    ("navy", 0, 0, 128),
    ("oldlace", 253, 245, 230),
    ("olive", 128, 128, 0),
    ("olivedrab", 107, 142, 35),
    ("orange", 255, 165, 0),
    ("orangered", 255, 69, 0),
    ("orchid", 218, 112, 214),
    ("palegoldenrod", 238, 232, 170),
    ("palegreen", 152, 251, 152),
    ("paleturquoise", 175, 238, 238),
    ("palevioletred", 219, 112, 147),
    ("papayawhip", 255, 239, 213),
    ("peachpuff", 255, 218, 185),
    ("peru", 205, 133, 63),
    ("pink", 255, 192, 203),
    ("plum", 221, 160, 221),
    ("powderblue", 176, 224, 230),
    ("purple", 128, 0, 128),
    ("rebeccapurple", 102, 51, 153),
    ("red", 255, 0, 0),
    ("rosybrown", 188, 143, 143),
    ("royalblue", 65, 105, 225),
    ("saddlebrown", 139, 69, 19),
    ("salmon", 250, 128, 114),
    ("sandybrown", 244, 164, 96),
    ("seagreen", 46, 139, 87),
    ("seashell", 255, 245, 238),
    ("sienna", 160, 82, 45),
    ("silver", 192, 192, 192),
    ("skyblue", 135, 206, 235),
    ("slateblue", 106, 90, 205),
    ("slategray", 112, 128, 144),
    ("slategrey", 112, 128, 144),
    ("snow", 255, 250, 250),
    ("springgreen", 0, 255, 127),
    ("steelblue", 70, 130, 180),
    ("tan", 210, 180, 140),
    ("teal", 0, 128, 128),
    ("thistle", 216, 191, 216),
    ("tomato", 255, 99, 71),
    ("turquoise", 64, 224, 208),
    ("violet", 238, 130, 238),
    ("wheat", 245, 222, 179),
    ("white", 255, 255, 255),
    ("whitesmoke", 245, 245, 245),
    ("yellow", 255, 255, 0),
    ("yellowgreen", 154, 205, 50),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_resolves_common_names() {
        let table = NameTable::builtin();
        assert_eq!(table.lookup("red"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(table.lookup("coral"), Some(Rgb::new(255, 127, 80)));
        assert_eq!(table.lookup("blue"), Some(Rgb::new(0, 0, 255)));
    }

    #[test]
    fn lookup_ignores_case_and_surrounding_whitespace() {
        let table = NameTable::builtin();
        assert_eq!(table.lookup("  CoRaL "), table.lookup("coral"));
    }

    #[test]
    fn lookup_requires_exact_match() {
        let table = NameTable::builtin();
        assert_eq!(table.lookup("cora"), None);
        assert_eq!(table.lookup("light blue"), None);
    }

    #[test]
    fn builtin_has_every_css_name_once() {
        let table = NameTable::builtin();
        assert_eq!(table.len(), CSS_COLORS.len());
        assert_eq!(table.names().count(), table.len());
        assert!(!table.is_empty());
    }

    #[test]
    fn from_pairs_keeps_first_duplicate() {
        let table =
            NameTable::from_pairs([("Sky", "#87ceeb"), ("SKY", "#000000"), ("Sea", "2e8b57")])
                .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("sky"), Some(Rgb::new(0x87, 0xce, 0xeb)));
        assert_eq!(table.names().collect::<Vec<_>>(), ["Sky", "Sea"]);
    }

    #[test]
    fn from_pairs_rejects_bad_hex() {
        let err = NameTable::from_pairs([("Mud", "#12345z")]).unwrap_err();
        assert!(matches!(err, ShadeError::InvalidNameTable(_)));
        assert!(err.to_string().contains("Mud"));
    }

    #[test]
    fn from_json_parses_name_list_records() {
        let json = r##"[
            {"name": "Absolute Zero", "hex": "#0048ba"},
            {"name": "Acid Green", "hex": "#b0bf1a"}
        ]"##;
        let table = NameTable::from_json(json).unwrap();
        assert_eq!(table.lookup("absolute zero"), Some(Rgb::new(0x00, 0x48, 0xba)));
        assert_eq!(table.lookup("ACID GREEN"), Some(Rgb::new(0xb0, 0xbf, 0x1a)));
    }

    #[test]
    fn from_json_rejects_wrong_shape() {
        let err = NameTable::from_json(r##"{"red": "#ff0000"}"##).unwrap_err();
        assert!(matches!(err, ShadeError::InvalidNameTable(_)));
    }

    #[test]
    fn from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r##"[{{"name": "Ink", "hex": "#1b1b2f"}}]"##).unwrap();
        let table = NameTable::from_path(file.path()).unwrap();
        assert_eq!(table.lookup("ink"), Some(Rgb::new(0x1b, 0x1b, 0x2f)));
    }

    #[test]
    fn from_path_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = NameTable::from_path(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ShadeError::Io(_)));
        assert!(err.to_string().contains("missing.json"), "path missing in: {err}");
    }

    #[test]
    fn pair_slice_can_stand_in_for_table() {
        let pairs = [("Brand Teal", Rgb::new(0, 128, 128))];
        assert_eq!(pairs[..].lookup("brand teal"), Some(Rgb::new(0, 128, 128)));
        assert_eq!(pairs[..].lookup("teal"), None);
    }

    #[test]
    fn pair_slice_keeps_first_case_insensitive_match() {
        let pairs = vec![
            ("Sky".to_string(), Rgb::new(0x87, 0xce, 0xeb)),
            ("SKY".to_string(), Rgb::new(0, 0, 0)),
        ];
        for _ in 0..8 {
            assert_eq!(pairs.as_slice().lookup("sky"), Some(Rgb::new(0x87, 0xce, 0xeb)));
        }
    }
}
