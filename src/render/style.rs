//! Per-element visual styling supplied to the emitter at render time.
//!
//! A [`StyleSheet`] maps element codes to disk radii and gradient identities. Sheets are
//! plain values threaded into each render call; the crate holds no process-wide styling
//! state. The TOML schema mirrors the table the persistence collaborator stores, and a
//! builtin sheet covering the common organic elements ships embedded in the crate.

use smol_str::SmolStr;
use std::collections::HashMap;

/// Disk radius used for element codes absent from the sheet.
pub const DEFAULT_RADIUS: u32 = 30;

/// Gradient identifier used for element codes absent from the sheet.
pub const DEFAULT_GROUP: &str = "default";

/// Colour stops of the default gradient (hex, no leading `#`).
pub const DEFAULT_STOPS: [&str; 3] = ["E2E8F0", "718096", "1a202c"];

/// Visual attributes of one element code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementStyle {
    /// Disk radius in document units; positive.
    pub radius: u32,
    /// Gradient identifier referenced by the disk fill.
    pub color_group: SmolStr,
    /// Colour stops of the gradient definition (hex, no leading `#`).
    pub stops: [SmolStr; 3],
}

impl ElementStyle {
    /// The style applied to element codes the sheet does not know.
    pub fn fallback() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            color_group: SmolStr::new(DEFAULT_GROUP),
            stops: DEFAULT_STOPS.map(SmolStr::new),
        }
    }
}

/// Immutable element-code → style mapping for one render call.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    entries: HashMap<SmolStr, ElementStyle>,
}

impl StyleSheet {
    /// Creates an empty sheet; every lookup resolves to the fallback style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the style of an element code.
    pub fn insert(&mut self, code: &str, style: ElementStyle) {
        self.entries.insert(SmolStr::new(code), style);
    }

    /// The style of a known element code.
    pub fn get(&self, code: &str) -> Option<&ElementStyle> {
        self.entries.get(code)
    }

    /// The style to render an element code with, falling back to the default entry.
    pub fn resolve(&self, code: &str) -> ElementStyle {
        self.get(code).cloned().unwrap_or_else(ElementStyle::fallback)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in lexicographic code order, for deterministic document headers.
    pub fn entries_sorted(&self) -> Vec<(&SmolStr, &ElementStyle)> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries
    }

    /// Parses a sheet from its TOML representation.
    ///
    /// # Errors
    ///
    /// Returns the underlying deserialization error when the document does not match
    /// the schema.
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        let file: schema::StyleFile = toml::from_str(source)?;

        let mut sheet = Self::new();
        for entry in file.element {
            sheet.insert(
                &entry.code,
                ElementStyle {
                    radius: entry.radius,
                    color_group: SmolStr::new(&entry.name),
                    stops: entry.colours.map(|c| SmolStr::new(&c)),
                },
            );
        }
        Ok(sheet)
    }

    /// The builtin sheet embedded in the crate, covering the common organic elements.
    pub fn builtin() -> Self {
        let source = include_str!("../../styles/elements.toml");
        Self::from_toml_str(source)
            .unwrap_or_else(|e| panic!("Failed to parse builtin style table: {}", e))
    }
}

mod schema {
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Clone)]
    #[serde(deny_unknown_fields)]
    pub struct StyleFile {
        #[serde(default)]
        pub element: Vec<ElementEntry>,
    }

    #[derive(Debug, Deserialize, Clone)]
    #[serde(deny_unknown_fields)]
    pub struct ElementEntry {
        pub code: String,
        pub name: String,
        pub radius: u32,
        pub colours: [String; 3],
    }
}
