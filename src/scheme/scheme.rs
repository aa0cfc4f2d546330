//! The ColorScheme type.

use serde::{Deserialize, Serialize};

use super::palette::Palette;

/// A named pair of palettes, one per visual mode.
///
/// Schemes are defined at build time in the catalog and are read-only;
/// selecting one never mutates it, the controller copies its values into
/// fresh registry palettes instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Human-readable name shown in the scheme picker.
    pub name: String,
    pub light: Palette,
    pub dark: Palette,
}

impl ColorScheme {
    pub fn new(name: impl Into<String>, light: Palette, dark: Palette) -> Self {
        Self {
            name: name.into(),
            light,
            dark,
        }
    }
}
