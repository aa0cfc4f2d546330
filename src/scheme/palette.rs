//! Token-to-color mappings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Tokens a color scheme is allowed to write into the theme registry.
///
/// Everything else in a registry palette belongs to the UI framework
/// (surfaces, text colors, and so on) and must never be overwritten by a
/// scheme change.
pub const ALLOWED_TOKENS: &[&str] = &[
    "primary",
    "primary-darken-1",
    "secondary",
    "secondary-darken-1",
    "info",
    "success",
    "warning",
    "error",
    "navbar-background",
    "accent",
];

/// An ordered mapping from color token to CSS color value.
///
/// Palettes are plain data: the controller composes them, the registry
/// stores them, and the styling layer reads them. Values are kept as the
/// strings the UI framework consumes (`"#1976D2"` and friends).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette(BTreeMap<String, String>);

impl Palette {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a palette from token/value pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut palette = Self::new();
        for (token, value) in pairs {
            palette.insert(*token, *value);
        }
        palette
    }

    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) {
        self.0.insert(token.into(), value.into());
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.0.get(token).map(|value| value.as_str())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains_key(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(token, value)| (token.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_and_get() {
        let palette = Palette::from_pairs(&[("primary", "#1976D2"), ("accent", "#82B1FF")]);
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get("primary"), Some("#1976D2"));
        assert_eq!(palette.get("missing"), None);
    }

    #[test]
    fn test_insert_overwrites() {
        let mut palette = Palette::new();
        palette.insert("primary", "#111111");
        palette.insert("primary", "#222222");
        assert_eq!(palette.get("primary"), Some("#222222"));
        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn test_iteration_order_is_stable() {
        let palette = Palette::from_pairs(&[("b", "2"), ("a", "1"), ("c", "3")]);
        let tokens: Vec<&str> = palette.iter().map(|(token, _)| token).collect();
        assert_eq!(tokens, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_allowed_tokens_match_registry_contract() {
        assert_eq!(ALLOWED_TOKENS.len(), 10);
        assert!(ALLOWED_TOKENS.contains(&"navbar-background"));
        assert!(!ALLOWED_TOKENS.contains(&"background"));
        assert!(!ALLOWED_TOKENS.contains(&"surface"));
    }
}
