//! The built-in scheme catalog.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use super::palette::Palette;
use super::scheme::ColorScheme;

/// Id of the scheme used when nothing is persisted.
pub const DEFAULT_SCHEME: &str = "default";

static SCHEMES: Lazy<BTreeMap<&'static str, ColorScheme>> = Lazy::new(|| {
    let mut schemes = BTreeMap::new();

    schemes.insert(
        "default",
        ColorScheme::new(
            "Default Blue",
            Palette::from_pairs(&[
                ("primary", "#1976D2"),
                ("primary-darken-1", "#1565C0"),
                ("secondary", "#424242"),
                ("secondary-darken-1", "#1A1A1A"),
                ("accent", "#82B1FF"),
                ("navbar-background", "#1976D2"),
                ("info", "#2196F3"),
            ]),
            Palette::from_pairs(&[
                ("primary", "#2196F3"),
                ("primary-darken-1", "#1976D2"),
                ("secondary", "#54B6F2"),
                ("secondary-darken-1", "#48A999"),
                ("accent", "#82B1FF"),
                ("navbar-background", "#2196F3"),
                ("info", "#2196F3"),
            ]),
        ),
    );

    schemes.insert(
        "purple",
        ColorScheme::new(
            "Elegant Purple",
            Palette::from_pairs(&[
                ("primary", "#673AB7"),
                ("primary-darken-1", "#512DA8"),
                ("secondary", "#9C27B0"),
                ("secondary-darken-1", "#7B1FA2"),
                ("accent", "#E1BEE7"),
                ("navbar-background", "#673AB7"),
                ("info", "#9C27B0"),
            ]),
            Palette::from_pairs(&[
                ("primary", "#9C27B0"),
                ("primary-darken-1", "#7B1FA2"),
                ("secondary", "#E1BEE7"),
                ("secondary-darken-1", "#CE93D8"),
                ("accent", "#BA68C8"),
                ("navbar-background", "#9C27B0"),
                ("info", "#AB47BC"),
            ]),
        ),
    );

    schemes.insert(
        "green",
        ColorScheme::new(
            "Natural Green",
            Palette::from_pairs(&[
                ("primary", "#4CAF50"),
                ("primary-darken-1", "#388E3C"),
                ("secondary", "#8BC34A"),
                ("secondary-darken-1", "#689F38"),
                ("accent", "#A5D6A7"),
                ("navbar-background", "#4CAF50"),
                ("info", "#66BB6A"),
            ]),
            Palette::from_pairs(&[
                ("primary", "#66BB6A"),
                ("primary-darken-1", "#4CAF50"),
                ("secondary", "#A5D6A7"),
                ("secondary-darken-1", "#81C784"),
                ("accent", "#C8E6C9"),
                ("navbar-background", "#66BB6A"),
                ("info", "#81C784"),
            ]),
        ),
    );

    schemes.insert(
        "orange",
        ColorScheme::new(
            "Vibrant Orange",
            Palette::from_pairs(&[
                ("primary", "#FF9800"),
                ("primary-darken-1", "#F57C00"),
                ("secondary", "#FFC107"),
                ("secondary-darken-1", "#FFA000"),
                ("accent", "#FFD54F"),
                ("navbar-background", "#FF9800"),
                ("info", "#FFB74D"),
            ]),
            Palette::from_pairs(&[
                ("primary", "#FFB74D"),
                ("primary-darken-1", "#FF9800"),
                ("secondary", "#FFD54F"),
                ("secondary-darken-1", "#FFCA28"),
                ("accent", "#FFE082"),
                ("navbar-background", "#FFB74D"),
                ("info", "#FFCC02"),
            ]),
        ),
    );

    schemes.insert(
        "teal",
        ColorScheme::new(
            "Fresh Teal",
            Palette::from_pairs(&[
                ("primary", "#009688"),
                ("primary-darken-1", "#00796B"),
                ("secondary", "#26A69A"),
                ("secondary-darken-1", "#00897B"),
                ("accent", "#80CBC4"),
                ("navbar-background", "#009688"),
                ("info", "#4DB6AC"),
            ]),
            Palette::from_pairs(&[
                ("primary", "#4DB6AC"),
                ("primary-darken-1", "#26A69A"),
                ("secondary", "#80CBC4"),
                ("secondary-darken-1", "#4DB6AC"),
                ("accent", "#B2DFDB"),
                ("navbar-background", "#4DB6AC"),
                ("info", "#80CBC4"),
            ]),
        ),
    );

    schemes
});

/// Looks up a scheme by id, returning `None` for ids not in the catalog.
pub fn find(id: &str) -> Option<&'static ColorScheme> {
    SCHEMES.get(id)
}

/// All catalog ids, in stable order.
pub fn ids() -> impl Iterator<Item = &'static str> {
    SCHEMES.keys().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::ALLOWED_TOKENS;

    #[test]
    fn test_default_scheme_exists() {
        assert!(find(DEFAULT_SCHEME).is_some());
    }

    #[test]
    fn test_catalog_contents() {
        let ids: Vec<&str> = ids().collect();
        assert_eq!(ids, vec!["default", "green", "orange", "purple", "teal"]);
    }

    #[test]
    fn test_unknown_id_is_none() {
        assert!(find("nonexistent").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn test_schemes_only_define_allowed_tokens() {
        for id in ids() {
            let scheme = find(id).unwrap();
            for (token, _) in scheme.light.iter().chain(scheme.dark.iter()) {
                assert!(
                    ALLOWED_TOKENS.contains(&token),
                    "scheme '{id}' defines non-allowed token '{token}'"
                );
            }
        }
    }

    #[test]
    fn test_teal_dark_primary() {
        let teal = find("teal").unwrap();
        assert_eq!(teal.dark.get("primary"), Some("#4DB6AC"));
        assert_eq!(teal.name, "Fresh Teal");
    }
}
