//! The UI framework's theme registry, as an injected seam.
//!
//! The real registry is a live mapping from theme name (`light`/`dark`) to
//! a palette of color tokens, plus the name of the currently active theme.
//! The controller only ever talks to [`ThemeRegistry`], so the appearance
//! layer is testable without a UI framework mounted.
//!
//! Palette updates are wholesale: the controller builds a fresh [`Palette`]
//! and replaces the registry's palette object, letting the framework's own
//! change detection observe the replacement. There is no in-place token
//! mutation and therefore no forced-refresh dance.

use crate::appearance::ColorMode;
use crate::scheme::Palette;

/// Live theme registry owned by the UI framework.
pub trait ThemeRegistry {
    /// The palette currently registered for a mode.
    fn palette(&self, mode: ColorMode) -> &Palette;

    /// Replaces the palette registered for a mode.
    fn set_palette(&mut self, mode: ColorMode, palette: Palette);

    /// The currently active theme name.
    fn active(&self) -> ColorMode;

    /// Activates a theme by name.
    fn set_active(&mut self, mode: ColorMode);
}

/// Reference registry implementation.
///
/// Seeded with the framework's full default palettes, including the
/// reserved tokens (surfaces, text colors) that scheme changes must never
/// touch. The `revision` counter stands in for framework change detection:
/// it moves exactly when a palette object is replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct InMemoryRegistry {
    light: Palette,
    dark: Palette,
    active: ColorMode,
    revision: u64,
}

impl InMemoryRegistry {
    /// Creates a registry with empty palettes and `light` active.
    pub fn new() -> Self {
        Self {
            light: Palette::new(),
            dark: Palette::new(),
            active: ColorMode::Light,
            revision: 0,
        }
    }

    /// Creates a registry seeded with the framework default palettes.
    pub fn with_defaults() -> Self {
        Self {
            light: framework_light_defaults(),
            dark: framework_dark_defaults(),
            active: ColorMode::Light,
            revision: 0,
        }
    }

    /// Number of palette replacements observed so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Default for InMemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeRegistry for InMemoryRegistry {
    fn palette(&self, mode: ColorMode) -> &Palette {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    fn set_palette(&mut self, mode: ColorMode, palette: Palette) {
        match mode {
            ColorMode::Light => self.light = palette,
            ColorMode::Dark => self.dark = palette,
        }
        self.revision += 1;
    }

    fn active(&self) -> ColorMode {
        self.active
    }

    fn set_active(&mut self, mode: ColorMode) {
        self.active = mode;
    }
}

/// The framework's stock light palette, reserved tokens included.
pub fn framework_light_defaults() -> Palette {
    Palette::from_pairs(&[
        ("background", "#FFFFFF"),
        ("surface", "#FFFFFF"),
        ("surface-bright", "#FFFFFF"),
        ("surface-light", "#EEEEEE"),
        ("surface-variant", "#424242"),
        ("on-surface-variant", "#EEEEEE"),
        ("primary", "#1976D2"),
        ("primary-darken-1", "#1565C0"),
        ("secondary", "#424242"),
        ("secondary-darken-1", "#1A1A1A"),
        ("error", "#F44336"),
        ("info", "#2196F3"),
        ("success", "#4CAF50"),
        ("warning", "#FF9800"),
        ("accent", "#82B1FF"),
        ("text-primary", "#212121"),
        ("text-secondary", "#757575"),
        ("card-background", "#FAFAFA"),
        ("sidebar-background", "#F5F5F5"),
        ("navbar-background", "#1976D2"),
        ("border-color", "#E0E0E0"),
        ("hover-color", "#F5F5F5"),
    ])
}

/// The framework's stock dark palette, reserved tokens included.
pub fn framework_dark_defaults() -> Palette {
    Palette::from_pairs(&[
        ("background", "#121212"),
        ("surface", "#212121"),
        ("surface-bright", "#ccbfd6"),
        ("surface-light", "#424242"),
        ("surface-variant", "#a3a3a3"),
        ("on-surface-variant", "#424242"),
        ("primary", "#2196F3"),
        ("primary-darken-1", "#1976D2"),
        ("secondary", "#54B6F2"),
        ("secondary-darken-1", "#48A999"),
        ("error", "#FF5252"),
        ("info", "#2196F3"),
        ("success", "#4CAF50"),
        ("warning", "#FB8C00"),
        ("accent", "#82B1FF"),
        ("text-primary", "#FFFFFF"),
        ("text-secondary", "#B0B0B0"),
        ("card-background", "#1E1E1E"),
        ("sidebar-background", "#1A1A1A"),
        ("navbar-background", "#1976D2"),
        ("border-color", "#404040"),
        ("hover-color", "#2A2A2A"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_carry_reserved_tokens() {
        let registry = InMemoryRegistry::with_defaults();
        assert_eq!(
            registry.palette(ColorMode::Light).get("background"),
            Some("#FFFFFF")
        );
        assert_eq!(
            registry.palette(ColorMode::Dark).get("background"),
            Some("#121212")
        );
    }

    #[test]
    fn test_set_palette_replaces_and_bumps_revision() {
        let mut registry = InMemoryRegistry::with_defaults();
        assert_eq!(registry.revision(), 0);

        let mut palette = registry.palette(ColorMode::Dark).clone();
        palette.insert("primary", "#AB47BC");
        registry.set_palette(ColorMode::Dark, palette);

        assert_eq!(registry.revision(), 1);
        assert_eq!(
            registry.palette(ColorMode::Dark).get("primary"),
            Some("#AB47BC")
        );
        // The light palette is untouched.
        assert_eq!(
            registry.palette(ColorMode::Light).get("primary"),
            Some("#1976D2")
        );
    }

    #[test]
    fn test_active_round_trip() {
        let mut registry = InMemoryRegistry::new();
        assert_eq!(registry.active(), ColorMode::Light);
        registry.set_active(ColorMode::Dark);
        assert_eq!(registry.active(), ColorMode::Dark);
    }
}
