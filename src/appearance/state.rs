//! The appearance state triple and its derived effective mode.

use crate::scheme::DEFAULT_SCHEME;

use super::mode::ColorMode;

/// Appearance state owned by the controller.
///
/// `mode`, `follow_system`, and `scheme_id` mirror the persisted settings;
/// `system_prefers_dark` mirrors the most recent OS preference signal. The
/// effective mode is always derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppearanceState {
    /// Explicit user-chosen mode, used whenever `follow_system` is off.
    pub mode: ColorMode,
    /// When true, `mode` is ignored and the OS preference wins.
    pub follow_system: bool,
    /// Last observed OS color-scheme preference.
    pub system_prefers_dark: bool,
    /// Id of the active color scheme in the built-in catalog.
    pub scheme_id: String,
}

impl AppearanceState {
    /// The mode actually rendered, derived from the three inputs.
    pub fn effective_mode(&self) -> ColorMode {
        if self.follow_system {
            if self.system_prefers_dark {
                ColorMode::Dark
            } else {
                ColorMode::Light
            }
        } else {
            self.mode
        }
    }
}

impl Default for AppearanceState {
    /// First-run defaults: explicit light mode, not following the system,
    /// the `default` scheme.
    fn default() -> Self {
        Self {
            mode: ColorMode::Light,
            follow_system: false,
            system_prefers_dark: false,
            scheme_id: DEFAULT_SCHEME.to_string(),
        }
    }
}
