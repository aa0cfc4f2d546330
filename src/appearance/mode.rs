//! Light/dark visual mode.

use std::fmt;
use std::str::FromStr;

use dark_light::{detect as detect_os_scheme, Mode as OsScheme};
use serde::{Deserialize, Serialize};

use super::error::AppearanceError;

/// The rendered visual mode.
///
/// Persisted under the `theme` key as `"light"` or `"dark"`; any other
/// stored value is rejected at the parse boundary rather than silently
/// coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// The other mode. Used by the toggle operation.
    pub fn opposite(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    /// The persisted wire form, `"light"` or `"dark"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = AppearanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            other => Err(AppearanceError::InvalidMode {
                value: other.to_string(),
            }),
        }
    }
}

/// Queries the OS for the current color-scheme preference.
///
/// This is the default detector wired into
/// [`AppearanceController`](super::AppearanceController); tests and
/// embedders that manage the signal themselves inject their own closure
/// instead.
pub fn detect_system_mode() -> ColorMode {
    match detect_os_scheme() {
        OsScheme::Dark => ColorMode::Dark,
        OsScheme::Light => ColorMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_flips_both_ways() {
        assert_eq!(ColorMode::Light.opposite(), ColorMode::Dark);
        assert_eq!(ColorMode::Dark.opposite(), ColorMode::Light);
    }

    #[test]
    fn test_parse_round_trip() {
        for mode in [ColorMode::Light, ColorMode::Dark] {
            assert_eq!(mode.as_str().parse::<ColorMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_value() {
        let err = "solarized".parse::<ColorMode>().unwrap_err();
        assert_eq!(
            err,
            AppearanceError::InvalidMode {
                value: "solarized".to_string()
            }
        );
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        // The persisted wire form is lowercase; anything else is a caller bug.
        assert!("Dark".parse::<ColorMode>().is_err());
    }
}
