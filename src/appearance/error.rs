//! Appearance operation errors.

/// Error returned when an appearance operation is given bad input.
///
/// These conditions are deliberately surfaced to the caller instead of being
/// swallowed inside the state layer; the UI decides whether to show a
/// message or ignore them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppearanceError {
    /// A scheme id that is not present in the built-in catalog.
    UnknownScheme { id: String },
    /// A mode string that is neither `"light"` nor `"dark"`.
    InvalidMode { value: String },
}

impl std::fmt::Display for AppearanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppearanceError::UnknownScheme { id } => {
                write!(f, "unknown color scheme '{}'", id)
            }
            AppearanceError::InvalidMode { value } => {
                write!(
                    f,
                    "invalid color mode '{}' (expected 'light' or 'dark')",
                    value
                )
            }
        }
    }
}

impl std::error::Error for AppearanceError {}
